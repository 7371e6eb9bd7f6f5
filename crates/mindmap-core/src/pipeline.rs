use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One of the two request flows: a full mind map from a project idea,
/// or a flat expansion of a single topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pipeline {
    MindMap,
    Subtopics,
}

impl Pipeline {
    pub const ALL: &'static [Pipeline] = &[Pipeline::MindMap, Pipeline::Subtopics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pipeline::MindMap => "mind_map",
            Pipeline::Subtopics => "subtopics",
        }
    }

    /// Delimiter that opens the JSON value this pipeline expects.
    pub fn open_delimiter(&self) -> char {
        match self {
            Pipeline::MindMap => '{',
            Pipeline::Subtopics => '[',
        }
    }

    pub fn close_delimiter(&self) -> char {
        match self {
            Pipeline::MindMap => '}',
            Pipeline::Subtopics => ']',
        }
    }

    /// Lowercase prefixes that mark an entry name as a placeholder
    /// when the name is also shorter than three words.
    pub fn generic_stems(&self) -> &'static [&'static str] {
        match self {
            Pipeline::MindMap => &["subtopic", "task", "step", "component"],
            Pipeline::Subtopics => &["step", "task", "subtask", "item"],
        }
    }

    /// Token budget passed to the generator.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Pipeline::MindMap => 1024,
            Pipeline::Subtopics => 512,
        }
    }

    /// Name of the request body field carrying the input string.
    pub fn input_field(&self) -> &'static str {
        match self {
            Pipeline::MindMap => "central_idea",
            Pipeline::Subtopics => "topic",
        }
    }

    fn missing_input_message(&self) -> &'static str {
        match self {
            Pipeline::MindMap => "No central idea provided",
            Pipeline::Subtopics => "No topic provided",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject empty input. Anything else, whitespace included, is returned
/// untouched so it can be echoed back verbatim.
pub fn require_input(pipeline: Pipeline, input: &str) -> Result<&str, InputError> {
    if input.is_empty() {
        return Err(InputError(pipeline.missing_input_message().to_string()));
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_match_pipeline_kind() {
        assert_eq!(Pipeline::MindMap.open_delimiter(), '{');
        assert_eq!(Pipeline::MindMap.close_delimiter(), '}');
        assert_eq!(Pipeline::Subtopics.open_delimiter(), '[');
        assert_eq!(Pipeline::Subtopics.close_delimiter(), ']');
    }

    #[test]
    fn token_budgets() {
        assert_eq!(Pipeline::MindMap.max_tokens(), 1024);
        assert_eq!(Pipeline::Subtopics.max_tokens(), 512);
    }

    #[test]
    fn stems_differ_per_pipeline() {
        assert!(Pipeline::MindMap.generic_stems().contains(&"component"));
        assert!(!Pipeline::MindMap.generic_stems().contains(&"item"));
        assert!(Pipeline::Subtopics.generic_stems().contains(&"subtask"));
        assert!(!Pipeline::Subtopics.generic_stems().contains(&"subtopic"));
    }

    #[test]
    fn empty_input_rejected() {
        let err = require_input(Pipeline::MindMap, "").unwrap_err();
        assert_eq!(err.to_string(), "No central idea provided");
        let err = require_input(Pipeline::Subtopics, "").unwrap_err();
        assert_eq!(err.to_string(), "No topic provided");
    }

    #[test]
    fn whitespace_input_accepted() {
        assert_eq!(require_input(Pipeline::Subtopics, "   \n").unwrap(), "   \n");
    }

    #[test]
    fn input_returned_verbatim() {
        assert_eq!(
            require_input(Pipeline::MindMap, "  Build a website ").unwrap(),
            "  Build a website "
        );
    }

    #[test]
    fn serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Pipeline::MindMap).unwrap(),
            "\"mind_map\""
        );
        for p in Pipeline::ALL {
            assert_eq!(p.to_string(), p.as_str());
        }
    }
}
