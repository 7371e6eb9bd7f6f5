use serde_json::Value;

use crate::error::Rejection;
use crate::pipeline::Pipeline;

/// Outcome of checking a candidate model response.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Parsed and free of placeholder names. Passed on unchanged.
    Accepted(Value),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// A name is generic when, case-folded, it starts with one of `stems`
/// and has fewer than three whitespace-separated words.
pub fn is_generic(name: &str, stems: &[&str]) -> bool {
    let lower = name.to_lowercase();
    stems.iter().any(|stem| lower.starts_with(stem)) && name.split_whitespace().count() < 3
}

/// Parse `candidate` strictly and judge whether it is usable.
///
/// Only the direct entries are inspected: `subtopics[i].name` for a mind
/// map, each element's `name` for a subtopic list. Children are never
/// checked, and missing fields or unexpected cardinality are not corrected.
/// A `name` that is present must be a string.
/// One generic entry rejects the whole response.
pub fn validate(candidate: &str, pipeline: Pipeline) -> Verdict {
    let value: Value = match serde_json::from_str(candidate) {
        Ok(v) => v,
        Err(e) => return Verdict::Rejected(Rejection::Parse(e.to_string())),
    };

    let entries: &[Value] = match (pipeline, &value) {
        (Pipeline::MindMap, Value::Object(map)) => match map.get("subtopics") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        (Pipeline::Subtopics, Value::Array(items)) => items.as_slice(),
        (Pipeline::MindMap, _) => {
            return Verdict::Rejected(Rejection::Shape("expected a JSON object".into()));
        }
        (Pipeline::Subtopics, _) => {
            return Verdict::Rejected(Rejection::Shape("expected a JSON array".into()));
        }
    };

    if let Some(rejection) = first_unusable_entry(entries, pipeline.generic_stems()) {
        return Verdict::Rejected(rejection);
    }

    Verdict::Accepted(value)
}

fn first_unusable_entry(entries: &[Value], stems: &[&str]) -> Option<Rejection> {
    for (i, entry) in entries.iter().enumerate() {
        let Value::Object(fields) = entry else {
            return Some(Rejection::Shape(format!("entry {i} is not an object")));
        };
        let name = match fields.get("name") {
            None => "",
            Some(Value::String(name)) => name.as_str(),
            Some(_) => {
                return Some(Rejection::Shape(format!("entry {i} name is not a string")));
            }
        };
        if is_generic(name, stems) {
            return Some(Rejection::Generic(name.to_string()));
        }
    }
    None
}
