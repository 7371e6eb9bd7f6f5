use serde_json::{json, Value};

use crate::error::Rejection;
use crate::extract::extract_candidate;
use crate::fallback::{fallback_mind_map, fallback_subtopics};
use crate::pipeline::Pipeline;
use crate::validate::{validate, Verdict};

/// Response body for a pipeline, plus the reason the model output was
/// discarded when the body was synthesized instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub body: Value,
    pub rejection: Option<Rejection>,
}

impl Normalized {
    pub fn used_fallback(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Turn raw generated text into the pipeline's response body.
///
/// Extracts a candidate, validates it, and either wraps the accepted value
/// or synthesizes a breakdown from `input`. Never fails: every problem with
/// the text itself ends in the fallback path.
pub fn normalize(pipeline: Pipeline, input: &str, raw: &str) -> Normalized {
    let candidate = extract_candidate(raw, pipeline);
    match validate(candidate, pipeline) {
        Verdict::Accepted(value) => Normalized {
            body: wrap_accepted(pipeline, input, value),
            rejection: None,
        },
        Verdict::Rejected(rejection) => Normalized {
            body: synthesize(pipeline, input),
            rejection: Some(rejection),
        },
    }
}

/// Wrap a validated model value in the response contract.
///
/// Mind maps keep every field the model produced, except that `central`
/// always echoes the caller's idea.
pub fn wrap_accepted(pipeline: Pipeline, input: &str, value: Value) -> Value {
    match pipeline {
        Pipeline::MindMap => {
            let mut value = value;
            if let Value::Object(map) = &mut value {
                map.insert("central".into(), Value::String(input.to_string()));
            }
            value
        }
        Pipeline::Subtopics => json!({ "subtopics": value }),
    }
}

/// Fallback body built from the input string alone.
pub fn synthesize(pipeline: Pipeline, input: &str) -> Value {
    match pipeline {
        Pipeline::MindMap => json!(fallback_mind_map(input)),
        Pipeline::Subtopics => json!(fallback_subtopics(input)),
    }
}
