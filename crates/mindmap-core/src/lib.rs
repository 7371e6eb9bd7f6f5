pub mod assemble;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod node;
pub mod pipeline;
pub mod validate;

pub use assemble::{normalize, Normalized};
pub use error::{InputError, Rejection};
pub use extract::extract_candidate;
pub use node::{MindMap, SubtopicList, TaskNode};
pub use pipeline::{require_input, Pipeline};
pub use validate::{is_generic, validate, Verdict};
