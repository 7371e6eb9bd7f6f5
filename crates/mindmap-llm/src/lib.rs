pub mod backend;
pub mod config;
pub mod error;
pub mod resolve;

pub use backend::Generator;
pub use config::{BackendKind, GeneratorConfig};
pub use error::GenerationError;
pub use resolve::{build_primary, resolve_generator};
