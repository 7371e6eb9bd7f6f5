mod http;
mod local;
mod traits;

pub use http::HttpPlanner;
pub use local::LocalPlanner;
pub use traits::{PlanningService, ServiceError};
