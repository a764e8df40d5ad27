pub mod match_request;
pub mod match_response;

pub use match_request::{FilterParseError, JobSearchQuery};
pub use match_response::JobMatchResponse;
