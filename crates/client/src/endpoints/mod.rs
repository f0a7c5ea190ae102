//! REST API endpoint implementations.
//!
//! Free functions taking a `reqwest::Client` and the API base URL, so they can
//! be exercised directly against a mock server.

mod limits;
mod messages;
mod response;

pub use limits::get_app_limits;
pub use messages::{parse_limit_headers, send_message};
pub use response::{interpret_body, is_success_status};
