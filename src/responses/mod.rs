pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::json_error_response;
pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, text_response};
pub use json::json_response;
