use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Error body for the JSON API: `{"error": "...", "status": 400}`
pub fn json_error_response(err: ServerError) -> Response {
    let status = err.status();
    let body = json!({ "error": err.to_string(), "status": status }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error".to_string())))
}
