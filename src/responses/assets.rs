// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/main.css"));
const COUNTER_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/counter.js"));
const SUBMIT_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/submit.js"));

/// Files under `/static/`, compiled into the binary.
pub fn static_asset(name: &str) -> ResultResp {
    let (content_type, body) = match name {
        "main.css" => (mime::TEXT_CSS_UTF_8, MAIN_CSS),
        "counter.js" => (mime::APPLICATION_JAVASCRIPT_UTF_8, COUNTER_JS),
        "submit.js" => (mime::APPLICATION_JAVASCRIPT_UTF_8, SUBMIT_JS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body.to_string()))
        .map_err(|_| ServerError::InternalError)
}
