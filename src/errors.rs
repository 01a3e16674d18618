use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from request handling. The valuation itself never
/// fails, so everything here is about the HTTP envelope.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    PayloadTooLarge(usize),
    UnsupportedMediaType(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::UnsupportedMediaType(_) => 415,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::PayloadTooLarge(limit) => {
                write!(f, "Payload Too Large: body exceeds {limit} bytes")
            }
            ServerError::UnsupportedMediaType(got) => {
                write!(f, "Unsupported Media Type: {got}")
            }
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
