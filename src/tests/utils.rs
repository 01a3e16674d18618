use crate::config::AppConfig;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn form_post(uri: &str, body: &str) -> Request {
    let mut req = request(Method::POST, uri, body);
    req.headers_mut().insert(
        "content-type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

pub fn json_post(uri: &str, body: &str) -> Request {
    let mut req = request(Method::POST, uri, body);
    req.headers_mut()
        .insert("content-type", "application/json".parse().unwrap());
    req
}

/// Runs the request through the router the way `main` does, turning
/// errors into their HTML pages.
pub fn send(req: Request) -> Response {
    send_with(req, &AppConfig::default())
}

pub fn send_with(req: Request, cfg: &AppConfig) -> Response {
    match handle(req, cfg) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// The form exactly as the page first renders it.
pub const DEFAULT_FORM: &str = "property_type=entire_home&bedrooms=2&bathrooms=1\
    &location=downtown&response_rate=95&rating=4.8&distance_metro=0.5\
    &amenities=wifi&amenities=parking";
