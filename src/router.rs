use crate::config::AppConfig;
use crate::domain::{ListingInput, PredictionResponse, Valuation};
use crate::errors::ServerError;
use crate::forms::{parse_listing_form, parse_urlencoded};
use crate::responses::assets::static_asset;
use crate::responses::{html_response, json_error_response, json_response, text_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;
use tracing::debug;

pub fn handle(req: Request, cfg: &AppConfig) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(None, None)),
        ("POST", "/predict") => predict_form(req, cfg),
        // The JSON API answers errors in JSON too.
        ("POST", "/api/predict") => {
            predict_json(req, cfg).or_else(|e| Ok::<_, ServerError>(json_error_response(e)))
        }
        ("GET", "/health") => text_response("ok"),
        ("GET", p) if p.starts_with("/static/") => static_asset(&p["/static/".len()..]),
        _ => Err(ServerError::NotFound),
    }
}

fn predict_form(mut req: Request, cfg: &AppConfig) -> ResultResp {
    require_content_type(&req, &mime::APPLICATION_WWW_FORM_URLENCODED)?;
    let body = read_body(&mut req, cfg.max_body_bytes)?;
    let input = parse_listing_form(&parse_urlencoded(&body));
    let valuation = value_listing(&input);

    let result = templates::pages::prediction_result(
        &valuation.result,
        &valuation.recommendations,
        cfg.animation_ms,
    );

    // The background submit swaps the result under the form; a plain submit
    // gets the whole page.
    if is_htmx(&req) {
        html_response(result)
    } else {
        html_response(templates::pages::home_page(Some(&input), Some(result)))
    }
}

fn predict_json(mut req: Request, cfg: &AppConfig) -> ResultResp {
    require_content_type(&req, &mime::APPLICATION_JSON)?;
    let body = read_body(&mut req, cfg.max_body_bytes)?;
    let input: ListingInput = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid listing JSON: {e}")))?;

    let valuation = value_listing(&input);
    json_response(&PredictionResponse::new(valuation, chrono::Utc::now()))
}

fn value_listing(input: &ListingInput) -> Valuation {
    let valuation = Valuation::of(input);
    debug!(
        price = valuation.result.price,
        confidence = valuation.result.confidence,
        recommendations = valuation.recommendations.len(),
        "valued listing"
    );
    valuation
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// A missing Content-Type is let through; a different one is refused.
fn require_content_type(req: &Request, expected: &mime::Mime) -> Result<(), ServerError> {
    let Some(raw) = req.headers().get("Content-Type") else {
        return Ok(());
    };
    let raw = raw.to_str().unwrap_or_default();
    match raw.parse::<mime::Mime>() {
        Ok(m) if m.essence_str() == expected.essence_str() => Ok(()),
        _ => Err(ServerError::UnsupportedMediaType(raw.to_string())),
    }
}

fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if body.len() > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }
    Ok(body)
}
