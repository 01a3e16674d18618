// src/tests/router_tests/predict_tests.rs
use crate::config::AppConfig;
use crate::tests::utils::{body_string, form_post, send, send_with, DEFAULT_FORM};

#[test]
fn plain_submit_returns_page_with_result() {
    let mut resp = send(form_post("/predict", DEFAULT_FORM));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"id="prediction-form""#));
    assert!(body.contains(r#"id="prediction-result""#));

    // 2 bed, 1 bath, downtown entire home with wifi and parking.
    assert!(body.contains(r#"data-target="396""#));
    assert!(body.contains("$396"));
    assert!(body.contains(r#"<span id="confidence">93</span>"#));
    assert!(body.contains(r#"style="width: 93%""#));
    assert!(body.contains(r#"<span id="location-imp">24%</span>"#));
    assert!(body.contains(r#"<span id="size-imp">23%</span>"#));
    assert!(body.contains(r#"<span id="amenities-imp">19%</span>"#));
    assert!(body.contains(r#"<span id="host-imp">15%</span>"#));
    assert!(body.contains(r#"id="location-fill" style="width: 24%""#));
}

#[test]
fn background_submit_returns_only_the_fragment() {
    let mut req = form_post("/predict", DEFAULT_FORM);
    req.headers_mut()
        .insert("hx-request", "true".parse().unwrap());

    let mut resp = send(req);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.starts_with(r#"<section id="prediction-result""#));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains(r#"id="prediction-form""#));
}

#[test]
fn submitted_values_are_echoed_back_into_the_form() {
    let form = "property_type=private_room&bedrooms=1&bathrooms=1.5&location=beach\
        &response_rate=80&rating=4.2&distance_metro=3&amenities=pool";
    let mut resp = send(form_post("/predict", form));
    let body = body_string(&mut resp);

    assert!(body.contains(r#"<option value="private_room" selected>"#));
    assert!(body.contains(r#"<option value="beach" selected>"#));
    assert!(body.contains(r#"value="1.5""#));
    assert!(body.contains(r#"value="pool" checked"#));
    assert!(!body.contains(r#"value="wifi" checked"#));
}

#[test]
fn recommendations_follow_rule_order_and_stop_at_five() {
    let form = "property_type=private_room&bedrooms=1&bathrooms=1&location=suburban\
        &response_rate=80&rating=4.2&distance_metro=3";
    let mut resp = send(form_post("/predict", form));
    let body = body_string(&mut resp);

    let expected = [
        "Add WiFi to your listing",
        "Provide parking space",
        "Consider adding a pool",
        "Improve response rate to 90%+",
        "Focus on improving guest ratings",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|text| body.find(text).unwrap_or_else(|| panic!("missing {text}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(!body.contains("Highlight nearby transport options"));
    assert!(!body.contains("Invest in professional photography"));
    assert_eq!(body.matches(r#"class="recommendation-item""#).count(), 5);
}

#[test]
fn empty_form_renders_nan_instead_of_failing() {
    let mut resp = send(form_post("/predict", ""));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("$NaN"));
    assert!(body.contains(r#"<span id="confidence">75</span>"#));
    assert!(body.contains(r#"<span id="host-imp">NaN%</span>"#));
}

#[test]
fn wrong_content_type_is_refused() {
    let mut req = form_post("/predict", DEFAULT_FORM);
    req.headers_mut()
        .insert("content-type", "text/csv".parse().unwrap());

    let mut resp = send(req);
    assert_eq!(resp.status(), 415);
    assert!(body_string(&mut resp).contains("text/csv"));
}

#[test]
fn content_type_parameters_are_ignored() {
    let mut req = form_post("/predict", DEFAULT_FORM);
    req.headers_mut().insert(
        "content-type",
        "application/x-www-form-urlencoded; charset=UTF-8"
            .parse()
            .unwrap(),
    );
    assert_eq!(send(req).status(), 200);
}

#[test]
fn oversized_body_is_rejected() {
    let cfg = AppConfig {
        max_body_bytes: 32,
        ..AppConfig::default()
    };
    let resp = send_with(form_post("/predict", DEFAULT_FORM), &cfg);
    assert_eq!(resp.status(), 413);
}

#[test]
fn unbounded_body_limit_still_reads_the_form() {
    let cfg = AppConfig {
        max_body_bytes: usize::MAX,
        ..AppConfig::default()
    };
    let mut resp = send_with(form_post("/predict", DEFAULT_FORM), &cfg);
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains(r#"data-target="396""#));
}
