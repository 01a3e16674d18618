// src/tests/router_tests/api_tests.rs
use crate::config::AppConfig;
use crate::tests::utils::{body_string, content_type, form_post, json_post, send, send_with};
use serde_json::Value;

fn post_json(body: &str) -> (u16, Value) {
    let mut resp = send(json_post("/api/predict", body));
    assert_eq!(content_type(&resp), "application/json");
    let status = resp.status().as_u16();
    let value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    (status, value)
}

#[test]
fn api_values_a_listing() {
    let (status, v) = post_json(
        r#"{
            "property_type": "entire_home",
            "bedrooms": 2,
            "bathrooms": 1,
            "location": "downtown",
            "response_rate": 95,
            "rating": 4.8,
            "distance_metro": 0.5,
            "amenities": ["wifi", "parking"]
        }"#,
    );

    assert_eq!(status, 200);
    assert_eq!(v["predicted_price"], 396.0);
    assert_eq!(v["confidence"], 93);
    assert_eq!(v["importance"]["location"], 24.0);
    assert_eq!(v["importance"]["size"], 23.0);
    assert_eq!(v["importance"]["amenities"], 19.0);
    assert_eq!(v["importance"]["host"], 15.0);

    let top = v["top_features"].as_array().unwrap();
    let names: Vec<&str> = top.iter().map(|f| f["feature"].as_str().unwrap()).collect();
    assert_eq!(names, ["Location", "Size", "Amenities", "Host quality"]);

    let recs = v["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["text"], "Consider adding a pool");
    assert_eq!(recs[0]["priority"], "Medium");
    assert_eq!(recs[2]["impact"], "+15-20% revenue");

    assert!(v["timestamp"].as_str().is_some());
}

#[test]
fn api_accepts_the_long_distance_name_and_unknown_categories() {
    let (status, v) = post_json(
        r#"{
            "property_type": "castle",
            "bedrooms": 3,
            "bathrooms": 2,
            "location": "moon",
            "response_rate": 100,
            "rating": 5,
            "distance_to_transit_km": 1,
            "amenities": ["wifi", "parking", "pool", "sauna"]
        }"#,
    );

    assert_eq!(status, 200);
    // No base price for an unknown property type.
    assert_eq!(v["predicted_price"], 0.0);
    assert_eq!(v["confidence"], 98);
    // Only the two unconditional suggestions remain.
    assert_eq!(v["recommendations"].as_array().unwrap().len(), 2);
}

#[test]
fn api_missing_numbers_come_back_as_null() {
    let (status, v) = post_json(r#"{ "property_type": "entire_home" }"#);
    assert_eq!(status, 200);
    assert!(v["predicted_price"].is_null());
    assert_eq!(v["confidence"], 75);
}

#[test]
fn api_rejects_malformed_json() {
    let (status, v) = post_json("{ not json");
    assert_eq!(status, 400);
    assert_eq!(v["status"], 400);
    assert!(v["error"].as_str().unwrap().contains("invalid listing JSON"));
}

#[test]
fn api_rejects_form_bodies() {
    let mut req = json_post("/api/predict", "bedrooms=2");
    req.headers_mut().insert(
        "content-type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    let mut resp = send(req);
    assert_eq!(resp.status(), 415);
    let v: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(v["status"], 415);
}

#[test]
fn api_and_form_agree_on_fractional_counts() {
    let (status, v) = post_json(
        r#"{
            "property_type": "entire_home",
            "bedrooms": 2.7,
            "bathrooms": 1,
            "location": "downtown",
            "response_rate": 90.5,
            "rating": 4.8,
            "distance_metro": 0.5,
            "amenities": ["wifi", "parking"]
        }"#,
    );
    assert_eq!(status, 200);
    // Read as 2 bedrooms and 90% response, which misses the >90 bonus.
    assert_eq!(v["predicted_price"], 392.0);
    assert_eq!(v["confidence"], 83);

    let form = "property_type=entire_home&bedrooms=2.7&bathrooms=1&location=downtown\
        &response_rate=90.5&rating=4.8&distance_metro=0.5&amenities=wifi&amenities=parking";
    let mut resp = send(form_post("/predict", form));
    let body = body_string(&mut resp);
    assert!(body.contains(r#"data-target="392""#));
    assert!(body.contains(r#"<span id="confidence">83</span>"#));
}

#[test]
fn api_oversized_body_is_a_json_413() {
    let cfg = AppConfig {
        max_body_bytes: 16,
        ..AppConfig::default()
    };
    let body = r#"{"property_type": "entire_home", "bedrooms": 2}"#;
    let mut resp = send_with(json_post("/api/predict", body), &cfg);

    assert_eq!(resp.status(), 413);
    assert_eq!(content_type(&resp), "application/json");
    let v: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(v["status"], 413);
    assert!(v["error"].as_str().unwrap().contains("16 bytes"));
}
