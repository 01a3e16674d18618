// src/forms.rs

use crate::domain::{Amenity, FormValue, ListingInput, LocationCategory, PropertyType};
use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` pairs. Keys may repeat
/// (checkbox groups), so every key maps to all of its values in order.
#[derive(Debug, Default, Clone)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
}

impl FormData {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn parse_urlencoded(body: &[u8]) -> FormData {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for (k, v) in url::form_urlencoded::parse(body) {
        fields.entry(k.into_owned()).or_default().push(v.into_owned());
    }
    FormData { fields }
}

/// Reads the listing form. Never fails: unknown categories become `None`
/// and unreadable numbers become `NaN`.
pub fn parse_listing_form(form: &FormData) -> ListingInput {
    let int = |key: &str| form.first(key).map_or(f64::NAN, parse_int_lenient);
    let float = |key: &str| form.first(key).map_or(f64::NAN, parse_float_lenient);

    ListingInput {
        property_type: form.first("property_type").and_then(PropertyType::from_value),
        bedrooms: int("bedrooms"),
        bathrooms: float("bathrooms"),
        location: form.first("location").and_then(LocationCategory::from_value),
        response_rate: int("response_rate"),
        rating: float("rating"),
        distance_to_transit_km: float("distance_metro"),
        amenities: form
            .all("amenities")
            .iter()
            .map(|raw| Amenity::parse(raw))
            .collect(),
    }
}

/// Integer value of the leading digits, `"12.9kg"` -> 12. A `0x` prefix
/// switches to hex, `"0x1f"` -> 31. `NaN` if there are no digits.
pub fn parse_int_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits: Vec<u32> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .collect();
    if digits.is_empty() {
        return f64::NAN;
    }

    // Folded in f64 so long inputs lose precision instead of overflowing.
    let value = digits
        .iter()
        .fold(0.0, |acc, &d| acc * radix as f64 + d as f64);
    sign * value
}

/// Longest leading decimal number, `"4.8 stars"` -> 4.8. `NaN` if there is none.
pub fn parse_float_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);
    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    let bytes = rest.as_bytes();

    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_len;
    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 || int_len > 0 {
            end += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return f64::NAN;
    }

    // Optional exponent, only taken if it has digits.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    rest[..end]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

fn split_sign(s: &str) -> (f64, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, s)
    }
}
