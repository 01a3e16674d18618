// src/domain/listing.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed set of categories that arrive as short form values
/// (`entire_home`, `downtown`, ...). Unknown values are not an error; they
/// simply don't map to a variant.
pub trait FormValue: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn value(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_value(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|v| v.value() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    EntireHome,
    PrivateRoom,
    SharedRoom,
}

impl PropertyType {
    /// Nightly starting point before any multipliers.
    pub fn base_price(&self) -> f64 {
        match self {
            PropertyType::EntireHome => 120.0,
            PropertyType::PrivateRoom => 60.0,
            PropertyType::SharedRoom => 30.0,
        }
    }
}

impl FormValue for PropertyType {
    const ALL: &'static [Self] = &[
        PropertyType::EntireHome,
        PropertyType::PrivateRoom,
        PropertyType::SharedRoom,
    ];

    fn value(&self) -> &'static str {
        match self {
            PropertyType::EntireHome => "entire_home",
            PropertyType::PrivateRoom => "private_room",
            PropertyType::SharedRoom => "shared_room",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PropertyType::EntireHome => "Entire home",
            PropertyType::PrivateRoom => "Private room",
            PropertyType::SharedRoom => "Shared room",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCategory {
    Downtown,
    Beach,
    Suburban,
    Rural,
}

impl LocationCategory {
    pub fn score(&self) -> f64 {
        match self {
            LocationCategory::Downtown => 1.5,
            LocationCategory::Beach => 1.4,
            LocationCategory::Suburban => 1.0,
            LocationCategory::Rural => 0.8,
        }
    }
}

impl FormValue for LocationCategory {
    const ALL: &'static [Self] = &[
        LocationCategory::Downtown,
        LocationCategory::Beach,
        LocationCategory::Suburban,
        LocationCategory::Rural,
    ];

    fn value(&self) -> &'static str {
        match self {
            LocationCategory::Downtown => "downtown",
            LocationCategory::Beach => "beach",
            LocationCategory::Suburban => "suburban",
            LocationCategory::Rural => "rural",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LocationCategory::Downtown => "Downtown",
            LocationCategory::Beach => "Beach",
            LocationCategory::Suburban => "Suburban",
            LocationCategory::Rural => "Rural",
        }
    }
}

/// A checked amenity box. Tags outside the known set still count towards
/// the amenity score, so they are carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Amenity {
    Wifi,
    Parking,
    Pool,
    Kitchen,
    AirConditioning,
    Washer,
    Other(String),
}

impl Amenity {
    /// The boxes offered on the form, in display order.
    pub const OFFERED: [Amenity; 6] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Pool,
        Amenity::Kitchen,
        Amenity::AirConditioning,
        Amenity::Washer,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "wifi" => Amenity::Wifi,
            "parking" => Amenity::Parking,
            "pool" => Amenity::Pool,
            "kitchen" => Amenity::Kitchen,
            "ac" => Amenity::AirConditioning,
            "washer" => Amenity::Washer,
            other => Amenity::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Pool => "pool",
            Amenity::Kitchen => "kitchen",
            Amenity::AirConditioning => "ac",
            Amenity::Washer => "washer",
            Amenity::Other(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Amenity::Wifi => "WiFi",
            Amenity::Parking => "Parking",
            Amenity::Pool => "Pool",
            Amenity::Kitchen => "Kitchen",
            Amenity::AirConditioning => "Air conditioning",
            Amenity::Washer => "Washer",
            Amenity::Other(tag) => tag,
        }
    }
}

impl From<String> for Amenity {
    fn from(raw: String) -> Self {
        Amenity::parse(&raw)
    }
}

impl From<Amenity> for String {
    fn from(amenity: Amenity) -> Self {
        amenity.tag().to_string()
    }
}

/// One form submission. Numeric fields hold `NaN` when the submitted text
/// had no leading number; nothing downstream checks for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingInput {
    #[serde(default, with = "form_value")]
    pub property_type: Option<PropertyType>,
    #[serde(default = "nan", deserialize_with = "whole_number")]
    pub bedrooms: f64,
    #[serde(default = "nan")]
    pub bathrooms: f64,
    #[serde(default, with = "form_value")]
    pub location: Option<LocationCategory>,
    #[serde(default = "nan", deserialize_with = "whole_number")]
    pub response_rate: f64,
    #[serde(default = "nan")]
    pub rating: f64,
    #[serde(default = "nan", alias = "distance_metro")]
    pub distance_to_transit_km: f64,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

impl ListingInput {
    pub fn has_amenity(&self, amenity: &Amenity) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn amenity_count(&self) -> usize {
        self.amenities.len()
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// Counts arrive as whole numbers, the same as the form's integer fields.
fn whole_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(f64::trunc)
}

/// (De)serializes an `Option<T: FormValue>` through its form value, mapping
/// unknown strings to `None` instead of failing.
mod form_value {
    use super::*;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: FormValue,
    {
        match value {
            Some(v) => serializer.serialize_some(v.value()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FormValue,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(T::from_value))
    }
}
