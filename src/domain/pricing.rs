// src/domain/pricing.rs

use crate::domain::listing::ListingInput;
use serde::Serialize;

const TRANSIT_FLOOR: f64 = 0.8;
const TRANSIT_CEILING: f64 = 1.3;
const TRANSIT_DECAY_PER_KM: f64 = 0.1;
const AMENITY_WEIGHT: f64 = 0.08;
const BEDROOM_WEIGHT: f64 = 0.15;
const BATHROOM_WEIGHT: f64 = 0.1;

const BASE_CONFIDENCE: u8 = 75;
const MAX_CONFIDENCE: u8 = 98;

/// The five multiplicative factor scores behind a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceFactors {
    pub base_price: f64,
    pub location: f64,
    pub transit: f64,
    pub amenities: f64,
    pub host: f64,
    pub size: f64,
}

impl PriceFactors {
    pub fn from_listing(input: &ListingInput) -> Self {
        // Closer to transit is better, but never below the floor.
        // `f64::max` would turn a NaN distance into the floor.
        let decayed = TRANSIT_CEILING - input.distance_to_transit_km * TRANSIT_DECAY_PER_KM;
        let transit = if decayed.is_nan() {
            decayed
        } else {
            decayed.max(TRANSIT_FLOOR)
        };

        Self {
            base_price: input.property_type.map_or(0.0, |t| t.base_price()),
            location: input.location.map_or(0.0, |l| l.score()),
            transit,
            amenities: 1.0 + input.amenity_count() as f64 * AMENITY_WEIGHT,
            host: (input.response_rate / 100.0) * (input.rating / 5.0),
            size: 1.0 + input.bedrooms * BEDROOM_WEIGHT + input.bathrooms * BATHROOM_WEIGHT,
        }
    }

    /// Unrounded nightly price.
    pub fn raw_price(&self) -> f64 {
        self.base_price
            * self.location
            * self.transit
            * self.amenities
            * (0.9 + self.host * 0.2)
            * self.size
    }

    fn total(&self) -> f64 {
        self.location + self.transit + self.amenities + self.host + self.size
    }
}

/// Share of each factor in the factor total, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub location: f64,
    pub size: f64,
    pub amenities: f64,
    pub host: f64,
}

impl FeatureImportance {
    fn from_factors(factors: &PriceFactors) -> Self {
        let total = factors.total();
        let share = |score: f64| round_half_up(score / total * 100.0);
        Self {
            location: share(factors.location),
            size: share(factors.size),
            amenities: share(factors.amenities),
            host: share(factors.host),
        }
    }

    /// (label, percent) pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Location", self.location),
            ("Size", self.size),
            ("Amenities", self.amenities),
            ("Host quality", self.host),
        ]
    }

    /// Entries sorted by percent, largest first. Ties keep display order.
    pub fn ranked(&self) -> Vec<(&'static str, f64)> {
        let mut entries = self.entries().to_vec();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub price: f64,
    pub confidence: u8,
    pub importance: FeatureImportance,
    #[serde(skip)]
    pub factors: PriceFactors,
}

pub fn predict(input: &ListingInput) -> PredictionResult {
    let factors = PriceFactors::from_listing(input);

    PredictionResult {
        price: round_half_up(factors.raw_price()),
        confidence: confidence(input),
        importance: FeatureImportance::from_factors(&factors),
        factors,
    }
}

/// How much the inputs look like a well-run listing. Comparisons against
/// `NaN` are false, so missing fields just earn no bonus.
pub fn confidence(input: &ListingInput) -> u8 {
    let mut score = BASE_CONFIDENCE;
    if input.response_rate > 90.0 {
        score += 10;
    }
    if input.rating > 4.5 {
        score += 8;
    }
    if input.amenity_count() > 2 {
        score += 5;
    }
    score.min(MAX_CONFIDENCE)
}

/// Rounds .5 towards positive infinity, the way browsers round.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
