// src/domain/valuation.rs

use crate::domain::listing::ListingInput;
use crate::domain::pricing::{self, FeatureImportance, PredictionResult};
use crate::domain::recommendations::{self, Recommendation};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything one submission produces. Lives for a single request.
#[derive(Debug, Clone)]
pub struct Valuation {
    pub result: PredictionResult,
    pub recommendations: Vec<Recommendation>,
}

impl Valuation {
    pub fn of(input: &ListingInput) -> Self {
        Self {
            result: pricing::predict(input),
            recommendations: recommendations::generate(input),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedFeature {
    pub feature: &'static str,
    pub percent: f64,
}

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
    pub confidence: u8,
    pub importance: FeatureImportance,
    pub top_features: Vec<RankedFeature>,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
}

impl PredictionResponse {
    pub fn new(valuation: Valuation, now: DateTime<Utc>) -> Self {
        let top_features = valuation
            .result
            .importance
            .ranked()
            .into_iter()
            .map(|(feature, percent)| RankedFeature { feature, percent })
            .collect();

        Self {
            predicted_price: valuation.result.price,
            confidence: valuation.result.confidence,
            importance: valuation.result.importance,
            top_features,
            recommendations: valuation.recommendations,
            timestamp: now,
        }
    }
}
