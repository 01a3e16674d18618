pub mod animation;
pub mod listing;
pub mod pricing;
pub mod recommendations;
pub mod valuation;

pub use listing::{Amenity, FormValue, ListingInput, LocationCategory, PropertyType};
pub use pricing::PredictionResult;
pub use recommendations::Recommendation;
pub use valuation::{PredictionResponse, Valuation};
