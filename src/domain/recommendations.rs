// src/domain/recommendations.rs

use crate::domain::listing::{Amenity, ListingInput};
use serde::Serialize;

/// Only the first few suggestions are shown.
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub text: &'static str,
    pub impact: &'static str,
    pub reason: &'static str,
    pub priority: Priority,
}

struct Rule {
    applies: fn(&ListingInput) -> bool,
    recommendation: Recommendation,
}

// Evaluated top to bottom; order is the display order.
const RULES: &[Rule] = &[
    Rule {
        applies: |l| !l.has_amenity(&Amenity::Wifi),
        recommendation: Recommendation {
            icon: "📶",
            text: "Add WiFi to your listing",
            impact: "+$8-12/night",
            reason: "WiFi is expected by 95% of guests and significantly increases booking rates",
            priority: Priority::High,
        },
    },
    Rule {
        applies: |l| !l.has_amenity(&Amenity::Parking),
        recommendation: Recommendation {
            icon: "🅿️",
            text: "Provide parking space",
            impact: "+$10-15/night",
            reason: "Parking availability increases value, especially in urban areas",
            priority: Priority::High,
        },
    },
    Rule {
        applies: |l| !l.has_amenity(&Amenity::Pool),
        recommendation: Recommendation {
            icon: "🏊",
            text: "Consider adding a pool",
            impact: "+$25-40/night",
            reason: "Properties with pools command premium prices and higher occupancy",
            priority: Priority::Medium,
        },
    },
    Rule {
        applies: |l| l.response_rate < 90.0,
        recommendation: Recommendation {
            icon: "⚡",
            text: "Improve response rate to 90%+",
            impact: "+$5-10/night",
            reason: "Fast responses increase guest confidence and booking conversion by 20%",
            priority: Priority::High,
        },
    },
    Rule {
        applies: |l| l.rating < 4.5,
        recommendation: Recommendation {
            icon: "⭐",
            text: "Focus on improving guest ratings",
            impact: "+$8-15/night",
            reason: "Higher ratings directly correlate with increased bookings and pricing power",
            priority: Priority::High,
        },
    },
    Rule {
        applies: |l| l.distance_to_transit_km > 2.0,
        recommendation: Recommendation {
            icon: "🚇",
            text: "Highlight nearby transport options",
            impact: "+$3-7/night",
            reason: "Clear transportation info reduces guest anxiety and improves perceived value",
            priority: Priority::Medium,
        },
    },
    Rule {
        applies: |_| true,
        recommendation: Recommendation {
            icon: "📸",
            text: "Invest in professional photography",
            impact: "+$15-25/night",
            reason: "Professional photos increase click-through rates by 40% and bookings by 24%",
            priority: Priority::High,
        },
    },
    Rule {
        applies: |_| true,
        recommendation: Recommendation {
            icon: "💰",
            text: "Implement dynamic pricing",
            impact: "+15-20% revenue",
            reason: "Adjust prices based on demand, events, and seasonality to maximize revenue",
            priority: Priority::Medium,
        },
    },
];

/// Suggestions for raising the nightly price, most relevant first.
pub fn generate(input: &ListingInput) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.recommendation.clone())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
