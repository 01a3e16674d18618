use crate::domain::animation::{CounterAnimation, FRAME_INTERVAL_MS};
use crate::domain::{PredictionResult, Recommendation};
use crate::templates::components::{meter, recommendation_item, whole};
use maud::{html, Markup};

/// The result block swapped under the form. The price is rendered at its
/// final value; `/static/counter.js` replays the count-up from the data
/// attributes when scripts run.
pub fn prediction_result(
    result: &PredictionResult,
    recommendations: &[Recommendation],
    animation_ms: u64,
) -> Markup {
    let counter = CounterAnimation::new(0.0, result.price, animation_ms);
    let importance = &result.importance;

    html! {
        section id="prediction-result" class="card result show" {
            h2 { "Estimated nightly price" }
            div class="price" {
                span
                    id="predicted-price"
                    class="counter"
                    data-prefix="$"
                    data-target=(whole(counter.end()))
                    data-step=(counter.increment())
                    data-interval=(FRAME_INTERVAL_MS)
                {
                    "$" (whole(result.price))
                }
                span class="per-night" { " / night" }
            }

            div class="confidence" {
                div class="meter-label" {
                    span { "Model confidence" }
                    span { span id="confidence" { (result.confidence) } "%" }
                }
                div class="meter-track" {
                    div class="meter-fill confidence-fill" id="confidence-fill"
                        style=(format!("width: {}%", result.confidence)) {}
                }
            }

            h3 { "What drives this price" }
            div class="importance" {
                (meter("location", "Location", importance.location))
                (meter("size", "Size", importance.size))
                (meter("amenities", "Amenities", importance.amenities))
                (meter("host", "Host quality", importance.host))
            }

            h3 { "How to raise it" }
            div id="recommendations-list" {
                @for rec in recommendations {
                    (recommendation_item(rec))
                }
            }
        }
    }
}
