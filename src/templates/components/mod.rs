use crate::domain::recommendations::{Priority, Recommendation};
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Whole number as shown on the page. `NaN` shows as `NaN`.
pub fn whole(x: f64) -> String {
    format!("{x:.0}")
}

/// A labelled horizontal bar filled to `percent`.
pub fn meter(id: &str, label: &str, percent: f64) -> Markup {
    html! {
        div class="meter" {
            div class="meter-label" {
                span { (label) }
                span id=(format!("{id}-imp")) { (whole(percent)) "%" }
            }
            div class="meter-track" {
                div class="meter-fill" id=(format!("{id}-fill")) style=(format!("width: {}%", whole(percent))) {}
            }
        }
    }
}

pub fn recommendation_item(rec: &Recommendation) -> Markup {
    let badge = match rec.priority {
        Priority::High => "badge badge-high",
        Priority::Medium => "badge badge-medium",
    };

    html! {
        div class="recommendation-item" {
            div class="recommendation-icon" { (rec.icon) }
            div class="recommendation-text" {
                strong { (rec.text) }
                span class=(badge) { (rec.priority.label()) }
                div class="recommendation-reason" { (rec.reason) }
                div class="recommendation-impact" { (rec.impact) }
            }
        }
    }
}
