// templates/pages/home.rs

use crate::domain::{Amenity, FormValue, ListingInput, LocationCategory, PropertyType};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

/// Values the form starts out with: a well-run two bedroom flat downtown.
pub fn default_listing() -> ListingInput {
    ListingInput {
        property_type: Some(PropertyType::EntireHome),
        bedrooms: 2.0,
        bathrooms: 1.0,
        location: Some(LocationCategory::Downtown),
        response_rate: 95.0,
        rating: 4.8,
        distance_to_transit_km: 0.5,
        amenities: vec![Amenity::Wifi, Amenity::Parking],
    }
}

/// The estimator page. `result` is rendered below the form when present,
/// which is how the page looks after a plain (script-free) submit.
pub fn home_page(input: Option<&ListingInput>, result: Option<Markup>) -> Markup {
    let defaults = default_listing();
    let input = input.unwrap_or(&defaults);

    desktop_layout(
        "Listing Valuator",
        html! {
            main class="container" {
                h1 { "What is your listing worth per night?" }
                p class="lede" {
                    "Describe the property and we'll estimate a nightly price, "
                    "show what drives it and suggest how to raise it."
                }

                (card("Your listing", listing_form(input)))

                div id="prediction-slot" {
                    @if let Some(result) = result {
                        (result)
                    }
                }
            }
        },
    )
}

fn listing_form(input: &ListingInput) -> Markup {
    html! {
        form
            id="prediction-form"
            method="post"
            action="/predict"
            hx-post="/predict"
            hx-target="#prediction-slot"
            class="prediction-form"
        {
            div class="form-grid" {
                label for="property_type" { "Property type" }
                (category_select("property_type", input.property_type))

                label for="location" { "Location" }
                (category_select("location", input.location))

                label for="bedrooms" { "Bedrooms" }
                input type="number" id="bedrooms" name="bedrooms" min="0" max="20" step="1"
                    value=(field_value(input.bedrooms));

                label for="bathrooms" { "Bathrooms" }
                input type="number" id="bathrooms" name="bathrooms" min="0" max="20" step="0.5"
                    value=(field_value(input.bathrooms));

                label for="response_rate" { "Host response rate (%)" }
                input type="number" id="response_rate" name="response_rate" min="0" max="100" step="1"
                    value=(field_value(input.response_rate));

                label for="rating" { "Guest rating (0-5)" }
                input type="number" id="rating" name="rating" min="0" max="5" step="0.1"
                    value=(field_value(input.rating));

                label for="distance_metro" { "Distance to transit (km)" }
                input type="number" id="distance_metro" name="distance_metro" min="0" step="0.1"
                    value=(field_value(input.distance_to_transit_km));
            }

            fieldset class="amenities" {
                legend { "Amenities" }
                @for amenity in Amenity::OFFERED.iter() {
                    label class="amenity-option" {
                        input
                            type="checkbox"
                            class="amenity"
                            name="amenities"
                            value=(amenity.tag())
                            checked[input.has_amenity(amenity)];
                        " " (amenity.label())
                    }
                }
            }

            button type="submit" class="primary" { "Predict price" }
        }
    }
}

fn category_select<T: FormValue + PartialEq>(name: &str, selected: Option<T>) -> Markup {
    html! {
        select id=(name) name=(name) required {
            @for choice in T::ALL {
                option value=(choice.value()) selected[selected == Some(*choice)] {
                    (choice.label())
                }
            }
        }
    }
}

/// A number echoed back into an input. `NaN` leaves the box empty.
fn field_value(x: f64) -> String {
    if x.is_nan() {
        String::new()
    } else {
        x.to_string()
    }
}
