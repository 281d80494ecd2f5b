//! Rating Stars Component

use leptos::prelude::*;
use menu_core::{filled_stars, format_rating, MAX_STARS};

/// Five-star row followed by the numeric rating
#[component]
pub fn RatingStars(rating: f32) -> impl IntoView {
    let filled = filled_stars(rating);

    view! {
        <div class="rating">
            {(0..MAX_STARS).map(|i| view! {
                <span class=if i < filled { "star filled" } else { "star" }>"★"</span>
            }).collect_view()}
            <span class="rating-value">{format_rating(rating)}</span>
        </div>
    }
}
