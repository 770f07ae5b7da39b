//! Five-star rating display.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

pub const MAX_STARS: u8 = 5;

/// Filled stars for `rating` followed by empty ones, always five glyphs.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{rating} out of {MAX_STARS} stars")>
            {stars(rating)}
        </span>
    }
}
