//! Round initials badge for a person.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

/// Up to two uppercase initials, one per word. Punctuation is skipped.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Avatar(#[prop(into)] name: String, #[prop(optional)] small: bool) -> impl IntoView {
    let letters = initials(&name);
    view! {
        <span class="avatar" class:avatar--small=small title=name>
            {letters}
        </span>
    }
}
