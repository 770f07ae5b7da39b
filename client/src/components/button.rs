//! Clickable button with a small set of visual variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[must_use]
pub fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "btn btn--primary",
        ButtonVariant::Secondary => "btn btn--secondary",
        ButtonVariant::Ghost => "btn btn--ghost",
        ButtonVariant::Danger => "btn btn--danger",
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] title: String,
    #[prop(optional)] disabled: bool,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button class=button_class(variant) title=title disabled=disabled on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}
