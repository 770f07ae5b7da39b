//! Labelled on/off switch.

use leptos::prelude::*;

#[component]
pub fn Toggle(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let description = (!description.is_empty())
        .then(move || view! { <span class="toggle-row__description">{description}</span> });

    view! {
        <div class="toggle-row">
            <div class="toggle-row__text">
                <span class="toggle-row__title">{title.clone()}</span>
                {description}
            </div>
            <button
                class="toggle"
                class:toggle--on=move || checked.get()
                role="switch"
                aria-checked=move || checked.get().to_string()
                aria-label=title
                on:click=move |_| on_toggle.run(())
            >
                <span class="toggle__knob"></span>
            </button>
        </div>
    }
}
