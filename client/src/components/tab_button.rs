//! One tab of a tab strip, with an optional count.

use leptos::prelude::*;

#[component]
pub fn TabButton(
    #[prop(into)] label: Signal<String>,
    active: Signal<bool>,
    #[prop(optional)] count: Option<Signal<usize>>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="tab"
            class:tab--active=move || active.get()
            role="tab"
            aria-selected=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            {move || label.get()}
            {count.map(|count| view! { <span class="tab__count">{move || count.get()}</span> })}
        </button>
    }
}
