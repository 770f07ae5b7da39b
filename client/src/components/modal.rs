//! Modal dialog: backdrop click, close button, and Escape all close it.

use leptos::prelude::*;

#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
