//! Left navigation rail with one link per page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{NAV_LINKS, is_active};

/// Sidebar listing [`NAV_LINKS`]; the link matching the current path is
/// highlighted. On narrow screens it collapses to icons unless `open`.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"🐾"</span>
                <span class="sidebar__label sidebar__name">"FurGlo"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a
                                href=route.path()
                                class="sidebar__link"
                                class:sidebar__link--active=move || pathname.with(|p| is_active(route, p))
                                title=route.label()
                                on:click=move |_| open.set(false)
                            >
                                <span class="sidebar__icon" aria-hidden="true">{route.icon()}</span>
                                <span class="sidebar__label">{route.label()}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <button class="btn btn--ghost sidebar__logout" title="Log Out" on:click=move |_| {
                    leptos::logging::log!("log out requested; no session to end");
                }>
                    <span aria-hidden="true">"⎋"</span>
                    <span class="sidebar__label">"Log Out"</span>
                </button>
            </div>
        </aside>
    }
}
