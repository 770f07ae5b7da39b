//! Top bar: page title, quick search, notification bell, and the signed-in
//! practitioner.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::avatar::Avatar;
use crate::routes::{AppRoute, active_nav, page_title};
use crate::state::dashboard::DashboardState;
use crate::state::notifications::NotificationsState;

#[component]
pub fn Header(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let location = use_location();
    let pathname = location.pathname;

    let title = move || pathname.with(|p| page_title(p));
    let icon = move || pathname.with(|p| active_nav(p).map(AppRoute::icon));
    let unread = move || notifications.with(NotificationsState::unread_count);
    let practitioner = move || dashboard.with(|d| d.practitioner.clone());

    let query = RwSignal::new(String::new());
    let mobile_search_open = RwSignal::new(false);

    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            let q = query.get_untracked();
            if !q.trim().is_empty() {
                log!("quick search: {}", q.trim());
            }
        }
    };

    view! {
        <header class="header">
            <div class="header__row">
                <div class="header__title">
                    <button
                        class="header__menu"
                        title="Menu"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    {move || icon().map(|i| view! { <span class="header__icon" aria-hidden="true">{i}</span> })}
                    <h1>{title}</h1>
                </div>

                <div class="header__actions">
                    <input
                        class="header__search"
                        type="search"
                        placeholder="Quick Search..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=on_search_key
                    />
                    <button
                        class="header__search-toggle"
                        title="Search"
                        on:click=move |_| mobile_search_open.update(|open| *open = !*open)
                    >
                        "🔍"
                    </button>

                    <a class="header__bell" href=AppRoute::Notifications.path() title="Notifications">
                        <span aria-hidden="true">"🔔"</span>
                        <Show when=move || { unread() > 0 }>
                            <span class="header__badge">{unread}</span>
                        </Show>
                    </a>

                    <div class="header__user">
                        {move || view! { <Avatar name=practitioner() small=true/> }}
                        <span class="header__user-name">{practitioner}</span>
                    </div>
                </div>
            </div>

            <Show when=move || mobile_search_open.get()>
                <div class="header__mobile-search">
                    <input
                        class="header__search header__search--mobile"
                        type="search"
                        placeholder="Search..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=on_search_key
                    />
                </div>
            </Show>
        </header>
    }
}
