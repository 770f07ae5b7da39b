//! Application chrome around the routed page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

/// Sidebar + header + scrolling content area. `children` is the router's
/// `<Routes>` block.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="app-shell">
            <Sidebar open=sidebar_open/>
            <div class="app-shell__main">
                <Header sidebar_open=sidebar_open/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
