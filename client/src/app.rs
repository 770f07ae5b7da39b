//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::pages::{
    appointments::AppointmentsPage, availability::AvailabilityPage, billing::BillingPage, dashboard::DashboardPage,
    documents::DocumentsPage, generate_invoice::GenerateInvoicePage, not_found::NotFoundPage,
    notifications::NotificationsPage, reviews::ReviewsPage, services::ServicesPage, settings::SettingsPage,
};
use crate::routes::HOME_PATH;
use crate::state::{
    appointments::AppointmentsState, availability::AvailabilityState, billing::BillingState,
    dashboard::DashboardState, documents::DocumentsState, invoice::InvoiceGeneratorState,
    notifications::NotificationsState, reviews::ReviewsState, services::ServicesState, settings::SettingsState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides every state slice as a context so the layout shell and the pages
/// share one store for the life of the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(DashboardState::default()));
    provide_context(RwSignal::new(AppointmentsState::default()));
    provide_context(RwSignal::new(ServicesState::default()));
    provide_context(RwSignal::new(AvailabilityState::default()));
    provide_context(RwSignal::new(DocumentsState::default()));
    provide_context(RwSignal::new(BillingState::default()));
    provide_context(RwSignal::new(InvoiceGeneratorState::default()));
    provide_context(RwSignal::new(ReviewsState::default()));
    provide_context(RwSignal::new(NotificationsState::default()));
    provide_context(RwSignal::new(SettingsState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/furglo.css"/>
        <Title text="FurGlo"/>

        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("availability") view=AvailabilityPage/>
                    <Route path=StaticSegment("documents") view=DocumentsPage/>
                    <Route path=StaticSegment("billing") view=BillingPage/>
                    <Route path=(StaticSegment("billing"), StaticSegment("invoice")) view=GenerateInvoicePage/>
                    <Route path=StaticSegment("reviews") view=ReviewsPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </MainLayout>
        </Router>
    }
}
