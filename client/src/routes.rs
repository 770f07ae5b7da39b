//! Static route table: URL paths, sidebar entries, and page titles.
//!
//! DESIGN
//! ======
//! The Leptos `<Routes>` in `app.rs` mounts one page per [`AppRoute`]. The
//! sidebar and header title read their paths from this table; the host's
//! `routes_test.rs` checks the mounted routes against it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path the root URL redirects to.
pub const HOME_PATH: &str = "/dashboard";

/// Header title used when no sidebar entry matches the current path.
pub const DEFAULT_TITLE: &str = "Dashboard";

/// Every page reachable by URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Appointments,
    Services,
    Availability,
    Documents,
    Billing,
    GenerateInvoice,
    Reviews,
    Notifications,
    Settings,
}

impl AppRoute {
    pub const ALL: [Self; 10] = [
        Self::Dashboard,
        Self::Appointments,
        Self::Services,
        Self::Availability,
        Self::Documents,
        Self::Billing,
        Self::GenerateInvoice,
        Self::Reviews,
        Self::Notifications,
        Self::Settings,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Appointments => "/appointments",
            Self::Services => "/services",
            Self::Availability => "/availability",
            Self::Documents => "/documents",
            Self::Billing => "/billing",
            Self::GenerateInvoice => "/billing/invoice",
            Self::Reviews => "/reviews",
            Self::Notifications => "/notifications",
            Self::Settings => "/settings",
        }
    }

    /// Sidebar label, also used as the header title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Appointments => "Appointments",
            Self::Services => "My Services",
            Self::Availability => "Availability",
            Self::Documents => "Documents",
            Self::Billing => "Billing",
            Self::GenerateInvoice => "Generate Invoice",
            Self::Reviews => "Reviews",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
        }
    }

    /// Glyph shown next to the sidebar label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Appointments => "📅",
            Self::Services => "🩺",
            Self::Availability => "🕒",
            Self::Documents => "📄",
            Self::Billing | Self::GenerateInvoice => "💳",
            Self::Reviews => "★",
            Self::Notifications => "🔔",
            Self::Settings => "⚙",
        }
    }
}

/// Sidebar links, top to bottom. The invoice generator is reached from
/// Billing and has no link of its own.
pub const NAV_LINKS: [AppRoute; 9] = [
    AppRoute::Dashboard,
    AppRoute::Appointments,
    AppRoute::Services,
    AppRoute::Availability,
    AppRoute::Documents,
    AppRoute::Billing,
    AppRoute::Reviews,
    AppRoute::Notifications,
    AppRoute::Settings,
];

/// Strip query, fragment, and trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Whether the sidebar link for `route` should be highlighted on `pathname`.
#[must_use]
pub fn is_active(route: AppRoute, pathname: &str) -> bool {
    let pathname = normalize(pathname);
    pathname == route.path()
        || pathname.strip_prefix(route.path()).is_some_and(|rest| rest.starts_with('/'))
}

/// Sidebar entry highlighted for `pathname`, if any.
#[must_use]
pub fn active_nav(pathname: &str) -> Option<AppRoute> {
    NAV_LINKS.into_iter().find(|r| is_active(*r, pathname))
}

/// Header title for `pathname`.
#[must_use]
pub fn page_title(pathname: &str) -> &'static str {
    active_nav(pathname).map_or(DEFAULT_TITLE, AppRoute::label)
}
