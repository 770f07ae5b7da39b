//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads its state slice from context, dispatches actions through
//! `util::dispatch`, and delegates rendering details to `components`.

pub mod appointments;
pub mod availability;
pub mod billing;
pub mod dashboard;
pub mod documents;
pub mod generate_invoice;
pub mod not_found;
pub mod notifications;
pub mod reviews;
pub mod services;
pub mod settings;
