//! Per-page application state slices.
//!
//! DESIGN
//! ======
//! Each business area owns one serializable slice with an `Action` enum and a
//! pure reducer. The root `App` provides every slice as an `RwSignal` context,
//! so pages and the layout shell read the same data without passing it
//! through props. Transient form drafts and modal flags stay in page-local
//! signals.

pub mod appointments;
pub mod availability;
pub mod billing;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod fixtures;
pub mod invoice;
pub mod notifications;
pub mod reviews;
pub mod services;
pub mod settings;

pub use error::ActionError;

/// A state slice that changes only through typed actions.
///
/// `apply` must leave the slice untouched when it returns an error.
pub trait Reducer {
    type Action: serde::Serialize + std::fmt::Debug;

    /// Slice name used when logging dispatched actions.
    const NAME: &'static str;

    /// Apply one action to the slice.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when the action is rejected (missing form
    /// field, unknown id, transition not allowed from the current status).
    fn apply(&mut self, action: Self::Action) -> Result<(), ActionError>;
}

/// Trimmed copy of a required form field, or `MissingField` when blank.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Case-insensitive substring test used by list search boxes.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}
