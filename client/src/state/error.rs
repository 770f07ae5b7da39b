//! Rejection reasons for state actions.

use thiserror::Error;

/// Why a dispatched action was not applied.
///
/// Rejections are logged, never shown to the user; the slice is left as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("field `{field}` is not a valid non-negative number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("no record with id {0}")]
    UnknownId(String),
    #[error("cannot {action} a record in status {status}")]
    InvalidTransition { action: &'static str, status: &'static str },
    #[error("review {0} already has a reply")]
    AlreadyReplied(String),
    #[error("an invoice needs at least one line item")]
    LastLineItem,
    #[error("new password and confirmation do not match")]
    PasswordMismatch,
    #[error("new password must differ from the current password")]
    PasswordUnchanged,
}
