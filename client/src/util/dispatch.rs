//! Apply typed actions to state slices with console logging.
//!
//! Every page mutation goes through [`dispatch`]: the action is logged as
//! JSON under the slice name, then applied. Rejected actions are logged as
//! warnings and leave the slice as it was.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::state::{ActionError, Reducer};

/// Log and apply `action` to a plain slice value.
///
/// # Errors
///
/// Passes through the reducer's rejection.
pub fn apply_logged<S: Reducer>(state: &mut S, action: S::Action) -> Result<(), ActionError> {
    let summary = serde_json::to_string(&action).unwrap_or_else(|_| format!("{action:?}"));
    log!("{} <- {summary}", S::NAME);
    state.apply(action).inspect_err(|err| warn!("{} rejected action: {err}", S::NAME))
}

/// Log and apply `action` to the slice held in `signal`.
///
/// Returns `true` when the action was applied.
pub fn dispatch<S>(signal: RwSignal<S>, action: S::Action) -> bool
where
    S: Reducer + Send + Sync + 'static,
{
    match signal.try_update(|state| apply_logged(state, action)) {
        Some(result) => result.is_ok(),
        None => {
            warn!("{} signal disposed; action dropped", S::NAME);
            false
        }
    }
}
