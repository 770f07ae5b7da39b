//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, file picker,
//! console logging) from page and component logic so the state layer stays
//! pure and testable.

pub mod clock;
pub mod dispatch;
pub mod file_input;
pub mod money;
