//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (button, card, badge, avatar, inputs, toggle, tabs, stat card,
//! star rating, modal) carry no business logic. The layout shell (sidebar,
//! header, main layout) reads the route and the notification slice from
//! context.

pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod header;
pub mod main_layout;
pub mod modal;
pub mod sidebar;
pub mod star_rating;
pub mod stat_card;
pub mod tab_button;
pub mod text_input;
pub mod toggle;
