//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, and filter controls while reading and
//! writing page state passed in as signals.

pub mod building_card;
pub mod delete_request_dialog;
pub mod request_card;
pub mod request_dialog;
pub mod room_card;
pub mod room_filter_bar;
pub mod toast_stack;
