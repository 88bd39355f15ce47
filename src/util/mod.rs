//! Utility helpers shared across dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure derivation logic (rooms, filters, dates) lives here so it can be
//! tested without a browser; `storage` and `console` isolate the
//! environment-specific glue.

pub mod console;
pub mod date;
pub mod room_filter;
pub mod rooms;
pub mod storage;
