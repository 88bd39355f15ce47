//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and local state and delegates rendering
//! details to `components`. The two pages share nothing at runtime.

pub mod maintenance;
pub mod units;
