//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `maintenance`, `units`, `toast`) so
//! each page depends only on the models it renders.

pub mod auth;
pub mod maintenance;
pub mod toast;
pub mod units;
