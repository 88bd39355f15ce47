//! Networking modules for the REST API and email notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `notify` sends EmailJS notifications, `types`
//! defines the wire schema and `error` the shared failure type.

pub mod api;
pub mod error;
pub mod notify;
pub mod types;
