//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow lives outside this crate and leaves the signed-in user in
//! browser storage. Pages read it here to decide which fields and actions an
//! administrator sees.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Browser storage key holding the signed-in user as JSON.
pub const USER_STORAGE_KEY: &str = "user";

/// The signed-in user, if any.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Read the stored user; absent or malformed entries mean signed out.
    pub fn load() -> Self {
        Self { user: crate::util::storage::load_json::<User>(USER_STORAGE_KEY) }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Email of the signed-in user, or an empty string.
    pub fn email(&self) -> String {
        self.user.as_ref().map(|u| u.email.clone()).unwrap_or_default()
    }
}
