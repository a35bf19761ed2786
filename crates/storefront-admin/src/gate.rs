// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared-password admin gate.
//!
//! The gate compares a single configured password in plaintext and flips an
//! in-memory flag. It issues no tokens and never expires; it only decides
//! whether admin actions are offered.
//!
//! When no password is configured every login is rejected (fail-closed).

use secrecy::{ExposeSecret, SecretString};
use storefront_core::StorefrontError;
use tracing::{info, warn};

/// Admin mode toggle guarded by one shared password.
pub struct AdminGate {
    password: Option<SecretString>,
    admin_mode: bool,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("admin_mode", &self.admin_mode)
            .finish()
    }
}

impl AdminGate {
    /// Create a closed gate. `None` disables admin access entirely.
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.map(SecretString::from),
            admin_mode: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin_mode
    }

    /// Enter admin mode if `attempt` equals the configured password.
    pub fn login(&mut self, attempt: &str) -> bool {
        let Some(expected) = &self.password else {
            warn!("admin login attempted but no admin password is configured");
            return false;
        };

        if attempt == expected.expose_secret() {
            self.admin_mode = true;
            info!("admin mode enabled");
            true
        } else {
            warn!("admin login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        if self.admin_mode {
            info!("admin mode disabled");
        }
        self.admin_mode = false;
    }

    /// Leave admin mode if it is on, otherwise try to enter it with `attempt`.
    /// Returns whether admin mode is on afterwards.
    pub fn toggle(&mut self, attempt: Option<&str>) -> bool {
        if self.admin_mode {
            self.logout();
            return false;
        }
        attempt.is_some_and(|attempt| self.login(attempt))
    }

    /// Fail with `Unauthorized` unless admin mode is on.
    pub fn require_admin(&self) -> Result<(), StorefrontError> {
        if self.admin_mode {
            Ok(())
        } else {
            Err(StorefrontError::Unauthorized)
        }
    }
}
