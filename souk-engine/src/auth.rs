//! Admin Credential Manager
//!
//! Single shared admin secret plus a session-scoped authenticated flag.
//! The secret is stored plaintext-at-rest in local durable storage: this is
//! a single-operator local admin gate, an explicit scope limitation of the
//! store, not a multi-tenant security boundary.

use parking_lot::RwLock;
use std::sync::Arc;

use shared::{AppError, AppResult};

use crate::storage::{ADMIN_SECRET_KEY, SESSION_ADMIN_FLAG, SessionFlags, Store};

/// Secret in effect until the operator rotates it
pub const DEFAULT_ADMIN_SECRET: &str = "admin";
/// Minimum accepted password length on rotation
pub const MIN_PASSWORD_LEN: usize = 4;

pub struct AdminAuth {
    secret: RwLock<String>,
    store: Arc<Store>,
    session: SessionFlags,
}

impl AdminAuth {
    /// Load the secret from the admin-secret namespace
    pub fn load(store: Arc<Store>, session: SessionFlags) -> Self {
        let secret = store
            .load_raw(ADMIN_SECRET_KEY)
            .unwrap_or_else(|| DEFAULT_ADMIN_SECRET.to_string());
        Self {
            secret: RwLock::new(secret),
            store,
            session,
        }
    }

    /// Whether the current session is authenticated
    ///
    /// The flag is session-scoped: it survives reloads within the session
    /// and is gone when the session ends.
    pub fn is_authenticated(&self) -> bool {
        self.session.get(SESSION_ADMIN_FLAG)
    }

    /// Verify a login attempt
    ///
    /// On failure the session state is unchanged; there is no lockout or
    /// backoff.
    pub fn login(&self, candidate: &str) -> AppResult<()> {
        if candidate != *self.secret.read() {
            tracing::debug!("admin login rejected");
            return Err(AppError::invalid_credentials());
        }
        self.session.set(SESSION_ADMIN_FLAG, true);
        tracing::info!("admin session opened");
        Ok(())
    }

    /// Close the admin session
    pub fn logout(&self) {
        self.session.remove(SESSION_ADMIN_FLAG);
        tracing::info!("admin session closed");
    }

    /// Rotate the secret under old-password proof
    pub fn change_password(
        &self,
        old_candidate: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> AppResult<()> {
        let mut secret = self.secret.write();
        if old_candidate != *secret {
            return Err(AppError::wrong_current_password());
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::password_too_short(MIN_PASSWORD_LEN));
        }
        if new_password != confirm_password {
            return Err(AppError::password_mismatch());
        }

        self.store.save_raw(ADMIN_SECRET_KEY, new_password)?;
        *secret = new_password.to_string();
        tracing::info!("admin password rotated");
        Ok(())
    }
}
