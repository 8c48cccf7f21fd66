//! Authentication service.
//!
//! The storefront ships with mock authentication: a credential-shape check
//! with no real verification, matching the demo site it fronts. The
//! [`Authenticator`] trait is the seam where a real identity backend would
//! plug in; the [`AuthStore`] holding the session identity would not change.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use sweetshop_core::{Email, UserId};

use crate::storage::{self, LocalStore};

/// Default minimum password length for the mock credential check.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// The authenticated user identity persisted under the `user` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// User ID. Mock logins always get ID 1; mock registrations derive one
    /// from the registration timestamp.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
}

/// Pluggable credential verification boundary.
///
/// Implementations decide what a valid credential is; the [`AuthStore`]
/// only cares about the resulting [`UserAccount`].
pub trait Authenticator: Send + Sync {
    /// Verify a login attempt.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the credentials are rejected.
    fn login(&self, email: &str, password: &SecretString) -> Result<UserAccount, AuthError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the submitted details are rejected.
    fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<UserAccount, AuthError>;
}

// =============================================================================
// Mock authenticator
// =============================================================================

/// Mock authenticator: accepts any well-formed email with a long-enough
/// password. No credential is ever stored or verified against anything.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    min_password_length: usize,
}

impl MockAuthenticator {
    /// Create a mock authenticator with a custom minimum password length.
    #[must_use]
    pub const fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    fn check_password(&self, password: &SecretString) -> Result<(), AuthError> {
        if password.expose_secret().len() < self.min_password_length {
            return Err(AuthError::WeakPassword(format!(
                "password must be at least {} characters",
                self.min_password_length
            )));
        }
        Ok(())
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

impl Authenticator for MockAuthenticator {
    fn login(&self, email: &str, password: &SecretString) -> Result<UserAccount, AuthError> {
        let email = Email::parse(email)?;
        self.check_password(password)?;

        // Display name falls back to the email local part.
        Ok(UserAccount {
            id: UserId::new(1),
            name: email.local_part().to_owned(),
            email,
        })
    }

    fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<UserAccount, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::parse(email)?;
        self.check_password(password)?;

        Ok(UserAccount {
            id: UserId::new(chrono::Utc::now().timestamp_millis()),
            name: name.to_owned(),
            email,
        })
    }
}

// =============================================================================
// Auth store
// =============================================================================

/// Session identity holder.
///
/// Independent of the cart store; the two only share a storage backend.
/// The identity record persists under [`storage::keys::USER`] so a reload
/// keeps the user signed in.
pub struct AuthStore {
    user: Option<UserAccount>,
    authenticator: Arc<dyn Authenticator>,
    storage: Arc<dyn LocalStore>,
}

impl AuthStore {
    /// Restore the auth state from persisted storage.
    ///
    /// A missing or corrupt identity record degrades to signed-out; this
    /// never fails.
    #[must_use]
    pub fn load(authenticator: Arc<dyn Authenticator>, storage: Arc<dyn LocalStore>) -> Self {
        let user = match storage.read(storage::keys::USER) {
            Ok(Some(raw)) => match serde_json::from_str::<UserAccount>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted user record is corrupt, signing out");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted user record, signing out");
                None
            }
        };

        Self {
            user,
            authenticator,
            storage,
        }
    }

    /// Attempt a login and persist the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the authenticator rejects the credentials;
    /// the previous session state is left untouched in that case.
    pub fn login(
        &mut self,
        email: &str,
        password: &SecretString,
    ) -> Result<&UserAccount, AuthError> {
        let user = self.authenticator.login(email, password)?;
        tracing::info!(user_id = %user.id, "user logged in");
        self.persist(&user);
        Ok(self.user.insert(user))
    }

    /// Register a new account, sign it in, and persist the identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the authenticator rejects the details.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<&UserAccount, AuthError> {
        let user = self.authenticator.register(name, email, password)?;
        tracing::info!(user_id = %user.id, "user registered");
        self.persist(&user);
        Ok(self.user.insert(user))
    }

    /// Sign out and remove the persisted identity record.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "user logged out");
        }
        if let Err(e) = self.storage.remove(storage::keys::USER) {
            tracing::error!(error = %e, "failed to remove persisted user record");
        }
    }

    /// The currently signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Persist the identity record; failures are logged and swallowed.
    fn persist(&self, user: &UserAccount) {
        let serialized = match serde_json::to_string(user) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize user record");
                return;
            }
        };

        if let Err(e) = self.storage.write(storage::keys::USER, &serialized) {
            tracing::error!(error = %e, "failed to persist user record, continuing in memory");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn fresh_store() -> (AuthStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let store = AuthStore::load(
            Arc::new(MockAuthenticator::default()),
            Arc::clone(&storage) as Arc<dyn LocalStore>,
        );
        (store, storage)
    }

    #[test]
    fn test_login_accepts_shaped_credentials() {
        let (mut store, _) = fresh_store();
        let user = store.login("jane@example.com", &secret("hunter22")).unwrap();

        assert_eq!(user.name, "jane");
        assert_eq!(user.id, UserId::new(1));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_login_rejects_short_password() {
        let (mut store, _) = fresh_store();
        let result = store.login("jane@example.com", &secret("short"));

        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let (mut store, _) = fresh_store();
        assert!(matches!(
            store.login("not-an-email", &secret("hunter22")),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_register_requires_name() {
        let (mut store, _) = fresh_store();
        assert!(matches!(
            store.register("  ", "jane@example.com", &secret("hunter22")),
            Err(AuthError::MissingName)
        ));

        let user = store
            .register("Jane Doe", "jane@example.com", &secret("hunter22"))
            .unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert!(user.id > UserId::new(1), "registration ids are timestamps");
    }

    #[test]
    fn test_identity_survives_reload() {
        let (mut store, storage) = fresh_store();
        store.login("jane@example.com", &secret("hunter22")).unwrap();
        drop(store);

        let reloaded = AuthStore::load(Arc::new(MockAuthenticator::default()), storage);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.current_user().unwrap().name, "jane");
    }

    #[test]
    fn test_logout_removes_persisted_record() {
        let (mut store, storage) = fresh_store();
        store.login("jane@example.com", &secret("hunter22")).unwrap();

        store.logout();
        assert!(!store.is_authenticated());
        assert!(storage.read(storage::keys::USER).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_user_record_degrades_to_signed_out() {
        let storage = Arc::new(MemoryStore::new());
        storage.write(storage::keys::USER, "][").unwrap();

        let store = AuthStore::load(Arc::new(MockAuthenticator::default()), storage);
        assert!(!store.is_authenticated());
    }
}
