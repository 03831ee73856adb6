//! Authentication state mirrored into a key-value side channel.
//!
//! [`SessionStore`] is the source of truth once constructed. Every mutation
//! is written through to the injected [`KeyValueStore`] on a best-effort
//! basis: storage failures are logged and otherwise ignored.

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

/// Storage keys for persisted session fields.
pub mod keys {
    /// Key for the opaque session token.
    pub const TOKEN: &str = "token";

    /// Key for the admin flag, stored as a JSON boolean.
    pub const IS_ADMIN: &str = "isAdmin";

    /// Key for the logged-in user's id.
    pub const USER_ID: &str = "userId";

    /// Key for the logged-in user's email.
    pub const USER_EMAIL: &str = "userEmail";

    /// Every key the session writes.
    pub const ALL: [&str; 4] = [TOKEN, IS_ADMIN, USER_ID, USER_EMAIL];
}

/// Session fields held in memory.
///
/// Nothing here is validated: a session with a token but no user id is
/// still considered logged in.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Opaque token issued by the auth backend.
    pub token: Option<SecretString>,
    /// Whether the user has admin rights.
    pub is_admin: bool,
    /// Logged-in user's id.
    pub user_id: Option<String>,
    /// Logged-in user's email.
    pub user_email: Option<String>,
}

/// Session store backed by a persistent side channel.
#[derive(Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore a session from `storage`.
    ///
    /// Empty values count as absent. The admin flag is `true` only when the
    /// stored value parses as the JSON literal `true`; anything else,
    /// including garbage, yields `false`.
    pub fn new(storage: S) -> Self {
        let token = read_value(&storage, keys::TOKEN).map(SecretString::from);
        let is_admin = parse_admin_flag(read_value(&storage, keys::IS_ADMIN).as_deref());
        let user_id = read_value(&storage, keys::USER_ID);
        let user_email = read_value(&storage, keys::USER_EMAIL);

        debug!(
            has_token = token.is_some(),
            is_admin, "Restored session from storage"
        );

        Self {
            state: SessionState {
                token,
                is_admin,
                user_id,
                user_email,
            },
            storage,
        }
    }

    /// Record a successful login and persist all four fields.
    ///
    /// The caller is expected to have authenticated the user already; no
    /// argument is checked.
    pub fn login(
        &mut self,
        token: impl Into<String>,
        is_admin: bool,
        user_id: impl Into<String>,
        user_email: impl Into<String>,
    ) {
        let token: String = token.into();
        let user_id: String = user_id.into();
        let user_email: String = user_email.into();

        self.write(keys::TOKEN, &token);
        self.write(keys::IS_ADMIN, if is_admin { "true" } else { "false" });
        self.write(keys::USER_ID, &user_id);
        self.write(keys::USER_EMAIL, &user_email);

        debug!(%user_id, is_admin, "Session logged in");

        self.state = SessionState {
            token: Some(SecretString::from(token)),
            is_admin,
            user_id: Some(user_id),
            user_email: Some(user_email),
        };
    }

    /// Clear all fields and remove them from storage.
    pub fn logout(&mut self) {
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "Failed to remove session key");
            }
        }
        self.state = SessionState::default();
        debug!("Session logged out");
    }

    /// Whether a non-empty token is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state
            .token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    /// Whether the admin flag is set.
    #[must_use]
    pub const fn is_admin_user(&self) -> bool {
        self.state.is_admin
    }

    /// Logged-in user's id.
    #[must_use]
    pub fn current_user_id(&self) -> Option<&str> {
        self.state.user_id.as_deref()
    }

    /// Logged-in user's email.
    #[must_use]
    pub fn current_user_email(&self) -> Option<&str> {
        self.state.user_email.as_deref()
    }

    /// Session token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.state.token.as_ref()
    }

    /// Snapshot of all in-memory fields.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The backing side channel.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its side channel.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!(key, error = %e, "Failed to persist session key");
        }
    }
}

fn read_value<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!(key, error = %e, "Failed to read session key");
            None
        }
    }
}

fn parse_admin_flag(raw: Option<&str>) -> bool {
    raw.and_then(|r| serde_json::from_str::<serde_json::Value>(r).ok())
        .is_some_and(|v| v == serde_json::Value::Bool(true))
}
