//! In-memory identity and session mappings behind a single lock.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use super::{
    error::AuthError,
    token::generate_session_token,
    types::{IdentityView, LoginOutcome},
};

pub const BEARER_PREFIX: &str = "Bearer ";
pub const DEFAULT_FULL_NAME: &str = "User";

pub const DEMO_USER_ID: &str = "demo-user-1";
pub const DEMO_USER_EMAIL: &str = "9876543210@demo.com";
pub const DEMO_USER_FULL_NAME: &str = "Demo User";
pub const DEMO_USER_PASSWORD: &str = "demo123";

#[derive(Debug)]
struct Identity {
    id: String,
    email: String,
    full_name: String,
    password: SecretString,
}

impl Identity {
    fn view(&self) -> IdentityView {
        IdentityView {
            id: self.id.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Directory {
    /// email -> identity
    identities: HashMap<String, Identity>,
    /// token -> email
    sessions: HashMap<String, String>,
}

/// Counts reported by `/health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreStats {
    pub identities: usize,
    pub sessions: usize,
}

/// Owns every identity and session for the lifetime of the process.
///
/// Each operation takes the lock once, so register/login/whoami/logout are
/// atomic with respect to both mappings.
#[derive(Debug, Default)]
pub struct AuthStore {
    directory: Mutex<Directory>,
}

/// Extract the token from a raw `Authorization` header value.
///
/// Only the exact `"Bearer "` prefix is accepted; the token is everything after it.
#[must_use]
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization?.strip_prefix(BEARER_PREFIX)
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo account used by the frontend.
    #[must_use]
    pub fn with_demo_user() -> Self {
        let mut directory = Directory::default();
        directory.identities.insert(
            DEMO_USER_EMAIL.to_string(),
            Identity {
                id: DEMO_USER_ID.to_string(),
                email: DEMO_USER_EMAIL.to_string(),
                full_name: DEMO_USER_FULL_NAME.to_string(),
                password: SecretString::from(DEMO_USER_PASSWORD),
            },
        );

        Self {
            directory: Mutex::new(directory),
        }
    }

    /// Create a new identity.
    ///
    /// # Errors
    /// Returns [`AuthError::DuplicateUser`] if the email is already registered.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: String,
        password: SecretString,
        full_name: Option<String>,
    ) -> Result<IdentityView, AuthError> {
        let mut directory = self.directory.lock().await;

        if directory.identities.contains_key(&email) {
            debug!("email already registered");
            return Err(AuthError::DuplicateUser);
        }

        // Empty names fall back to the default as well.
        let full_name = full_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FULL_NAME.to_string());

        let identity = Identity {
            id: (directory.identities.len() + 1).to_string(),
            email: email.clone(),
            full_name,
            password,
        };
        let view = identity.view();
        directory.identities.insert(email, identity);

        info!(user_id = %view.id, "identity registered");

        Ok(view)
    }

    /// Check credentials and open a new session.
    ///
    /// Earlier sessions of the same identity stay valid.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email or a wrong
    /// password, and [`AuthError::TokenGeneration`] if no token can be drawn.
    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginOutcome, AuthError> {
        let mut directory = self.directory.lock().await;

        let user = match directory.identities.get(email) {
            Some(identity) if identity.password.expose_secret() == password.expose_secret() => {
                identity.view()
            }
            _ => {
                debug!("login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let access_token = loop {
            let candidate = generate_session_token()?;
            if !directory.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        directory
            .sessions
            .insert(access_token.clone(), user.email.clone());

        info!(user_id = %user.id, "session opened");

        Ok(LoginOutcome { access_token, user })
    }

    /// Resolve a raw `Authorization` header to the identity behind it.
    ///
    /// # Errors
    /// Returns [`AuthError::NotAuthenticated`] when the header is missing or not
    /// a bearer header, and [`AuthError::InvalidToken`] when the token is unknown
    /// or points to an email without an identity.
    #[instrument(skip_all)]
    pub async fn whoami(&self, authorization: Option<&str>) -> Result<IdentityView, AuthError> {
        let token = bearer_token(authorization).ok_or(AuthError::NotAuthenticated)?;

        let directory = self.directory.lock().await;

        directory
            .sessions
            .get(token)
            .and_then(|email| directory.identities.get(email))
            .map(Identity::view)
            .ok_or(AuthError::InvalidToken)
    }

    /// Drop the session named by a raw `Authorization` header, if any.
    ///
    /// Missing or malformed headers and unknown tokens are ignored.
    #[instrument(skip_all)]
    pub async fn logout(&self, authorization: Option<&str>) {
        let Some(token) = bearer_token(authorization) else {
            return;
        };

        if self.directory.lock().await.sessions.remove(token).is_some() {
            info!("session closed");
        }
    }

    pub async fn stats(&self) -> StoreStats {
        let directory = self.directory.lock().await;
        StoreStats {
            identities: directory.identities.len(),
            sessions: directory.sessions.len(),
        }
    }
}
