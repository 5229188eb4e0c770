//! Session authentication service.
//!
//! Flow Overview:
//! 1) `register` creates an identity keyed by email.
//! 2) `login` checks the password and issues an opaque bearer token.
//! 3) `whoami` resolves an `Authorization: Bearer <token>` header to an identity.
//! 4) `logout` drops the token, if any; it never fails.
//!
//! Everything is transport agnostic; the HTTP mapping lives in `api::handlers::auth`.

mod error;
mod store;
mod token;
mod types;

pub use error::AuthError;
pub use store::{
    AuthStore, BEARER_PREFIX, DEFAULT_FULL_NAME, DEMO_USER_EMAIL, DEMO_USER_FULL_NAME,
    DEMO_USER_ID, DEMO_USER_PASSWORD, StoreStats, bearer_token,
};
pub use token::generate_session_token;
pub use types::{IdentityView, LoginOutcome};
