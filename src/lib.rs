//! # HeyBabyy (Authentication API)
//!
//! `heybabyy` serves a small session authentication API: register, login,
//! fetch the current user, and logout.
//!
//! ## Storage
//!
//! Identities and session tokens live in process memory only, inside a single
//! [`auth::AuthStore`] guarded by one lock. Nothing survives a restart.
//!
//! ## Sessions
//!
//! Login issues an opaque bearer token drawn from the OS random source. Tokens
//! never expire and a new login does not revoke earlier ones; only logout
//! removes a token.
//!
//! ## Credentials
//!
//! Passwords are compared as plain strings for parity with the demo frontend.
//! They are kept in a [`secrecy::SecretString`] so they never reach logs.

pub mod api;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
