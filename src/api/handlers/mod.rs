//! API handlers and the JSON shapes they share.

pub mod auth;
pub mod health;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response, and of the logout acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
