use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of an identity; never carries the password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityView {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Result of a successful login.
#[derive(Clone, Debug)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: IdentityView,
}
