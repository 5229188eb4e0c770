use thiserror::Error;

/// Failures surfaced by [`super::AuthStore`].
///
/// The display strings of the first four variants are part of the wire
/// contract and are returned verbatim as `detail`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User exists")]
    DuplicateUser,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid token")]
    InvalidToken,
    #[error("failed to generate session token: {0}")]
    TokenGeneration(#[from] rand::Error),
}

impl AuthError {
    /// Message safe to hand back to a client.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::TokenGeneration(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_messages() {
        assert_eq!(AuthError::DuplicateUser.detail(), "User exists");
        assert_eq!(AuthError::InvalidCredentials.detail(), "Invalid credentials");
        assert_eq!(AuthError::NotAuthenticated.detail(), "Not authenticated");
        assert_eq!(AuthError::InvalidToken.detail(), "Invalid token");
    }

    #[test]
    fn token_generation_detail_is_generic() {
        let err = AuthError::TokenGeneration(rand::Error::new(std::io::Error::other("no entropy")));
        assert_eq!(err.detail(), "Internal server error");
        assert!(err.to_string().contains("no entropy"));
    }
}
