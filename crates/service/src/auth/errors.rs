use thiserror::Error;

/// Failures around bearer tokens
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no bearer token presented")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::MissingToken => 1004,
            AuthError::InvalidToken(_) => 1005,
            AuthError::TokenError(_) => 1102,
        }
    }
}
