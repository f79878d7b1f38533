//! Authentication ports.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing session cookie")]
    MissingSession,

    #[error("Unknown or expired session")]
    InvalidSession,

    #[error("Session backend failure: {0}")]
    SessionBackend(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
