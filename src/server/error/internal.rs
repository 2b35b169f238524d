use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with argon2
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Monetary amount does not fit in an i64
    ///
    /// Occurs when a stay price or order total exceeds the representable range.
    #[error("Amount overflow computing {0}")]
    AmountOverflow(String),
}
