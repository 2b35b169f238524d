use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was sent with the request.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token does not match any issued access token.
    #[error("Bearer token is not recognized")]
    InvalidToken,

    /// Email/password pair did not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User is authenticated but lacks the permission required for the operation.
    ///
    /// Fields are the user ID and a description of the denied action, logged server-side.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Password reset token is unknown, expired or already used.
    #[error("Password reset token is invalid or expired")]
    InvalidResetToken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidResetToken` → 400 Bad Request
///
/// Denied access is logged at debug level while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action",
                    )),
                )
                    .into_response()
            }
            Self::InvalidResetToken => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
        }
    }
}
