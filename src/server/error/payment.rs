use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while creating a hosted payment session.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Transport failure calling the gateway.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Gateway answered but refused to create the transaction.
    #[error("Payment gateway rejected the transaction: {0}")]
    Rejected(String),

    /// Gateway token could not be turned into a checkout URL.
    #[error("Failed to build payment redirect URL: {0}")]
    InvalidRedirect(#[from] url::ParseError),
}

/// Converts payment errors into 500 responses.
///
/// Gateway rejections pass the gateway's message through in the `error` field; transport
/// failures are logged and reported generically.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let body = match self {
            Self::Rejected(reason) => ErrorDto::new("Payment could not be initiated").with_error(reason),
            Self::Http(_) | Self::InvalidRedirect(_) => {
                ErrorDto::new("Payment could not be initiated")
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
