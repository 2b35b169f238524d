//! Payment gateway client.
//!
//! The booking engine only needs one thing from the payment provider: turn an amount into a
//! hosted checkout the guest can be redirected to. `PaymentGateway` captures that seam so
//! the HTTP client can be replaced by a stub in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    config::PaymentConfig,
    error::payment::PaymentError,
    model::payment::{PaymentRequest, PaymentSession},
};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a hosted checkout for the request.
    ///
    /// # Returns
    /// - `Ok(PaymentSession)` - Gateway token and the URL to redirect the payer to
    /// - `Err(PaymentError)` - Gateway unreachable or transaction refused
    async fn create_session(&self, request: PaymentRequest) -> Result<PaymentSession, PaymentError>;
}

/// Invoice payload sent to the gateway.
#[derive(Serialize)]
struct CheckoutInvoice<'a> {
    amount: i64,
    currency: &'a str,
    reference: &'a str,
    description: &'a str,
    customer: Customer<'a>,
}

#[derive(Serialize)]
struct Customer<'a> {
    first_name: &'a str,
    last_name: &'a str,
    phone_number: &'a str,
}

/// Gateway answer. A token means success; otherwise `message` explains the refusal.
#[derive(Deserialize)]
struct CheckoutResponse {
    token: Option<String>,
    message: Option<String>,
}

/// `PaymentGateway` backed by the provider's HTTP API.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    config: PaymentConfig,
}

impl HttpPaymentGateway {
    /// Creates a gateway client.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client; its timeout bounds every gateway call
    /// - `config` - Gateway endpoint, credentials and currency
    pub fn new(client: reqwest::Client, config: PaymentConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_session(&self, request: PaymentRequest) -> Result<PaymentSession, PaymentError> {
        let invoice = CheckoutInvoice {
            amount: request.amount,
            currency: &self.config.currency,
            reference: &request.reference,
            description: &request.description,
            customer: Customer {
                first_name: &request.payer.first_name,
                last_name: &request.payer.last_name,
                phone_number: &request.payer.phone_number,
            },
        };

        tracing::debug!(
            "Creating payment session for {} ({} {})",
            request.reference,
            request.amount,
            self.config.currency
        );

        let response = self
            .client
            .post(self.config.api_url.clone())
            .bearer_auth(&self.config.api_key)
            .json(&invoice)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(PaymentError::Rejected(rejection_reason(status, &text)));
        }

        let body: CheckoutResponse = serde_json::from_str(&text)
            .map_err(|e| PaymentError::Rejected(format!("unreadable gateway response: {}", e)))?;

        match body.token {
            Some(token) if !token.is_empty() => {
                let redirect_url = checkout_url(&self.config.checkout_url, &token)?;

                Ok(PaymentSession {
                    token,
                    redirect_url: redirect_url.to_string(),
                })
            }
            _ => Err(PaymentError::Rejected(
                body.message
                    .unwrap_or_else(|| "gateway returned no payment token".to_string()),
            )),
        }
    }
}

/// Longest slice of a non-JSON error body kept in the rejection message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Explains a non-2xx gateway reply.
///
/// Uses the gateway's JSON `message` when present, otherwise the start of the raw body
/// (an HTML error page from a proxy, for instance), otherwise just the status.
fn rejection_reason(status: reqwest::StatusCode, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<CheckoutResponse>(body)
        .ok()
        .and_then(|response| response.message)
    {
        return message;
    }

    let text = body.trim();
    if text.is_empty() {
        format!("gateway responded with status {}", status)
    } else {
        let excerpt: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("gateway responded with status {}: {}", status, excerpt)
    }
}

/// Appends the gateway token as the last path segment of the hosted checkout URL.
///
/// # Returns
/// - `Ok(Url)` - Checkout page for the token
/// - `Err(PaymentError::InvalidRedirect)` - Base URL cannot carry a path
pub fn checkout_url(base: &Url, token: &str) -> Result<Url, PaymentError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| PaymentError::InvalidRedirect(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push(token);

    Ok(url)
}
