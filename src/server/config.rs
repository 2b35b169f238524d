use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PAYMENT_CURRENCY: &str = "XOF";
const DEFAULT_PAYMENT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub payment: PaymentConfig,
}

/// Settings of the hosted payment provider.
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Endpoint that creates a checkout invoice.
    pub api_url: Url,
    pub api_key: String,
    /// Base of the hosted payment page; the gateway token is appended to it.
    pub checkout_url: Url,
    /// ISO currency code every amount is expressed in.
    pub currency: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let timeout_secs = match std::env::var("PAYMENT_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PAYMENT_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PAYMENT_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            payment: PaymentConfig {
                api_url: required_url("PAYMENT_API_URL")?,
                api_key: required("PAYMENT_API_KEY")?,
                checkout_url: required_url("PAYMENT_CHECKOUT_URL")?,
                currency: std::env::var("PAYMENT_CURRENCY")
                    .unwrap_or_else(|_| DEFAULT_PAYMENT_CURRENCY.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn required_url(name: &str) -> Result<Url, ConfigError> {
    let value = required(name)?;

    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
