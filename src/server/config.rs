use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PAYMENT_API_URL: &str = "https://api.stripe.com/v1";
const DEFAULT_PAYMENT_CURRENCY: &str = "usd";
const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// HMAC secret used to sign and verify bearer credentials.
    pub access_token_secret: String,

    pub payment_secret_key: String,
    pub payment_api_url: String,
    pub payment_currency: String,

    /// Whether a student may add the same class to their cart more than once.
    pub allow_duplicate_cart_entries: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: optional("PORT", DEFAULT_PORT)?,
            access_token_secret: required("ACCESS_TOKEN_SECRET")?,
            payment_secret_key: required("PAYMENT_SECRET_KEY")?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_API_URL.to_string()),
            payment_currency: std::env::var("PAYMENT_CURRENCY")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_CURRENCY.to_string()),
            allow_duplicate_cart_entries: optional("ALLOW_DUPLICATE_CART_ENTRIES", true)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_value(name, value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
