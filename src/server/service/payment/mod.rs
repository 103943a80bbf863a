//! Payment intent creation against the external payment processor.
//!
//! The processor itself is behind the [`PaymentProcessor`] trait so the rest of the
//! service only sees a client secret. Prices arrive in major currency units and are
//! converted to the processor's integer minor units here.

#[cfg(test)]
pub mod fake;
pub mod stripe;

use async_trait::async_trait;

use crate::server::error::{payment::PaymentError, AppError};

/// Payment intent created by the processor; the client secret is handed to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// External payment processor capable of creating payment intents.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Creates a card payment intent for `amount` minor units of `currency`.
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;
}

/// Converts a price in major units to integer minor units (cents).
///
/// # Returns
/// - `Ok(i64)` - Price scaled by 100 and rounded to the nearest minor unit
/// - `Err(PaymentError::InvalidAmount)` - Price is not finite, not positive, or too large
pub fn to_minor_units(price: f64) -> Result<i64, PaymentError> {
    let minor = (price * 100.0).round();

    if !price.is_finite() || minor < 1.0 || minor > i64::MAX as f64 {
        return Err(PaymentError::InvalidAmount(price));
    }

    Ok(minor as i64)
}

/// Service creating payment intents through the configured processor.
pub struct PaymentService<'a> {
    processor: &'a dyn PaymentProcessor,
    currency: &'a str,
}

impl<'a> PaymentService<'a> {
    pub fn new(processor: &'a dyn PaymentProcessor, currency: &'a str) -> Self {
        Self {
            processor,
            currency,
        }
    }

    /// Creates a payment intent for `price` and returns it.
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent created by the processor
    /// - `Err(AppError::PaymentErr(InvalidAmount))` - Price cannot be charged
    /// - `Err(AppError::PaymentErr(Upstream | Request))` - Processor call failed
    pub async fn create_intent(&self, price: f64) -> Result<PaymentIntent, AppError> {
        let amount = to_minor_units(price)?;

        let intent = self
            .processor
            .create_payment_intent(amount, self.currency)
            .await?;

        tracing::info!("Created payment intent {} for {} {}", intent.id, amount, self.currency);

        Ok(intent)
    }
}
