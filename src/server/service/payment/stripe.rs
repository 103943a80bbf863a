//! Stripe-compatible payment processor client.

use async_trait::async_trait;
use serde::Deserialize;

use super::{PaymentIntent, PaymentProcessor};
use crate::server::{config::Config, error::payment::PaymentError};

/// Payment intent fields read back from the processor.
#[derive(Deserialize)]
struct PaymentIntentResponse {
    id: String,
    client_secret: String,
}

/// Creates payment intents through the processor's REST API.
pub struct StripeClient {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            api_url: config.payment_api_url.trim_end_matches('/').to_string(),
            secret_key: config.payment_secret_key.clone(),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let response = self
            .http_client
            .post(format!("{}/payment_intents", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", currency.to_string()),
                ("payment_method_types[]", "card".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let intent: PaymentIntentResponse = response.json().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
