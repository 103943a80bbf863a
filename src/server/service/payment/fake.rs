//! In-process payment processor used by tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{PaymentIntent, PaymentProcessor};
use crate::server::error::payment::PaymentError;

/// Records every request and answers with a deterministic client secret.
pub struct FakePaymentProcessor {
    fail: bool,
    requests: Mutex<Vec<(i64, String)>>,
}

impl FakePaymentProcessor {
    pub fn new() -> Self {
        Self {
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A processor that rejects every request with a 500 upstream error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(amount, currency)` pairs received so far.
    pub fn requests(&self) -> Vec<(i64, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for FakePaymentProcessor {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        if self.fail {
            return Err(PaymentError::Upstream {
                status: 500,
                body: "processor down".to_string(),
            });
        }

        let mut requests = self.requests.lock().unwrap();
        requests.push((amount, currency.to_string()));
        let n = requests.len();

        Ok(PaymentIntent {
            id: format!("pi_{}", n),
            client_secret: format!("pi_{}_secret_{}", n, amount),
        })
    }
}
