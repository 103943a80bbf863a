use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaymentIntentRequestDto {
    pub price: f64,
}

/// Client secret handed to the browser to confirm the card payment.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PaymentIntentDto {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
