use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccountDto {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateAccountDto {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Result of `POST /users`; `inserted` is false when the email was already registered.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateAccountResultDto {
    pub inserted: bool,
    pub message: String,
    pub account: AccountDto,
}
