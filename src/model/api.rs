use serde::{Deserialize, Serialize};

/// Body of every error response: `{"error": true, "message": "..."}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub error: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

/// Signed bearer credential returned by `POST /jwt`.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDto {
    pub token: String,
}

/// Outcome of a delete operation.
#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResultDto {
    pub deleted_count: u64,
}
