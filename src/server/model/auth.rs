//! Credential claims and the authenticated identity derived from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a signed bearer credential.
///
/// `email` identifies the caller; `iat` and `exp` are Unix timestamps in seconds.
/// Any other fields presented to `POST /jwt` ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller identity established by a valid credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub email: String,
    pub claims: Map<String, Value>,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            claims: claims.extra,
        }
    }
}
