//! Bearer credential issuance and verification.
//!
//! Credentials are HS256-signed JWTs carrying the caller's email plus whatever other
//! claims were presented at issuance. They expire one hour after they are issued and
//! are checked with zero leeway. Issuance never touches the store; a token only proves
//! identity when presented back through [`TokenService::authenticate`].

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::auth::{Claims, Identity},
};

/// Lifetime of an issued credential.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Claim names managed by the service; caller-supplied values for these are replaced.
const RESERVED_CLAIMS: [&str; 3] = ["email", "iat", "exp"];

/// Signs and verifies bearer credentials with a server-side secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service keyed by the given HMAC secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issues a credential for the given identity payload, valid for one hour from now.
    ///
    /// # Arguments
    /// - `payload` - JSON object that must contain a string `email`; other fields are
    ///   carried as extra claims
    ///
    /// # Returns
    /// - `Ok(String)` - Signed credential
    /// - `Err(AppError::BadRequest)` - Payload has no string `email`
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    pub fn issue(&self, payload: Map<String, Value>) -> Result<String, AppError> {
        self.issue_at(payload, Utc::now())
    }

    /// Issues a credential as though it had been signed at `issued_at`.
    pub(crate) fn issue_at(
        &self,
        mut payload: Map<String, Value>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let email = match payload.get("email") {
            Some(Value::String(email)) if !email.is_empty() => email.clone(),
            _ => {
                return Err(AppError::BadRequest(
                    "Credential payload must include an email".to_string(),
                ))
            }
        };

        for claim in RESERVED_CLAIMS {
            payload.remove(claim);
        }

        let claims = Claims {
            email,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
            extra: payload,
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(InternalError::TokenSigning)?;

        Ok(token)
    }

    /// Validates a credential and returns the identity it asserts.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Signature valid and credential unexpired
    /// - `Err(AuthError::InvalidCredential)` - Malformed, expired, or wrongly signed
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(Identity::from(data.claims))
    }
}
