//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{payment::PaymentProcessor, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds reference-counted signing keys
/// - `Arc<dyn PaymentProcessor>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer credentials.
    pub tokens: TokenService,

    /// External payment processor used to create payment intents.
    pub payments: Arc<dyn PaymentProcessor>,

    /// Currency code sent with every payment intent.
    pub payment_currency: String,

    /// Whether the same class may sit in a student's cart more than once.
    pub allow_duplicate_cart_entries: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Credential issuer and verifier
    /// - `payments` - Payment processor client
    /// - `payment_currency` - Currency code for payment intents
    /// - `allow_duplicate_cart_entries` - Cart de-duplication switch
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        payments: Arc<dyn PaymentProcessor>,
        payment_currency: String,
        allow_duplicate_cart_entries: bool,
    ) -> Self {
        Self {
            db,
            tokens,
            payments,
            payment_currency,
            allow_duplicate_cart_entries,
        }
    }
}
