use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value read back from the database is outside its closed set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unexpected value '{value}' stored in {column}")]
    InvalidStoredValue {
        /// Table and column the value came from
        column: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// Signing a bearer credential failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to sign bearer credential: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}
