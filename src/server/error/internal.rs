use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored sync log column holds a value outside its known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {column} value '{value}' in sync log")]
    UnknownSyncLogValue {
        /// Column that failed to parse
        column: &'static str,
        /// The stored value
        value: String,
    },

    /// Hashing a generated credential failed.
    #[error("Failed to hash credential: {0}")]
    CredentialHash(String),
}
