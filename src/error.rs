//! Error types for the lookup pipeline.
//!
//! Only provider failures surface as errors. Structural mismatches inside the
//! extraction stages degrade to empty values and are logged, never raised.

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a word lookup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The content provider could not supply a document (network failure,
    /// unexpected response shape, ...). Never cached; a retry is possible on
    /// the next call.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider returned a payload that could not be decoded into a
    /// markup tree.
    #[error("malformed page payload: {0}")]
    Decode(String),
}
