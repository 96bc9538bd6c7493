//! Error types for EIP-712 schema collection, value validation, and hashing.
//!
//! All variants are fatal to the current signing session; nothing here is
//! retried internally. Every variant that can be attributed to a specific
//! field carries that field's name or path, since it is the primary
//! debugging aid for a remote, untrusted host.

use thiserror::Error;

/// Errors that can occur while collecting, validating, or hashing EIP-712
/// typed data on behalf of a signing session.
#[derive(Debug, Error)]
pub enum Error {
    /// A value received from the host failed validation (length, UTF-8,
    /// boolean range, address length, nested-array, etc).
    #[error("{field}: {reason}")]
    DataError {
        /// Name (or path segment) of the offending field.
        field: String,
        /// Human-readable reason the value was rejected.
        reason: String,
    },

    /// A struct referenced by the schema was never delivered by the host,
    /// so dependency resolution or encoding cannot complete.
    #[error("schema error: {0}")]
    SchemaError(String),

    /// A padding input exceeded 32 bytes.
    #[error("value overflows 32 bytes")]
    Overflow,

    /// A type name or wire `data_type` tag was not recognised.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// The operator declined a confirmation, or the host aborted the
    /// session.
    #[error("signing session cancelled")]
    Cancelled,

    /// An error bubbled up from the host link.
    #[error("transport error: {0}")]
    TransportError(String),

    /// The underlying ECDSA signer failed.
    #[error("signing error: {0}")]
    SigningError(String),

    /// Invalid EVM address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Shorthand for [`Error::DataError`].
    pub fn data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::DataError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_message() {
        let error = Error::data("kids[1]", "invalid length");
        assert_eq!(error.to_string(), "kids[1]: invalid length");
    }

    #[test]
    fn test_schema_error_message() {
        let error = Error::SchemaError("struct Person never delivered".to_string());
        assert_eq!(
            error.to_string(),
            "schema error: struct Person never delivered"
        );
    }

    #[test]
    fn test_overflow_message() {
        assert_eq!(Error::Overflow.to_string(), "value overflows 32 bytes");
    }

    #[test]
    fn test_unsupported_type_message() {
        let error = Error::UnsupportedType("bytes33".to_string());
        assert_eq!(error.to_string(), "unsupported type: bytes33");
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(Error::Cancelled.to_string(), "signing session cancelled");
    }

    #[test]
    fn test_transport_error_message() {
        let error = Error::TransportError("link closed".to_string());
        assert_eq!(error.to_string(), "transport error: link closed");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
