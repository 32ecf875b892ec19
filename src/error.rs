//! Errors for jwtseal
//!
//! Every failure in the sign and verify pipelines maps to exactly one
//! variant. Variants carry plain context (strings, timestamps) and never
//! key material, so errors can be cloned, compared and logged freely.

use thiserror::Error;

/// jwtseal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    /// Wrong segment count, bad Base64URL, or a segment that is not a JSON object
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Header does not contain a valid typ")]
    HeaderTyp,

    /// `alg` is missing, not a string, or not one of the expected signers
    #[error("Header does not contain a valid alg (found: {found:?})")]
    HeaderAlg { found: Option<String> },

    // ============================================================================
    // Signer Errors
    // ============================================================================
    #[error("No signer configured")]
    NoSigner,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Hash unavailable: {0}")]
    HashUnavailable(String),

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    ClaimExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    ClaimNotBefore {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Returned by key-resolution callbacks that cannot produce a key
    #[error("Key unavailable: {0}")]
    KeyUnavailable(String),

    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),

    #[error("Clock skew too large: {value} seconds (maximum: {max} seconds)")]
    ClockSkewTooLarge { value: u64, max: u64 },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

/// Result type alias for jwtseal operations
pub type Result<T> = std::result::Result<T, Error>;
