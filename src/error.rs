//! Errors for jwtkit

use thiserror::Error;

/// Errors that can occur while signing, verifying, encoding or parsing tokens
///
/// A `Verifier` that reports `Ok(false)` is not an error: it means the
/// signature is cryptographically invalid. The parser turns that outcome into
/// [`Error::IncorrectSignature`]; everything else here signals a malformed
/// input or a fault in the crypto backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    /// The input is empty
    #[error("no data")]
    NoData,

    /// The input is not three dot-separated segments
    #[error("incorrect format")]
    IncorrectFormat,

    /// The input exceeds the parser's length limit
    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    /// The header segment is not valid Base64URL or JSON
    #[error("bad header: {0}")]
    BadHeader(String),

    /// The claims segment is not valid Base64URL, JSON or claims
    #[error("bad claims: {0}")]
    BadClaims(String),

    /// The signature segment is not valid Base64URL
    #[error("bad signature: {0}")]
    BadSignature(String),

    /// Input outside a token segment is not valid Base64URL
    #[error("Base64URL decode failed: {0}")]
    InvalidBase64(String),

    /// JSON encoding or decoding failed outside token parsing
    #[error("JSON processing failed: {0}")]
    InvalidJson(String),

    /// The header `typ` is not `"JWT"`
    #[error("token type \"{0}\" not supported")]
    UnsupportedTokenType(String),

    /// `aud` is neither a string, an array of strings, nor null
    #[error("aud field should be string or array of strings")]
    AudienceTypeMismatch,

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    /// No algorithm is registered under this identifier
    #[error("unknown algorithm \"{0}\"")]
    UnknownAlgorithm(String),

    /// The algorithm does not belong to the implementation's family
    #[error("algorithm {algorithm} is not {family}")]
    AlgorithmMismatch {
        algorithm: String,
        family: &'static str,
    },

    /// Key material is missing, empty or of the wrong length
    #[error("key is nil or empty")]
    InvalidKey,

    /// ECDSA key curve or signature width disagrees with the algorithm
    #[error("incorrect size: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    /// The signature does not verify
    #[error("incorrect signature")]
    IncorrectSignature,

    /// Feeding the payload into a pooled hasher failed
    #[error("hash write failed: {0}")]
    HashWrite(String),

    /// The crypto backend reported a failure (malformed key, RNG)
    #[error("cryptographic operation failed: {0}")]
    Crypto(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidJson(err.to_string())
    }
}

/// Result type alias for jwtkit operations
pub type Result<T> = std::result::Result<T, Error>;
