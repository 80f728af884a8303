//! Signing algorithms
//!
//! Every algorithm family implements [`Signer`] and [`Verifier`]. Instances
//! are bound to their key material at construction time and are registered
//! under an identifier in a [`Registry`](crate::Registry).

mod traits;

pub mod ecdsa;
pub mod ed25519;
pub mod hmac;
pub mod none;
pub mod pss;
pub mod rsa;

pub use traits::{Signer, Verifier};

use crate::error::{Error, Result};
use std::str::FromStr;

/// Algorithm identifier carried in the `alg` header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Unsecured token, no signature
    None,

    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// RSASSA-PSS with SHA-256 and MGF1 with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384 and MGF1 with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512 and MGF1 with SHA-512
    PS512,

    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,

    /// EdDSA with Ed25519
    EdDSA,
}

impl Algorithm {
    /// Convert to the wire identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::None => "none",
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
            Algorithm::RS256 => "RS256",
            Algorithm::RS384 => "RS384",
            Algorithm::RS512 => "RS512",
            Algorithm::PS256 => "PS256",
            Algorithm::PS384 => "PS384",
            Algorithm::PS512 => "PS512",
            Algorithm::ES256 => "ES256",
            Algorithm::ES384 => "ES384",
            Algorithm::ES512 => "ES512",
            Algorithm::EdDSA => "EdDSA",
        }
    }

    /// Build the error returned when an algorithm is handed to the wrong family
    pub(crate) fn mismatch(&self, family: &'static str) -> Error {
        Error::AlgorithmMismatch {
            algorithm: self.as_str().into(),
            family,
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Algorithm::None),
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            "RS256" => Ok(Algorithm::RS256),
            "RS384" => Ok(Algorithm::RS384),
            "RS512" => Ok(Algorithm::RS512),
            "PS256" => Ok(Algorithm::PS256),
            "PS384" => Ok(Algorithm::PS384),
            "PS512" => Ok(Algorithm::PS512),
            "ES256" => Ok(Algorithm::ES256),
            "ES384" => Ok(Algorithm::ES384),
            "ES512" => Ok(Algorithm::ES512),
            "EdDSA" => Ok(Algorithm::EdDSA),
            _ => Err(Error::UnknownAlgorithm(s.into())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
