//! # jwtkit - JSON Web Tokens with pluggable algorithms
//!
//! **jwtkit** encodes, signs, decodes and verifies JSON Web Tokens in the
//! compact `header.claims.signature` form. Algorithms are trait objects
//! registered in a caller-owned [`Registry`] under the identifier that appears
//! in the `alg` header field.
//!
//! ## Quick Start
//!
//! ```
//! use jwtkit::algorithm::{Algorithm, hmac::HmacSha};
//! use jwtkit::{Parser, Registry, State, Token};
//! use std::sync::Arc;
//!
//! # fn main() -> jwtkit::Result<()> {
//! let mut registry = Registry::new();
//! registry.register_algorithm(Algorithm::HS256, HmacSha::new(Algorithm::HS256, "my-secret")?);
//! let registry = Arc::new(registry);
//!
//! let mut token = Token::new(Algorithm::HS256);
//! token.claims.subject = Some("user-42".into());
//! token.claims.audience = "office".into();
//! let encoded = token.write_string(&registry)?;
//!
//! let parsed = Parser::new(registry).parse_str(&encoded)?;
//! assert_eq!(parsed.claims.subject.as_deref(), Some("user-42"));
//! assert!(parsed.claims.is_audience("office"));
//! assert_eq!(parsed.validate_now(), State::Valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Flow
//!
//! ```text
//! encode: Token ─ JSON ─ base64url ─ Registry::signer ─ sign ─ "h.c[.s]"
//! decode: "h.c[.s]" ─ split ─ base64url ─ header JSON ─ Registry::verifier
//!         ─ verify over the received bytes ─ claims JSON ─ Token
//! ```
//!
//! Verification always runs over the bytes as received, never over a
//! re-encoding. A verifier returning `Ok(false)` becomes
//! [`Error::IncorrectSignature`]; verifier errors are returned unchanged.
//!
//! ## Algorithms
//!
//! - **HMAC**: HS256, HS384, HS512 ([`algorithm::hmac::HmacSha`])
//! - **RSASSA-PKCS1-v1_5**: RS256, RS384, RS512 ([`algorithm::rsa::RsaPkcs1`])
//! - **RSASSA-PSS**: PS256, PS384, PS512 ([`algorithm::pss::RsaPss`])
//! - **ECDSA**: ES256, ES384, ES512 ([`algorithm::ecdsa::Ecdsa`])
//! - **EdDSA**: Ed25519 ([`algorithm::ed25519::Ed25519`])
//! - **none**: [`algorithm::none::NoneAlgorithm`], only if registered
//!
//! ## Temporal validation
//!
//! [`Token::validate`] classifies a token as [`State::Valid`],
//! [`State::Inactive`] (`nbf`), [`State::Expired`] (`exp`) or
//! [`State::NotIssued`] (`iat`). Comparisons are strict and checked in that
//! order.
//!
//! ## Security
//!
//! HMAC signatures are compared in constant time via the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//! Nothing is registered by default: unsigned tokens are only accepted when
//! `none` is registered explicitly.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518) (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) (JWT)

pub mod error;
pub(crate) mod limits;
pub mod utils;

pub mod algorithm;
pub mod keys;
pub mod registry;

pub mod claims;
pub mod parser;
pub mod token;

pub use algorithm::{Algorithm, Signer, Verifier};
pub use claims::{Audience, Claims};
pub use error::{Error, Result};
pub use parser::Parser;
pub use registry::Registry;
pub use token::{Header, State, Token};
