use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::limits::ENCODE_BUFFER_CAPACITY;
use crate::registry::Registry;
use crate::token::Header;
use crate::utils::base64url;

use serde::de::DeserializeOwned;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// Temporal validity of a token at a reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// All temporal claims are satisfied
    Valid,
    /// `exp` lies before the reference time
    Expired,
    /// `nbf` lies after the reference time
    Inactive,
    /// `iat` lies after the reference time
    NotIssued,
}

/// A JWT: header, claims and the signature of the last codec operation
///
/// Build one with [`Token::new`] and encode it with [`Token::write_string`],
/// or get one from [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub header: Header,
    pub claims: Claims,
    signature: Vec<u8>,
    raw_claims: Vec<u8>,
}

impl Token {
    /// Create an unsigned token for `algorithm` with empty claims
    pub fn new(algorithm: impl AsRef<str>) -> Self {
        Self::with_claims(Header::new(algorithm), Claims::new())
    }

    /// Create a token from a header and claims
    pub fn with_claims(header: Header, claims: Claims) -> Self {
        Self {
            header,
            claims,
            signature: Vec::new(),
            raw_claims: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        header: Header,
        claims: Claims,
        raw_claims: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            header,
            claims,
            signature,
            raw_claims,
        }
    }

    /// Signature produced by the last encode, or consumed by the parser
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Claims JSON as last encoded or received
    pub fn raw_claims(&self) -> &[u8] {
        &self.raw_claims
    }

    /// Encode and sign the token
    ///
    /// The signing input is `base64url(header) "." base64url(claims)`. When
    /// the signer returns an empty signature, as `none` does, the output has
    /// no third segment.
    pub fn write_string(&mut self, registry: &Registry) -> Result<String> {
        let header = serde_json::to_vec(&self.header)?;
        let claims = self.claims.to_json()?;

        let signer = registry
            .signer(&self.header.algorithm)
            .ok_or_else(|| Error::UnknownAlgorithm(self.header.algorithm.clone()))?;

        let mut output = String::with_capacity(ENCODE_BUFFER_CAPACITY);
        base64url::encode_into(&header, &mut output);
        output.push('.');
        base64url::encode_into(&claims, &mut output);

        let signature = signer.sign(output.as_bytes())?;
        if !signature.is_empty() {
            output.push('.');
            base64url::encode_into(&signature, &mut output);
        }

        trace!(
            alg = %self.header.algorithm,
            length = output.len(),
            "encoded token"
        );

        self.signature = signature;
        self.raw_claims = claims;
        Ok(output)
    }

    /// Classify the temporal claims against `now` (seconds since the Unix epoch)
    ///
    /// Checks run in order: `nbf`, then `exp`, then `iat`. All comparisons
    /// are strict, so a token whose `exp` equals `now` is still valid.
    pub fn validate(&self, now: i64) -> State {
        let claims = &self.claims;

        if claims.not_before.is_some_and(|nbf| now < nbf) {
            State::Inactive
        } else if claims.expiration.is_some_and(|exp| exp < now) {
            State::Expired
        } else if claims.issued_at.is_some_and(|iat| iat > now) {
            State::NotIssued
        } else {
            State::Valid
        }
    }

    /// [`validate`](Self::validate) against the system clock
    pub fn validate_now(&self) -> State {
        self.validate(current_timestamp())
    }

    /// Decode the claims segment into a caller-defined type
    ///
    /// Uses the bytes as received when the token came from the parser, so
    /// nothing is lost to the typed [`Claims`] representation.
    pub fn unmarshal_claims<T: DeserializeOwned>(&self) -> Result<T> {
        if self.raw_claims.is_empty() {
            return self.claims.deserialize_into();
        }
        Ok(serde_json::from_slice(&self.raw_claims)?)
    }
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
