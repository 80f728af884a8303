//! Token decoding and signature verification
//!
//! The parser splits the compact form, decodes each segment, checks the
//! header, runs the registered verifier over the bytes exactly as received
//! and only then decodes the claims.

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::registry::Registry;
use crate::token::{Header, TOKEN_TYPE, Token};
use crate::utils::base64url;

use std::sync::Arc;
use tracing::{debug, trace};

/// Decodes tokens and verifies them against a [`Registry`]
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Arc<Registry>,
    max_length: usize,
}

impl Parser {
    /// Create a parser backed by `registry`
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            max_length: MAX_TOKEN_LENGTH,
        }
    }

    /// Override the maximum accepted token length in bytes
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The registry used for verification
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse a token string
    pub fn parse_str(&self, token: &str) -> Result<Token> {
        self.parse(token.as_bytes())
    }

    /// Parse and verify a token
    ///
    /// Only a verifier that returns `Ok(false)` yields
    /// [`Error::IncorrectSignature`]; verifier errors are passed through.
    pub fn parse(&self, data: &[u8]) -> Result<Token> {
        self.parse_inner(data).inspect_err(|e| {
            debug!(error = %e, length = data.len(), "token rejected");
        })
    }

    fn parse_inner(&self, data: &[u8]) -> Result<Token> {
        if data.len() > self.max_length {
            return Err(Error::TokenTooLarge {
                size: data.len(),
                max: self.max_length,
            });
        }
        if data.is_empty() {
            return Err(Error::NoData);
        }

        let first_dot = data
            .iter()
            .position(|&b| b == b'.')
            .ok_or(Error::IncorrectFormat)?;

        let (signing_input, signature) =
            match data[first_dot + 1..].iter().position(|&b| b == b'.') {
                Some(offset) => {
                    let second_dot = first_dot + 1 + offset;
                    (&data[..second_dot], Some(&data[second_dot + 1..]))
                }
                None => (data, None),
            };

        let header = base64url::decode_segment(&signing_input[..first_dot], Error::BadHeader)?;
        let raw_claims =
            base64url::decode_segment(&signing_input[first_dot + 1..], Error::BadClaims)?;
        let signature = match signature {
            Some(segment) => base64url::decode_segment(segment, Error::BadSignature)?,
            None => Vec::new(),
        };

        let header: Header =
            serde_json::from_slice(&header).map_err(|e| Error::BadHeader(e.to_string()))?;
        if header.token_type != TOKEN_TYPE {
            return Err(Error::UnsupportedTokenType(header.token_type));
        }

        let verifier = self
            .registry
            .verifier(&header.algorithm)
            .ok_or_else(|| Error::UnknownAlgorithm(header.algorithm.clone()))?;

        if !verifier.verify(signing_input, &signature)? {
            return Err(Error::IncorrectSignature);
        }

        let claims = Claims::from_json(&raw_claims)?;

        trace!(alg = %header.algorithm, "token verified");
        Ok(Token::from_parts(header, claims, raw_claims, signature))
    }
}
