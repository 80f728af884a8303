use crate::algorithm::Algorithm;
use crate::error::Result;

use serde::{Deserialize, Serialize};

/// The only token type accepted by the parser
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header structure
///
/// Fields serialize in the order `alg`, `typ`, `cty`, `kid`; unset optional
/// fields are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type, `"JWT"`
    #[serde(rename = "typ", default)]
    pub token_type: String,

    /// Content type
    #[serde(rename = "cty", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Key ID
    #[serde(rename = "kid", default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl Header {
    /// Create a `JWT` header for `algorithm`
    ///
    /// Any identifier works, as long as it is registered when the token is
    /// encoded.
    pub fn new(algorithm: impl AsRef<str>) -> Self {
        Self {
            algorithm: algorithm.as_ref().to_owned(),
            token_type: TOKEN_TYPE.to_owned(),
            content_type: None,
            key_id: None,
        }
    }

    /// Set the key ID
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Parse the algorithm into one of the built-in identifiers
    pub fn parse_algorithm(&self) -> Result<Algorithm> {
        self.algorithm.parse()
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_minimal_header_json() {
        let header = Header::new(Algorithm::None);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"none","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_field_order_with_optionals() {
        let header = Header::new("HS256")
            .with_key_id("key-1")
            .with_content_type("JWT");

        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"alg":"HS256","typ":"JWT","cty":"JWT","kid":"key-1"}"#
        );
    }

    #[test]
    fn test_decode_missing_type() {
        let header: Header = serde_json::from_str(r#"{"alg":"HS256"}"#).unwrap();
        assert_eq!(header.token_type, "");
        assert_eq!(header.key_id(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let header: Header =
            serde_json::from_str(r#"{"alg":"HS256","typ":"JWT","x5t":"abc","crit":["b64"]}"#)
                .unwrap();
        assert_eq!(header, Header::new("HS256"));
    }

    #[test]
    fn test_numeric_kid_rejected() {
        assert!(serde_json::from_str::<Header>(r#"{"alg":"HS256","typ":"JWT","kid":7}"#).is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(Header::new("ES384").parse_algorithm(), Ok(Algorithm::ES384));
        assert!(matches!(
            Header::new("custom").parse_algorithm(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }
}
