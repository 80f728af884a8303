//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate using the
//! URL-safe alphabet without padding, which is the only form used on the wire.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to a Base64URL string
pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Append the Base64URL form of `input` to `output`
pub(crate) fn encode_into(input: &[u8], output: &mut String) {
    URL_SAFE_NO_PAD.encode_string(input, output);
}

/// Decode one token segment
///
/// `wrap` chooses the error variant, so the caller can tell a corrupt header
/// from corrupt claims or a corrupt signature.
pub(crate) fn decode_segment(input: &[u8], wrap: fn(String) -> Error) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| wrap(format!("Base64URL decode failed: {e}")))
}

/// Decode a Base64URL string to bytes
pub fn decode_bytes(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::InvalidBase64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("prefix.");
        encode_into(b"foo", &mut out);
        assert_eq!(out, "prefix.Zm9v");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(decode_bytes("!!!"), Err(Error::InvalidBase64(_))));
        // Standard base64 with padding is rejected
        assert!(matches!(decode_bytes("SGVsbG8="), Err(Error::InvalidBase64(_))));
    }

    #[test]
    fn test_decode_segment_wraps_error() {
        let result = decode_segment(b"$$", Error::BadClaims);
        assert!(matches!(result, Err(Error::BadClaims(_))));
    }

    #[test]
    fn test_url_safe_characters() {
        let encoded = encode_bytes([0xfb, 0xff]);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_bytes(&encoded).unwrap(), vec![0xfb, 0xff]);
    }
}
