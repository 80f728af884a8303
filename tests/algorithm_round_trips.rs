//! Per-algorithm round-trip tests
//!
//! For every algorithm family these tests:
//! 1. Sign/encode a token through the registry
//! 2. Parse and verify it again
//! 3. Check that header and claims survive the round trip
//! 4. Check that a verifier holding different key material answers `false`

use jwtkit::algorithm::ecdsa::Ecdsa;
use jwtkit::algorithm::ed25519::Ed25519;
use jwtkit::algorithm::hmac::HmacSha;
use jwtkit::algorithm::none::NoneAlgorithm;
use jwtkit::algorithm::pss::RsaPss;
use jwtkit::algorithm::rsa::RsaPkcs1;
use jwtkit::keys::{EcdsaCurve, EcdsaPrivateKey, Ed25519PrivateKey, RsaPrivateKey};
use jwtkit::*;

use std::sync::{Arc, OnceLock};

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn rsa_key(index: usize) -> RsaPrivateKey {
    static KEYS: OnceLock<Vec<RsaPrivateKey>> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = rand::thread_rng();
        (0..2)
            .map(|_| RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key"))
            .collect()
    })[index]
        .clone()
}

fn sample_token(alg: &str) -> Token {
    let mut token = Token::with_claims(Header::new(alg).with_key_id("key-1"), Claims::new());
    token.claims.issuer = Some("https://example.com".into());
    token.claims.subject = Some("test-user".into());
    token.claims.audience = "test-app".into();
    token.claims.issued_at = Some(now());
    token.claims.expiration = Some(now() + 3600);
    token.claims.insert_extra("role", "admin").unwrap();
    token
}

/// Encode with `signer`, parse with the same registry, then check that
/// `stranger` rejects the signature as incorrect.
fn round_trip<A, B>(alg: &str, algorithm: A, stranger: B)
where
    A: Signer + Verifier + 'static,
    B: Signer + Verifier + 'static,
{
    let mut registry = Registry::new();
    registry.register_algorithm(alg, algorithm);
    let registry = Arc::new(registry);

    let mut token = sample_token(alg);
    let encoded = token.write_string(&registry).expect("encode failed");
    assert_eq!(encoded.matches('.').count(), 2, "{alg}");

    let parsed = Parser::new(registry).parse_str(&encoded).expect("parse failed");
    assert_eq!(parsed.header, token.header);
    assert_eq!(parsed.claims, token.claims);
    assert_eq!(parsed.signature(), token.signature());
    assert_eq!(parsed.validate_now(), State::Valid);
    assert_eq!(
        parsed.claims.get_extra::<String>("role").unwrap().as_deref(),
        Some("admin")
    );

    let mut other = Registry::new();
    other.register_algorithm(alg, stranger);
    assert_eq!(
        Parser::new(Arc::new(other)).parse_str(&encoded),
        Err(Error::IncorrectSignature),
        "{alg}"
    );
}

// ============================================================================
// HMAC Algorithm Round-Trips (HS256, HS384, HS512)
// ============================================================================

mod hmac_tests {
    use super::*;

    #[test]
    fn test_round_trip_hmac() {
        for alg in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            round_trip(
                alg.as_str(),
                HmacSha::new(alg, "test-secret-key").unwrap(),
                HmacSha::new(alg, "another-secret-key").unwrap(),
            );
        }
    }

    #[test]
    fn test_hmac_is_deterministic() {
        let mut registry = Registry::new();
        registry.register_algorithm(
            Algorithm::HS256,
            HmacSha::new(Algorithm::HS256, "secret").unwrap(),
        );

        let mut token = sample_token("HS256");
        let first = token.write_string(&registry).unwrap();
        let second = token.write_string(&registry).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// RSA Algorithm Round-Trips (RS256/384/512, PS256/384/512)
// ============================================================================

mod rsa_tests {
    use super::*;

    fn pkcs1(alg: Algorithm, index: usize) -> RsaPkcs1 {
        let key = rsa_key(index);
        let public = key.to_public_key();
        RsaPkcs1::new(alg, Some(key), Some(public)).unwrap()
    }

    fn pss(alg: Algorithm, index: usize) -> RsaPss {
        let key = rsa_key(index);
        let public = key.to_public_key();
        RsaPss::new(alg, Some(key), Some(public)).unwrap()
    }

    #[test]
    fn test_round_trip_rsa_pkcs1() {
        for alg in [Algorithm::RS256, Algorithm::RS384, Algorithm::RS512] {
            round_trip(alg.as_str(), pkcs1(alg, 0), pkcs1(alg, 1));
        }
    }

    #[test]
    fn test_round_trip_rsa_pss() {
        for alg in [Algorithm::PS256, Algorithm::PS384, Algorithm::PS512] {
            round_trip(alg.as_str(), pss(alg, 0), pss(alg, 1));
        }
    }

    #[test]
    fn test_pss_tokens_differ_but_both_verify() {
        let mut registry = Registry::new();
        registry.register_algorithm(Algorithm::PS256, pss(Algorithm::PS256, 0));
        let registry = Arc::new(registry);

        let mut token = sample_token("PS256");
        let first = token.write_string(&registry).unwrap();
        let second = token.write_string(&registry).unwrap();
        assert_ne!(first, second);

        let parser = Parser::new(registry);
        assert!(parser.parse_str(&first).is_ok());
        assert!(parser.parse_str(&second).is_ok());
    }
}

// ============================================================================
// ECDSA Algorithm Round-Trips (ES256, ES384, ES512)
// ============================================================================

mod ecdsa_tests {
    use super::*;

    fn ecdsa(alg: Algorithm, curve: EcdsaCurve) -> Ecdsa {
        let key = EcdsaPrivateKey::generate(curve).unwrap();
        let public = key.public_key();
        Ecdsa::new(alg, Some(key), Some(public)).unwrap()
    }

    #[test]
    fn test_round_trip_ecdsa() {
        for (alg, curve) in [
            (Algorithm::ES256, EcdsaCurve::P256),
            (Algorithm::ES384, EcdsaCurve::P384),
            (Algorithm::ES512, EcdsaCurve::P521),
        ] {
            round_trip(alg.as_str(), ecdsa(alg, curve), ecdsa(alg, curve));
        }
    }
}

// ============================================================================
// EdDSA and none
// ============================================================================

mod eddsa_tests {
    use super::*;

    fn ed25519() -> Ed25519 {
        let key = Ed25519PrivateKey::generate().unwrap();
        let public = key.public_key();
        Ed25519::new(Some(key), public).unwrap()
    }

    #[test]
    fn test_round_trip_ed25519() {
        round_trip(Algorithm::EdDSA.as_str(), ed25519(), ed25519());
    }
}

mod none_tests {
    use super::*;

    #[test]
    fn test_round_trip_none() {
        let mut registry = Registry::new();
        registry.register_algorithm(Algorithm::None, NoneAlgorithm);
        let registry = Arc::new(registry);

        let mut token = sample_token("none");
        let encoded = token.write_string(&registry).unwrap();
        assert_eq!(encoded.matches('.').count(), 1);

        let parsed = Parser::new(registry).parse_str(&encoded).unwrap();
        assert_eq!(parsed.claims, token.claims);
        assert!(parsed.signature().is_empty());
    }
}
