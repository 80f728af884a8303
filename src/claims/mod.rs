//! Token claims
//!
//! The registered claims from RFC 7519 section 4.1 are typed fields of
//! [`Claims`]. Every other member of the claims object is kept as raw JSON
//! and written back on encode, so caller-defined claims survive a
//! parse/encode round trip untouched.

mod audience;
pub(crate) mod posix_time;

pub use audience::Audience;

use crate::error::{Error, Result};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const ISSUER: &str = "iss";
const SUBJECT: &str = "sub";
const AUDIENCE: &str = "aud";
const EXPIRATION: &str = "exp";
const NOT_BEFORE: &str = "nbf";
const ISSUED_AT: &str = "iat";
const JWT_ID: &str = "jti";

/// Claims carried in the token payload
///
/// Encoding produces a JSON object with sorted keys. Empty strings, unset
/// timestamps and an empty audience are omitted.
///
/// ```
/// use jwtkit::Claims;
///
/// let mut claims = Claims::new();
/// claims.subject = Some("user-42".into());
/// claims.audience = "office".into();
/// claims.insert_extra("role", "admin").unwrap();
///
/// assert_eq!(
///     claims.to_json().unwrap(),
///     br#"{"aud":"office","role":"admin","sub":"user-42"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    /// Issuer (iss)
    pub issuer: Option<String>,

    /// Subject (sub)
    pub subject: Option<String>,

    /// Audience (aud)
    pub audience: Audience,

    /// Expiration Time (exp), seconds since the Unix epoch
    pub expiration: Option<i64>,

    /// Not Before (nbf), seconds since the Unix epoch
    pub not_before: Option<i64>,

    /// Issued At (iat), seconds since the Unix epoch
    pub issued_at: Option<i64>,

    /// JWT ID (jti)
    pub jwt_id: Option<String>,

    extra: Map<String, Value>,
}

impl Claims {
    /// Create empty claims
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode claims from a JSON object
    pub fn from_json(json: &[u8]) -> Result<Self> {
        let map: Map<String, Value> =
            serde_json::from_slice(json).map_err(|e| Error::BadClaims(e.to_string()))?;
        Self::from_map(map)
    }

    /// Encode claims as a JSON object
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_map())?)
    }

    /// Whether `audience` is one of the token's intended recipients
    pub fn is_audience(&self, audience: &str) -> bool {
        self.audience.contains(audience)
    }

    /// Claims that are not registered claims
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Decode a single extension claim
    pub fn get_extra<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.extra
            .get(key)
            .map(|value| T::deserialize(value).map_err(Error::from))
            .transpose()
    }

    /// Set an extension claim, returning the previous value
    ///
    /// A registered claim name is stored too, but the typed field wins when
    /// the claims are encoded.
    pub fn insert_extra(
        &mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Option<Value>> {
        let value = serde_json::to_value(value)?;
        Ok(self.extra.insert(key.into(), value))
    }

    /// Remove an extension claim
    pub fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    /// Decode all claims into a caller-defined type
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.to_map()))?)
    }

    /// Merge the fields of a caller-defined value into these claims
    ///
    /// `value` must serialize to a JSON object. Its members overwrite
    /// existing claims of the same name, registered claims included.
    pub fn set<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let Value::Object(fields) = serde_json::to_value(value)? else {
            return Err(Error::InvalidJson("claims must be a JSON object".into()));
        };

        let mut map = self.to_map();
        map.extend(fields);
        *self = Self::from_map(map)?;
        Ok(())
    }

    fn from_map(mut map: Map<String, Value>) -> Result<Self> {
        let issuer = take_string(&mut map, ISSUER)?;
        let subject = take_string(&mut map, SUBJECT)?;
        let jwt_id = take_string(&mut map, JWT_ID)?;

        let audience = match map.remove(AUDIENCE) {
            Some(value) => Audience::from_value(value)?,
            None => Audience::default(),
        };

        let expiration = take_time(&mut map, EXPIRATION)?;
        let not_before = take_time(&mut map, NOT_BEFORE)?;
        let issued_at = take_time(&mut map, ISSUED_AT)?;

        Ok(Self {
            issuer,
            subject,
            audience,
            expiration,
            not_before,
            issued_at,
            jwt_id,
            extra: map,
        })
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        for key in [ISSUER, SUBJECT, AUDIENCE, EXPIRATION, NOT_BEFORE, ISSUED_AT, JWT_ID] {
            map.remove(key);
        }

        let strings = [
            (ISSUER, &self.issuer),
            (SUBJECT, &self.subject),
            (JWT_ID, &self.jwt_id),
        ];
        for (key, value) in strings {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                map.insert(key.into(), Value::String(value.into()));
            }
        }

        let times = [
            (EXPIRATION, self.expiration),
            (NOT_BEFORE, self.not_before),
            (ISSUED_AT, self.issued_at),
        ];
        for (key, value) in times {
            if let Some(seconds) = value {
                map.insert(key.into(), Value::from(seconds));
            }
        }

        if !self.audience.is_empty() {
            map.insert(AUDIENCE.into(), self.audience.to_value());
        }

        map
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Result<Option<String>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(Error::BadClaims(format!("{key} must be a string, got {other}"))),
    }
}

fn take_time(map: &mut Map<String, Value>, key: &str) -> Result<Option<i64>> {
    match map.remove(key) {
        Some(value) => posix_time::from_value(key, &value),
        None => Ok(None),
    }
}

impl Serialize for Claims {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Claims {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Claims::from_map(map).map_err(D::Error::custom)
    }
}
