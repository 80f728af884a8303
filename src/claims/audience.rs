use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Intended recipients of a token (`aud`)
///
/// On the wire an audience is `null` when empty, a bare string when it holds
/// exactly one value and an array of strings otherwise. All three shapes
/// decode into the same ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience(Vec<String>);

impl Audience {
    /// Create an empty audience
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipient
    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    /// Check membership in constant time per entry
    ///
    /// Every entry is compared even after a match is found.
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().fold(false, |found, entry| {
            constant_time_eq(entry.as_bytes(), value.as_bytes()) | found
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Decode any of the accepted JSON shapes
    pub(crate) fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(single) => Ok(Self(vec![single])),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(Error::AudienceTypeMismatch),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self),
            _ => Err(Error::AudienceTypeMismatch),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self.0.as_slice() {
            [] => Value::Null,
            [single] => Value::String(single.clone()),
            many => Value::Array(many.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl Serialize for Audience {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [] => serializer.serialize_none(),
            [single] => serializer.serialize_str(single),
            many => {
                let mut seq = serializer.serialize_seq(Some(many.len()))?;
                for value in many {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Audience::from_value(value).map_err(D::Error::custom)
    }
}

impl From<&str> for Audience {
    fn from(value: &str) -> Self {
        Self(vec![value.to_owned()])
    }
}

impl From<String> for Audience {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for Audience {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<S: Into<String>> FromIterator<S> for Audience {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
