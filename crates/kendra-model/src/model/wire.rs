//! Wire encoding helpers and the operation catalogue.

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{ModelError, ModelResult, SERVICE_TARGET_PREFIX};

/// Binds a request record to its operation name and response record.
pub trait ServiceRequest: Serialize {
    /// Operation name, e.g. `ListDataSources`.
    const OPERATION: &'static str;

    type Response: DeserializeOwned;

    /// Value of the `X-Amz-Target` header for this operation.
    fn target(&self) -> String {
        format!("{}.{}", SERVICE_TARGET_PREFIX, Self::OPERATION)
    }

    /// Encode the request body.
    fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a reply body. A blank body decodes as `{}`.
    fn decode_response(body: &str) -> ModelResult<Self::Response> {
        let body = if body.trim().is_empty() { "{}" } else { body };
        serde_json::from_str(body).map_err(|e| {
            log::debug!("[{}] Failed to decode response: {}", Self::OPERATION, e);
            ModelError::Json(e)
        })
    }
}

/// Reply of operations that return no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// An instant with second precision.
///
/// Sub-second parts are dropped when the value is built, so a timestamp
/// always survives an encode/decode round trip unchanged. On the wire it is
/// a number of epoch seconds; fractional input is floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn from_secs(secs: i64) -> ModelResult<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0)
            .map(Self)
            .ok_or(ModelError::InvalidTimestamp(secs))
    }

    /// Seconds since the Unix epoch.
    pub fn secs(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(0))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.secs())
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp in epoch seconds")
    }

    fn visit_i64<E: de::Error>(self, secs: i64) -> Result<Self::Value, E> {
        Timestamp::from_secs(secs).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, secs: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(secs).map_err(|_| E::custom("timestamp out of range"))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, secs: f64) -> Result<Self::Value, E> {
        if !secs.is_finite() {
            return Err(E::custom("timestamp is not a finite number"));
        }
        self.visit_i64(secs.floor() as i64)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}
