//! Serde adapters for the wire formats Lichess uses for instants.
//!
//! Timestamps arrive as epoch-millisecond integers (and, on a few tournament
//! fields, as RFC 3339 strings). Which fields get converted is decided by the
//! `#[serde(with = ...)]` attributes on the typed models, field by field —
//! an explicit allowlist, never inferred from the shape of the JSON, so an
//! unrelated integer that happens to share a key name in some other payload
//! is never touched.
//!
//! The `*_option` adapters are lenient: an out-of-range or unparseable value
//! deserializes as `None` instead of failing the whole decode, since the
//! schema may evolve server-side.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Required epoch-millisecond timestamp.
pub mod millis {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(dt.timestamp_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Utc.timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}")))
    }
}

/// Optional epoch-millisecond timestamp. Pair with `#[serde(default)]` so an
/// absent field decodes as `None`.
pub mod millis_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_i64(dt.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let ms = Option::<i64>::deserialize(deserializer)?;
        Ok(ms.and_then(|ms| Utc.timestamp_millis_opt(ms).single()))
    }
}

/// Optional timestamp that arrives either as epoch milliseconds or as an
/// RFC 3339 string (tournament `startsAt` does both, depending on endpoint).
pub mod millis_or_string_option {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MillisOrString {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        millis_option::serialize(dt, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<MillisOrString>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| match raw {
            MillisOrString::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
            MillisOrString::Text(s) => DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }))
    }
}

/// Duration expressed in milliseconds (clock times in board game state).
pub mod duration_millis {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(d.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Ok(Duration::milliseconds(ms))
    }
}
