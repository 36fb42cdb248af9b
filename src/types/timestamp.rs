//! Unix-seconds timestamps as the API emits them.
//!
//! Message and group timestamps arrive as integers on most endpoints and as
//! numeric strings on a few. Record timestamps (`createdAt`, `updatedAt`) are
//! ISO-8601 strings and stay `String`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Int(i64),
    Float(f64),
    Text(String),
    // Baileys `Long` objects: {"low": .., "high": .., "unsigned": ..}
    Long { low: i64, high: i64 },
}

fn to_seconds<E: de::Error>(raw: Raw) -> Result<i64, E> {
    match raw {
        Raw::Int(v) => Ok(v),
        Raw::Float(v) => Ok(v as i64),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid unix timestamp `{}`", s))),
        Raw::Long { low, high } => Ok((high << 32) | (low & 0xFFFF_FFFF)),
    }
}

/// Deserializes an optional Unix-seconds timestamp.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn unix_seconds_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Raw>::deserialize(deserializer)?
        .map(to_seconds)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "unix_seconds_opt")]
        ts: Option<i64>,
    }

    fn parse(json: &str) -> Option<i64> {
        serde_json::from_str::<Holder>(json).unwrap().ts
    }

    #[test]
    fn accepts_every_wire_shape() {
        assert_eq!(parse(r#"{"ts":1717000000}"#), Some(1717000000));
        assert_eq!(parse(r#"{"ts":"1717000000"}"#), Some(1717000000));
        assert_eq!(
            parse(r#"{"ts":{"low":1717000000,"high":0,"unsigned":true}}"#),
            Some(1717000000)
        );
        assert_eq!(parse(r#"{"ts":null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Holder>(r#"{"ts":"2024-01-01T00:00:00Z"}"#).is_err());
    }
}
