//! Serde helpers that keep non-finite floats intact.
//!
//! JSON has no literal for infinities or NaN, and `serde_json` writes them as
//! `null`, which cannot be read back into a float. These helpers write finite
//! values as plain numbers and non-finite values as tagged strings: `"inf"`,
//! `"-inf"` or `"nan:<hex bits>"`.

use serde::de::{self, Visitor};
use std::fmt;

const POS_INF: &str = "inf";
const NEG_INF: &str = "-inf";
const NAN_PREFIX: &str = "nan:";

/// `#[serde(with = "...")]` helpers for `f32` fields.
pub mod lossless_f32 {
    use super::{NAN_PREFIX, RawFloat, RawFloatVisitor, infinity_tag};
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f32(*value)
        } else if value.is_nan() {
            serializer.serialize_str(&format!("{NAN_PREFIX}{:08x}", value.to_bits()))
        } else {
            serializer.serialize_str(infinity_tag(value.is_sign_negative()))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserializer.deserialize_any(RawFloatVisitor)? {
            RawFloat::Number(value) => Ok(value as f32),
            RawFloat::PosInf => Ok(f32::INFINITY),
            RawFloat::NegInf => Ok(f32::NEG_INFINITY),
            RawFloat::NanBits(bits) => u32::try_from(bits)
                .ok()
                .map(f32::from_bits)
                .filter(|value| value.is_nan())
                .ok_or_else(|| de::Error::custom(format!("{bits:#x} is not an f32 NaN"))),
        }
    }
}

/// `#[serde(with = "...")]` helpers for `f64` fields.
pub mod lossless_f64 {
    use super::{NAN_PREFIX, RawFloat, RawFloatVisitor, infinity_tag};
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str(&format!("{NAN_PREFIX}{:016x}", value.to_bits()))
        } else {
            serializer.serialize_str(infinity_tag(value.is_sign_negative()))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserializer.deserialize_any(RawFloatVisitor)? {
            RawFloat::Number(value) => Ok(value),
            RawFloat::PosInf => Ok(f64::INFINITY),
            RawFloat::NegInf => Ok(f64::NEG_INFINITY),
            RawFloat::NanBits(bits) => Some(f64::from_bits(bits))
                .filter(|value| value.is_nan())
                .ok_or_else(|| de::Error::custom(format!("{bits:#x} is not an f64 NaN"))),
        }
    }
}

fn infinity_tag(negative: bool) -> &'static str {
    if negative { NEG_INF } else { POS_INF }
}

enum RawFloat {
    Number(f64),
    PosInf,
    NegInf,
    NanBits(u64),
}

struct RawFloatVisitor;

impl<'de> Visitor<'de> for RawFloatVisitor {
    type Value = RawFloat;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or one of \"inf\", \"-inf\", \"nan:<hex bits>\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawFloat, E> {
        Ok(RawFloat::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawFloat, E> {
        Ok(RawFloat::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawFloat, E> {
        Ok(RawFloat::Number(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawFloat, E> {
        match value {
            POS_INF => Ok(RawFloat::PosInf),
            NEG_INF => Ok(RawFloat::NegInf),
            _ => value
                .strip_prefix(NAN_PREFIX)
                .and_then(|hex| u64::from_str_radix(hex, 16).ok())
                .map(RawFloat::NanBits)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::lossless_f32")]
        narrow: f32,
        #[serde(with = "super::lossless_f64")]
        wide: f64,
    }

    fn round_trip(narrow: f32, wide: f64) -> Sample {
        let json = serde_json::to_string(&Sample { narrow, wide }).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn finite_values_stay_plain_numbers() {
        let json = serde_json::to_string(&Sample {
            narrow: -12.25,
            wide: 0.1,
        })
        .unwrap();
        assert_eq!(json, r#"{"narrow":-12.25,"wide":0.1}"#);

        let back = round_trip(f32::MIN_POSITIVE, f64::MAX);
        assert_eq!(back.narrow, f32::MIN_POSITIVE);
        assert_eq!(back.wide, f64::MAX);
    }

    #[test]
    fn infinities_survive() {
        let json = serde_json::to_string(&Sample {
            narrow: f32::INFINITY,
            wide: f64::NEG_INFINITY,
        })
        .unwrap();
        assert_eq!(json, r#"{"narrow":"inf","wide":"-inf"}"#);

        let back = round_trip(f32::NEG_INFINITY, f64::INFINITY);
        assert_eq!(back.narrow, f32::NEG_INFINITY);
        assert_eq!(back.wide, f64::INFINITY);
    }

    #[test]
    fn nan_keeps_its_bits() {
        let narrow = f32::from_bits(0x7fc0_1234);
        let wide = -f64::NAN;
        let back = round_trip(narrow, wide);
        assert_eq!(back.narrow.to_bits(), narrow.to_bits());
        assert_eq!(back.wide.to_bits(), wide.to_bits());
    }

    #[test]
    fn integers_are_accepted() {
        let back: Sample = serde_json::from_str(r#"{"narrow": 10, "wide": -3}"#).unwrap();
        assert_eq!(back.narrow, 10.0);
        assert_eq!(back.wide, -3.0);
    }

    #[test]
    fn rejects_null_and_unknown_tags() {
        for text in [
            r#"{"narrow": null, "wide": 1}"#,
            r#"{"narrow": "huge", "wide": 1}"#,
            r#"{"narrow": "nan:00000001", "wide": 1}"#,
        ] {
            assert!(serde_json::from_str::<Sample>(text).is_err(), "{text}");
        }
    }

    #[test]
    fn value_path_matches_direct_parse() {
        let json = serde_json::to_string(&Sample {
            narrow: f32::NAN,
            wide: 2.5,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let back: Sample = serde_json::from_value(value).unwrap();
        assert!(back.narrow.is_nan());
        assert_eq!(back.wide, 2.5);
    }
}
