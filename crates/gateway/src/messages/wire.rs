//! Scalar encodings shared by all messages

use folio_core::PricePoint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserialize an int64 sent either as a JSON number or a string
pub fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Serialize an int64 as a string, as the gateway itself does
pub fn ser_i64<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Fixed-point quotation `{ "units": "250", "nano": 500000000 }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotationWire {
    #[serde(deserialize_with = "de_i64", serialize_with = "ser_i64")]
    pub units: i64,
    pub nano: i32,
}

impl From<QuotationWire> for PricePoint {
    fn from(q: QuotationWire) -> Self {
        PricePoint::new(q.units, q.nano)
    }
}
