//! Decimal codec for Bitfinex JSON
//!
//! The exchange sends prices, amounts, rates and timestamps as JSON strings.
//! [`decimalize`] turns those strings into exact [`Decimal`] values as a
//! response comes in, and [`to_string_form`] renders decimals back into
//! strings on the way out, so financial quantities never pass through a
//! binary float.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::InputError;

/// Field names that carry decimal numbers wherever they appear
pub const DECIMAL_FIELDS: [&str; 16] = [
    "amount",
    "ask",
    "available",
    "bid",
    "executed_amount",
    "high",
    "last_price",
    "low",
    "mid",
    "original_amount",
    "price",
    "remaining_amount",
    "timestamp",
    "volume",
    "rate",
    "amount_lent",
];

/// Returns true if `key` is one of [`DECIMAL_FIELDS`]
pub fn is_decimal_field(key: &str) -> bool {
    DECIMAL_FIELDS.contains(&key)
}

/// Parse a decimal in plain (`"0.0125"`) or scientific (`"1.25e-2"`) notation
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// JSON value whose numeric fields may hold exact decimals
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApiValue {
    #[default]
    Null,
    Bool(bool),
    /// Native JSON number, left as sent
    Number(Number),
    String(String),
    /// String field from [`DECIMAL_FIELDS`], parsed exactly
    Decimal(Decimal),
    Array(Vec<ApiValue>),
    Object(BTreeMap<String, ApiValue>),
}

impl ApiValue {
    /// An empty object, the result of a degraded request
    pub fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Returns true for an object with no entries
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(map) if map.is_empty())
    }

    /// Look up a key of an object
    pub fn get(&self, key: &str) -> Option<&ApiValue> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ApiValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, ApiValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Decode into a typed model
    ///
    /// Decimals go back through their string form, so `Decimal` fields of
    /// the target keep their exact value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(to_string_form(self))
    }
}

impl Serialize for ApiValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Decimal(d) => serializer.serialize_str(&d.to_string()),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(map) => serializer.collect_map(map),
        }
    }
}

impl From<Decimal> for ApiValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<&str> for ApiValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ApiValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ApiValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ApiValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// Convert decimal-formatted strings of a JSON tree into [`Decimal`]s
///
/// Object entries whose key is in `fields` and whose value is a string are
/// parsed. Arrays and objects are walked regardless of their key. Every
/// other value, `null` included, passes through unchanged.
pub fn decimalize(value: Value, fields: &[&str]) -> Result<ApiValue, InputError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| decimalize(item, fields))
            .collect::<Result<Vec<_>, _>>()
            .map(ApiValue::Array),
        Value::Object(map) => {
            let mut out = BTreeMap::new();
            for (key, value) in map {
                let converted = match value {
                    Value::String(s) if fields.contains(&key.as_str()) => match parse_decimal(&s) {
                        Some(d) => ApiValue::Decimal(d),
                        None => {
                            return Err(InputError::DecimalParse {
                                field: key,
                                value: s,
                            })
                        }
                    },
                    other => decimalize(other, fields)?,
                };
                out.insert(key, converted);
            }
            Ok(ApiValue::Object(out))
        }
        Value::Null => Ok(ApiValue::Null),
        Value::Bool(b) => Ok(ApiValue::Bool(b)),
        Value::Number(n) => Ok(ApiValue::Number(n)),
        Value::String(s) => Ok(ApiValue::String(s)),
    }
}

/// [`decimalize`] with the Bitfinex [`DECIMAL_FIELDS`]
pub fn decimalize_response(value: Value) -> Result<ApiValue, InputError> {
    decimalize(value, &DECIMAL_FIELDS)
}

/// Render every decimal of a tree as its canonical string
pub fn to_string_form(value: &ApiValue) -> Value {
    match value {
        ApiValue::Null => Value::Null,
        ApiValue::Bool(b) => Value::Bool(*b),
        ApiValue::Number(n) => Value::Number(n.clone()),
        ApiValue::String(s) => Value::String(s.clone()),
        ApiValue::Decimal(d) => Value::String(d.to_string()),
        ApiValue::Array(items) => Value::Array(items.iter().map(to_string_form).collect()),
        ApiValue::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_string_form(value)))
                .collect(),
        ),
    }
}
