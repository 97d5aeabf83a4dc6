//! Typed request payloads
//!
//! Bitfinex v1 carries request parameters in a base64 JSON header rather than
//! in the query string. A [`Payload`] is that JSON object before encoding.

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::decimal::{to_string_form, ApiValue};

/// Value of a single payload field
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Str(String),
    Int(i64),
    /// Sent as its string form
    Decimal(Decimal),
    Bool(bool),
}

impl From<PayloadValue> for ApiValue {
    fn from(value: PayloadValue) -> Self {
        match value {
            PayloadValue::Str(s) => ApiValue::String(s),
            PayloadValue::Int(n) => ApiValue::from(n),
            PayloadValue::Decimal(d) => ApiValue::Decimal(d),
            PayloadValue::Bool(b) => ApiValue::Bool(b),
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PayloadValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for PayloadValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<Decimal> for PayloadValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Request payload, keyed by field name
///
/// Keys are kept sorted so the encoded JSON is canonical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    fields: BTreeMap<String, PayloadValue>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The payload as a decimal-aware JSON object
    pub fn to_api_value(&self) -> ApiValue {
        ApiValue::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), ApiValue::from(value.clone())))
                .collect(),
        )
    }

    /// The payload as plain JSON, decimals rendered as strings
    pub fn to_json(&self) -> Value {
        to_string_form(&self.to_api_value())
    }

    /// Compact JSON text with sorted keys
    pub fn to_canonical_json(&self) -> String {
        self.to_json().to_string()
    }
}
