//! Data records - entered values keyed by field id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw, uncoerced form inputs keyed by field id.
pub type RawInputs = BTreeMap<String, String>;

/// An entered value: either the raw string or a coerced number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Decimal),
    Text(String),
}

impl Value {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

/// Mapping from field id to entered value.
///
/// Lookups never fail: an absent text reads as the empty string and an
/// absent number reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    values: BTreeMap<String, Value>,
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding the raw strings as-is, without numeric coercion.
    pub fn from_raw(inputs: &RawInputs) -> Self {
        Self {
            values: inputs
                .iter()
                .map(|(id, raw)| (id.clone(), Value::Text(raw.clone())))
                .collect(),
        }
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Display text of a value; numbers print in their shortest form.
    pub fn text(&self, id: &str) -> String {
        match self.values.get(id) {
            Some(Value::Text(text)) => text.clone(),
            Some(Value::Number(number)) => number.normalize().to_string(),
            None => String::new(),
        }
    }

    /// Numeric value; text that does not parse reads as zero.
    pub fn number(&self, id: &str) -> Decimal {
        match self.values.get(id) {
            Some(Value::Number(number)) => *number,
            Some(Value::Text(text)) => crate::form::coerce_number(text),
            None => Decimal::ZERO,
        }
    }

    pub fn is_blank(&self, id: &str) -> bool {
        self.values.get(id).map_or(true, Value::is_blank)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}
