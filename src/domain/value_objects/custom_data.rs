//! Custom data - open extension bag attached to an owned business
//!
//! The core never interprets these values. Other features (upgrade trees,
//! staff notes, event flags) hang their own keys here and the ledger
//! round-trips them through the save file untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// String-keyed bag of extension values, ordered for stable save output
pub type CustomData = BTreeMap<String, CustomValue>;

/// A single extension value
///
/// Kept to three kinds on purpose:
/// - `Number` for counters, multipliers and amounts
/// - `Text` for labels and free-form notes
/// - `Flag` for toggles
///
/// Values serialize as bare JSON scalars, so a save file written by older
/// tooling with plain numbers/strings/booleans loads without conversion.
/// JSON has no NaN or infinity, so `Number` must hold a finite value; build
/// numbers through `TryFrom<f64>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl CustomValue {
    /// False only for a `Number` holding NaN or an infinity
    pub fn is_storable(&self) -> bool {
        match self {
            CustomValue::Number(n) => n.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomValue::Flag(b) => write!(f, "{}", b),
            CustomValue::Number(n) => write!(f, "{}", n),
            CustomValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Custom value {0} is not a finite number")]
pub struct NonFiniteNumber(pub f64);

impl TryFrom<f64> for CustomValue {
    type Error = NonFiniteNumber;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(CustomValue::Number(value))
        } else {
            Err(NonFiniteNumber(value))
        }
    }
}

impl From<i64> for CustomValue {
    fn from(value: i64) -> Self {
        CustomValue::Number(value as f64)
    }
}

impl From<bool> for CustomValue {
    fn from(value: bool) -> Self {
        CustomValue::Flag(value)
    }
}

impl From<&str> for CustomValue {
    fn from(value: &str) -> Self {
        CustomValue::Text(value.to_string())
    }
}

impl From<String> for CustomValue {
    fn from(value: String) -> Self {
        CustomValue::Text(value)
    }
}
