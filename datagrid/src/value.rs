//! Value enum for accessed cell values

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value read out of a row by a column accessor.
///
/// Accessors return a `Value` so the engine can search and sort any row type
/// without knowing its fields. The variant decides how two values compare;
/// the [`Display`](fmt::Display) form is the canonical string used by search.
///
/// # Canonical strings
///
/// | Variant | Display |
/// |---------|---------|
/// | `Null` | empty string |
/// | `Bool` | `true` / `false` |
/// | `Int`, `Long` | `100` |
/// | `Float` | shortest round-trip form (`100`, `1.5`) |
/// | `Decimal` | normalized (`15.50` → `15.5`) |
/// | `String` | as is |
/// | `Date` | `2024-03-01` |
/// | `DateTime` | `2024-03-01T09:30:00Z` |
/// | `Json` | compact JSON |
///
/// # Example
///
/// ```
/// use datagrid::Value;
///
/// let name = Value::from("Ocean Breeze");
/// let amount = Value::from(100i64);
/// let missing: Value = Option::<i32>::None.into();
///
/// assert_eq!(amount.to_string(), "100");
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Fallback for structured JSON values (arrays, objects).
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Returns `true` for the numeric variants.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_)
        )
    }

    /// Exact numeric value, for everything except floats.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Int(v) => Some(Decimal::from(*v)),
            Value::Long(v) => Some(Decimal::from(*v)),
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(f64::from(*v)),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            _ => None,
        }
    }

    /// The instant a temporal value refers to. A date is its midnight UTC.
    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(d.and_time(NaiveTime::MIN).and_utc()),
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Converts a JSON value, keeping scalars typed.
    ///
    /// Integers that fit `i64` become `Long`, other numbers become `Float`.
    /// Arrays and objects are kept as `Json`.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Long(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v.normalize()),
            Value::String(v) => f.write_str(v),
            Value::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Value::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(Value::from(100i32).to_string(), "100");
        assert_eq!(Value::from(100.0f64).to_string(), "100");
        assert_eq!(Value::from(1.5f64).to_string(), "1.5");
        assert_eq!(Value::from(Decimal::new(1550, 2)).to_string(), "15.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_temporal_strings() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-03-01");

        let dt = date.and_hms_opt(9, 30, 0).unwrap().and_utc();
        assert_eq!(Value::from(dt).to_string(), "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_from_json_keeps_scalars_typed() {
        assert_eq!(Value::from_json(serde_json::json!(500)), Value::Long(500));
        assert_eq!(Value::from_json(serde_json::json!(1.25)), Value::Float(1.25));
        assert_eq!(Value::from_json(serde_json::json!("x")), Value::from("x"));
        assert_eq!(Value::from_json(serde_json::json!(null)), Value::Null);
        assert!(matches!(
            Value::from_json(serde_json::json!([1, 2])),
            Value::Json(_)
        ));
    }

    #[test]
    fn test_date_instant_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let midnight = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
        assert_eq!(Value::from(date).as_instant(), Some(midnight));
    }
}
