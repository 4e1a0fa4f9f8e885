use super::Value;
use crate::{Error, Result};

use chrono::{NaiveDate, NaiveDateTime};

/// Text format for timestamps in storage.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Text format for dates in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::Timestamp(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "NaiveDate")),
        }
    }
}

impl Value {
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Parses a timestamp stored as text.
    pub fn parse_timestamp(src: &str) -> Result<Value> {
        Ok(Value::Timestamp(NaiveDateTime::parse_from_str(
            src,
            TIMESTAMP_FORMAT,
        )?))
    }

    /// Parses a date stored as text.
    pub fn parse_date(src: &str) -> Result<Value> {
        Ok(Value::Date(NaiveDate::parse_from_str(src, DATE_FORMAT)?))
    }

    /// Renders a timestamp or date in its storage text format.
    pub fn to_storage_text(&self) -> Option<String> {
        match self {
            Value::Timestamp(v) => Some(v.format(TIMESTAMP_FORMAT).to_string()),
            Value::Date(v) => Some(v.format(DATE_FORMAT).to_string()),
            _ => None,
        }
    }
}
