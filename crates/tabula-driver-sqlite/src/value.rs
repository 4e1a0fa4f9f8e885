use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tabula_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Tabula value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Tabula value, decoding it as
    /// `ty`.
    pub fn from_sql(row: &Row, index: usize, ty: &stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                stmt::Type::Bool => CoreValue::Bool(value != 0),
                stmt::Type::F64 => CoreValue::F64(value as f64),
                stmt::Type::I64 | stmt::Type::Custom(_) => CoreValue::I64(value),
                _ => return Err(Error::type_conversion(CoreValue::I64(value), ty_name(ty))),
            },
            SqlValue::Real(value) => match ty {
                stmt::Type::F64 | stmt::Type::Custom(_) => CoreValue::F64(value),
                _ => return Err(Error::type_conversion(CoreValue::F64(value), ty_name(ty))),
            },
            SqlValue::Text(value) => match ty {
                stmt::Type::String | stmt::Type::Custom(_) => CoreValue::String(value),
                stmt::Type::Timestamp => CoreValue::parse_timestamp(&value)?,
                stmt::Type::Date => CoreValue::parse_date(&value)?,
                _ => return Err(Error::type_conversion(CoreValue::String(value), ty_name(ty))),
            },
            SqlValue::Blob(value) => match ty {
                stmt::Type::Bytes | stmt::Type::Custom(_) => CoreValue::Bytes(value),
                _ => return Err(Error::type_conversion(CoreValue::Bytes(value), ty_name(ty))),
            },
        };

        Ok(Value(core_value))
    }
}

fn ty_name(ty: &stmt::Type) -> &'static str {
    match ty {
        stmt::Type::Bool => "Bool",
        stmt::Type::I64 => "I64",
        stmt::Type::F64 => "F64",
        stmt::Type::String => "String",
        stmt::Type::Bytes => "Bytes",
        stmt::Type::Timestamp => "Timestamp",
        stmt::Type::Date => "Date",
        stmt::Type::Custom(_) => "Custom",
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Timestamp(_) | Value::Date(_) => match self.0.to_storage_text() {
                Some(text) => Ok(ToSqlOutput::Owned(SqlValue::Text(text))),
                None => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            },
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::List(_) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                Error::type_conversion(self.0.clone(), "SQL parameter"),
            ))),
        }
    }
}
