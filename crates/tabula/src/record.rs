mod field_type;
pub use field_type::FieldType;

mod identity;
pub use identity::Identity;

use tabula_core::{schema::app::RecordType, stmt::Value};

/// A struct that maps onto a table.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record {
    /// Describes the record type.
    fn schema() -> &'static RecordType
    where
        Self: Sized;

    /// Same as [`Record::schema`], callable on trait objects.
    fn record_type(&self) -> &'static RecordType;

    /// Cached identity of the stored row, if known.
    fn identity(&self) -> &Identity;

    /// Current field values, one per descriptor field, in descriptor order.
    fn fields(&self) -> Vec<FieldValue<'_>>;
}

/// The value of a single record field.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// A scalar value
    Value(Value),

    /// A nested record. `None` when an optional nested record is absent.
    Record(Option<&'a dyn Record>),
}

impl FieldValue<'_> {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            FieldValue::Value(value) => Some(value),
            FieldValue::Record(_) => None,
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldValue::Record(Some(record)) => f
                .debug_tuple("Record")
                .field(&record.record_type().name)
                .field(record.identity())
                .finish(),
            FieldValue::Record(None) => f.write_str("Record(None)"),
        }
    }
}
