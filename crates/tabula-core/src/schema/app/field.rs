use super::{RecordType, RecordTypeRef};
use crate::stmt;

/// A field of a record type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, also used as the column name for scalar fields
    pub name: String,

    /// Declared value type
    pub ty: FieldTy,

    /// True when the field is explicitly marked as part of the business key
    pub key: bool,

    /// True when the field may hold no value
    pub nullable: bool,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    /// A scalar value stored in its own column
    Scalar(stmt::Type),

    /// Another record, stored as a foreign key to its table
    Record(RecordTypeRef),
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            key: false,
            nullable: false,
        }
    }

    /// Marks the field as a key field.
    pub fn key(mut self, key: bool) -> Self {
        self.key = key;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// A field is part of the business key when its name starts with `key`
    /// or when it is explicitly marked.
    pub fn is_key(&self) -> bool {
        self.key || self.name.starts_with("key")
    }

    /// Name of the column storing this field.
    pub fn column_name(&self) -> String {
        match &self.ty {
            FieldTy::Scalar(_) => self.name.clone(),
            FieldTy::Record(_) => format!("{}_id", self.name),
        }
    }

    pub fn is_record(&self) -> bool {
        self.ty.is_record()
    }
}

impl FieldTy {
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub fn as_record(&self) -> Option<&'static RecordType> {
        match self {
            Self::Record(target) => Some(target.get()),
            Self::Scalar(_) => None,
        }
    }

    /// The type of the value stored in the field's column.
    pub fn column_ty(&self) -> stmt::Type {
        match self {
            Self::Scalar(ty) => ty.clone(),
            Self::Record(_) => stmt::Type::I64,
        }
    }
}

impl From<stmt::Type> for FieldTy {
    fn from(value: stmt::Type) -> Self {
        Self::Scalar(value)
    }
}

impl From<RecordTypeRef> for FieldTy {
    fn from(value: RecordTypeRef) -> Self {
        Self::Record(value)
    }
}
