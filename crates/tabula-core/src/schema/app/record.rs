use super::{Field, FieldTy};
use crate::{schema::Name, stmt, Error, Result};

use std::{collections::HashSet, fmt};

/// Describes a record type: its name and its ordered fields.
///
/// Descriptors are built once per type, usually by `#[derive(Record)]`, and
/// live for the rest of the program.
#[derive(Debug)]
pub struct RecordType {
    /// Name of the Rust type
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

/// A lazily resolved reference to a record type.
///
/// Holding a function instead of the descriptor itself lets mutually
/// referencing types describe each other.
#[derive(Clone, Copy)]
pub struct RecordTypeRef(fn() -> &'static RecordType);

#[derive(Debug)]
pub struct Builder {
    name: String,
    fields: Vec<Field>,
}

impl RecordType {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Table name derived from the type name.
    pub fn table_name(&self) -> String {
        Name::new(&self.name).snake_case()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn key_fields(&self) -> impl Iterator<Item = (usize, &Field)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_key())
    }

    pub fn has_key_fields(&self) -> bool {
        self.key_fields().next().is_some()
    }

    /// Checks that no field uses the reserved `id` column and that no two
    /// fields map to the same column.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for field in &self.fields {
            if field.name == "id" {
                return Err(Error::invalid_schema(format!(
                    "`{}` declares a field named `id`, which is reserved for the primary key",
                    self.name
                )));
            }

            if !seen.insert(field.column_name()) {
                return Err(Error::invalid_schema(format!(
                    "`{}` declares column `{}` more than once",
                    self.name,
                    field.column_name()
                )));
            }
        }

        Ok(())
    }

    /// Resolves a column reference to the column name and the type it is read
    /// as.
    ///
    /// A field name resolves to the field's column, `<field>_id` for nested
    /// records. Any other name ending in `id` is taken as an integer key
    /// column.
    pub fn resolve_column(&self, column: &str) -> Option<(String, stmt::Type)> {
        if let Some(field) = self.field(column) {
            return Some((field.column_name(), field.ty.column_ty()));
        }

        if column.ends_with("id") {
            return Some((column.to_string(), stmt::Type::I64));
        }

        None
    }

    /// Returns the first field of this type whose value is a `target` record.
    pub fn field_referencing(&self, target: &RecordType) -> Option<&Field> {
        self.fields.iter().find(|field| {
            field
                .ty
                .as_record()
                .is_some_and(|record| record.is(target))
        })
    }

    /// Two descriptors describe the same record type when they map to the same
    /// table.
    pub fn is(&self, other: &RecordType) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl RecordTypeRef {
    pub const fn new(f: fn() -> &'static RecordType) -> Self {
        Self(f)
    }

    pub fn get(&self) -> &'static RecordType {
        (self.0)()
    }
}

impl fmt::Debug for RecordTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printing the target's fields could recurse forever on cyclic types.
        write!(f, "RecordTypeRef({})", self.get().name)
    }
}

impl Builder {
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn scalar(self, name: &str, ty: crate::stmt::Type) -> Self {
        self.field(Field::new(name, FieldTy::Scalar(ty)))
    }

    /// Validates and finishes the descriptor.
    pub fn build(self) -> Result<RecordType> {
        let record = self.finish();
        record.validate()?;
        Ok(record)
    }

    /// Finishes the descriptor without validating it. Validation happens when
    /// a table is derived from it.
    pub fn finish(self) -> RecordType {
        RecordType {
            name: self.name,
            fields: self.fields,
        }
    }
}
