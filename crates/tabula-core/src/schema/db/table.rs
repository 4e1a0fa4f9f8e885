use super::{Collation, Column, TypeMap};
use crate::{
    schema::app::{FieldTy, RecordType},
    stmt, Result,
};

/// The table a record type is stored in.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table name, derived from the record type name
    pub name: String,

    /// Name of the record type this table stores
    pub record: String,

    /// Columns in order: `id` first, then one per field.
    pub columns: Vec<Column>,
}

impl Table {
    /// Derives the table for `record`.
    ///
    /// Nested record fields become foreign-key columns named `<field>_id`. Text
    /// columns backing key fields get `key_collation`.
    pub fn from_record(
        record: &RecordType,
        types: &TypeMap,
        key_collation: Option<Collation>,
    ) -> Result<Table> {
        record.validate()?;

        let mut columns = vec![Column::primary_key()];

        for field in &record.fields {
            let column = match &field.ty {
                FieldTy::Record(target) => Column::foreign_key(
                    field.column_name(),
                    target.get().table_name(),
                    field.nullable,
                ),
                FieldTy::Scalar(ty) => {
                    let storage_ty = types.resolve(&record.name, &field.name, ty)?;

                    Column {
                        name: field.name.clone(),
                        ty: ty.clone(),
                        storage_ty,
                        nullable: field.nullable,
                        primary_key: false,
                        collation: if field.is_key() && storage_ty.is_text() {
                            key_collation
                        } else {
                            None
                        },
                        references: None,
                    }
                }
            };

            columns.push(column);
        }

        Ok(Table {
            name: record.table_name(),
            record: record.name.clone(),
            columns,
        })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Tables referenced through foreign-key columns, in column order.
    pub fn referenced_tables(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .filter_map(|column| column.references.as_ref())
            .map(|fk| fk.table.as_str())
    }

    pub fn create_table_stmt(&self) -> stmt::CreateTable {
        stmt::CreateTable {
            name: self.name.clone(),
            columns: self.columns.clone(),
            if_not_exists: true,
        }
    }
}
