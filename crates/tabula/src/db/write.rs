use super::Db;
use crate::{FieldValue, Record};

use tabula_core::{
    err,
    schema::app::RecordType,
    stmt::{Assignment, Delete, Expr, Insert, RowId, Update, Value},
    Error, Result,
};
use tracing::debug;

impl Db {
    /// Inserts `record` unless it is already stored.
    ///
    /// Nested records are inserted first. Returns `false` when nothing was
    /// inserted because the record already has an identity or its key fields
    /// match an existing row.
    pub fn insert(&self, record: &dyn Record) -> Result<bool> {
        self.insert_with(record, true)
    }

    /// Same as [`Db::insert`], but with `check_existing = false` no lookup by
    /// key fields is made, for this record or its nested records.
    pub fn insert_with(&self, record: &dyn Record, check_existing: bool) -> Result<bool> {
        if record.identity().is_set() {
            return Ok(false);
        }

        let ty = record.record_type();
        let table = self.require_table(ty)?;

        if check_existing && self.resolve(record)?.is_some() {
            return Ok(false);
        }

        let (columns, values) = self.row_values(record, check_existing)?;

        let row_id = self
            .exec(Insert {
                table: table.name.clone(),
                columns,
                values,
            })?
            .into_inserted()?;

        record.identity().set(row_id);

        debug!(record = %ty.name, id = row_id.get(), "inserted record");
        Ok(true)
    }

    /// Overwrites every column of the row `record` is stored in.
    ///
    /// Nested records without an identity are inserted as new rows.
    pub fn update(&self, record: &dyn Record) -> Result<bool> {
        let ty = record.record_type();
        let row_id = self.require_row(record)?;

        let (columns, values) = self.row_values(record, false)?;

        if columns.is_empty() {
            return Ok(true);
        }

        let assignments = columns
            .into_iter()
            .zip(values)
            .map(|(column, value)| Assignment { column, value })
            .collect();

        let count = self
            .exec(Update {
                table: ty.table_name(),
                assignments,
                filter: id_filter(ty, row_id),
            })?
            .into_count()?;

        if count == 0 {
            return Err(not_found(ty, Some(row_id)));
        }

        debug!(record = %ty.name, id = row_id.get(), "updated record");
        Ok(true)
    }

    /// Deletes the row `record` is stored in and clears its identity.
    ///
    /// Rows of nested records are left in place.
    pub fn delete(&self, record: &dyn Record) -> Result<bool> {
        let ty = record.record_type();
        let row_id = self.require_row(record)?;

        let count = self
            .exec(Delete {
                table: ty.table_name(),
                filter: id_filter(ty, row_id),
            })?
            .into_count()?;

        if count == 0 {
            return Err(not_found(ty, Some(row_id)));
        }

        record.identity().clear();

        debug!(record = %ty.name, id = row_id.get(), "deleted record");
        Ok(true)
    }

    /// Returns `true` if `record` is stored.
    pub fn exists(&self, record: &dyn Record) -> Result<bool> {
        Ok(self.resolve(record)?.is_some())
    }

    fn require_row(&self, record: &dyn Record) -> Result<RowId> {
        match self.resolve(record)? {
            Some(row_id) => Ok(row_id),
            None => Err(not_found(record.record_type(), None)),
        }
    }

    /// Column names and values of `record`'s row, inserting nested records as
    /// needed.
    fn row_values(
        &self,
        record: &dyn Record,
        check_existing: bool,
    ) -> Result<(Vec<String>, Vec<Value>)> {
        let ty = record.record_type();
        let values = record.fields();

        if values.len() != ty.fields.len() {
            return Err(err!(
                "`{}` returned {} field values, expected {}",
                ty.name,
                values.len(),
                ty.fields.len()
            ));
        }

        let mut columns = Vec::with_capacity(values.len());
        let mut row = Vec::with_capacity(values.len());

        for (field, value) in ty.fields.iter().zip(values) {
            let value = match value {
                FieldValue::Value(value) => value,
                FieldValue::Record(Some(nested)) => {
                    self.insert_with(nested, check_existing)?;

                    match nested.identity().get() {
                        Some(row_id) => row_id.into(),
                        None => {
                            return Err(err!(
                                "nested `{}` in `{}.{}` has no identity after insert",
                                nested.record_type().name,
                                ty.name,
                                field.name
                            ))
                        }
                    }
                }
                FieldValue::Record(None) => Value::Null,
            };

            columns.push(field.column_name());
            row.push(value);
        }

        Ok((columns, row))
    }
}

fn id_filter(ty: &RecordType, row_id: RowId) -> Expr {
    Expr::eq(Expr::column(ty.table_name(), "id"), Value::from(row_id))
}

fn not_found(ty: &RecordType, row_id: Option<RowId>) -> Error {
    match row_id {
        Some(row_id) => Error::record_not_found(format!("record={}; id={row_id}", ty.name)),
        None => Error::record_not_found(format!("record={}", ty.name)),
    }
}
