use super::Db;
use crate::{FieldValue, Operator, QueryBuilder, Record};

use tabula_core::{
    err,
    stmt::{RowId, Value},
    Error, Result,
};
use tracing::{debug, warn};

impl Db {
    /// Finds the row `record` is stored in by matching its key fields.
    ///
    /// A cached identity is returned without querying. A hit is cached on the
    /// record; a miss is not.
    pub fn resolve(&self, record: &dyn Record) -> Result<Option<RowId>> {
        if let Some(row_id) = record.identity().get() {
            return Ok(Some(row_id));
        }

        let ty = record.record_type();

        if !ty.has_key_fields() {
            return Err(Error::no_key_fields(&ty.name));
        }

        if !self.has_table(ty)? {
            return Ok(None);
        }

        let values = record.fields();
        let mut query = QueryBuilder::new();
        query.add_column(ty, "id", None)?;

        for (index, field) in ty.key_fields() {
            let value = match values.get(index) {
                Some(FieldValue::Value(value)) => value.clone(),
                Some(FieldValue::Record(Some(nested))) => match self.resolve(*nested)? {
                    Some(row_id) => Value::from(row_id),
                    // An unknown nested key cannot match any row
                    None => return Ok(None),
                },
                Some(FieldValue::Record(None)) => Value::Null,
                None => {
                    return Err(err!(
                        "`{}` returned no value for field `{}`",
                        ty.name,
                        field.name
                    ))
                }
            };

            query.add_clause(ty, &field.name, value, Operator::Eq)?;
        }

        let rows = self.all(&query)?;

        if rows.len() > 1 {
            warn!(
                record = %ty.name,
                matches = rows.len(),
                "key fields match more than one row; using the first"
            );
        }

        let Some(row) = rows.first() else {
            debug!(record = %ty.name, "record not found");
            return Ok(None);
        };

        let row_id = row[0].clone().to_row_id()?;
        record.identity().set(row_id);

        debug!(record = %ty.name, id = row_id.get(), "resolved record");
        Ok(Some(row_id))
    }
}
