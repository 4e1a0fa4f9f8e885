use super::Operator;

use tabula_core::{
    schema::app::RecordType,
    stmt::{Expr, Value},
};

/// A single predicate on a column of a record type's table.
#[derive(Debug, Clone)]
pub struct Clause {
    pub(super) ty: &'static RecordType,
    pub(super) column: String,
    pub(super) value: Value,
    pub(super) op: Operator,
}

impl Clause {
    pub fn record_type(&self) -> &'static RecordType {
        self.ty
    }

    /// The column the clause compares, after mapping nested fields to their
    /// foreign-key column.
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn operator(&self) -> Operator {
        self.op
    }

    pub(super) fn to_expr(&self) -> Expr {
        let column = Expr::column(self.ty.table_name(), &self.column);

        match self.op.binary_op() {
            Some(op) => Expr::binary_op(column, op, self.value.clone()),
            None => {
                let list = match &self.value {
                    Value::List(items) => items.clone(),
                    value => vec![value.clone()],
                };

                Expr::in_list(column, list, self.op == Operator::NotIn)
            }
        }
    }
}
