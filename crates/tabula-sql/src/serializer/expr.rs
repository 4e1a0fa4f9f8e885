use super::{Delimited, Ident, Params, Period, ToSql};

use tabula_core::stmt::{self, BinaryOp};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => match (&*expr.rhs, null_test(expr.op)) {
                (Value(stmt::Value::Null), Some(test)) => {
                    fmt!(f, &*expr.lhs test);
                }
                _ => {
                    let op = expr.op.to_string();
                    let rhs = &*expr.rhs;
                    fmt!(f, &*expr.lhs " " op.as_str() " " rhs);
                }
            },
            Column(expr) => {
                fmt!(f, expr);
            }
            InList(expr) => {
                let op = if expr.negate { " NOT IN " } else { " IN " };
                fmt!(f, &*expr.expr op "(" super::Comma(&expr.list) ")");
            }
            Or(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " OR ") ")");
            }
            Value(value) => {
                fmt!(f, value);
            }
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Period([Ident(&self.table), Ident(&self.column)]));
    }
}

/// Comparisons against NULL must use `IS [NOT] NULL` to match anything.
fn null_test(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Eq | BinaryOp::Is => Some(" IS NULL"),
        BinaryOp::Ne | BinaryOp::IsNot => Some(" IS NOT NULL"),
        _ => None,
    }
}
