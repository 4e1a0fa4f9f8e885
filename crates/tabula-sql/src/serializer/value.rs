use super::{Comma, Formatter, Params, ToSql};

use tabula_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Value::List(items) => {
                fmt!(f, "(" Comma(items) ")");
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}
