use super::{Statement, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column names, matched positionally with `values`
    pub columns: Vec<String>,

    pub values: Vec<Value>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
