use super::Statement;
use crate::schema::db::Column;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<Column>,

    /// Emit `IF NOT EXISTS`
    pub if_not_exists: bool,
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}
