use super::TableFactor;

/// One entry of a FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub struct TableWithJoins {
    pub relation: TableFactor,
}

impl TableWithJoins {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            relation: TableFactor::Table(name.into()),
        }
    }
}

impl From<TableFactor> for TableWithJoins {
    fn from(relation: TableFactor) -> Self {
        Self { relation }
    }
}
