use super::{Expr, Join, JoinOp};

/// A left-deep join tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TableFactor {
    /// A table referenced by name
    Table(String),

    /// The accumulated tree joined with one more table
    Join(Box<Join>),
}

impl TableFactor {
    /// Joins `table` onto this tree.
    pub fn join(self, table: impl Into<String>, op: JoinOp, on: Expr) -> Self {
        TableFactor::Join(Box::new(Join {
            left: self,
            table: table.into(),
            op,
            on,
        }))
    }

    /// Returns `true` if `table` appears anywhere in the tree.
    pub fn contains(&self, table: &str) -> bool {
        match self {
            TableFactor::Table(name) => name == table,
            TableFactor::Join(join) => join.table == table || join.left.contains(table),
        }
    }

    /// Tables in the order they appear in the tree.
    pub fn tables(&self) -> Vec<&str> {
        match self {
            TableFactor::Table(name) => vec![name.as_str()],
            TableFactor::Join(join) => {
                let mut tables = join.left.tables();
                tables.push(join.table.as_str());
                tables
            }
        }
    }
}
