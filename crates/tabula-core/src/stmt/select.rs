use super::{Expr, ExprColumn, TableWithJoins, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Removes duplicate result rows
    pub distinct: bool,

    /// Projected columns, in output order
    pub returning: Vec<SelectItem>,

    /// The FROM clause, combined by cross product
    pub source: Vec<TableWithJoins>,

    /// WHERE clause
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub expr: ExprColumn,

    /// Output label. Without one, the column name is used.
    pub alias: Option<String>,

    /// Type used to decode the column's values
    pub ty: Type,
}

impl Select {
    pub fn new(source: Vec<TableWithJoins>) -> Self {
        Self {
            distinct: false,
            returning: vec![],
            source,
            filter: None,
        }
    }

    /// Output column names, in projection order.
    pub fn output_names(&self) -> Vec<String> {
        self.returning
            .iter()
            .map(|item| item.output_name().to_string())
            .collect()
    }
}

impl SelectItem {
    pub fn new(expr: ExprColumn, alias: Option<String>, ty: Type) -> Self {
        Self { expr, alias, ty }
    }

    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.expr.column)
    }
}
