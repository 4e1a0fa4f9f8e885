use super::{BinaryOp, ExprAnd, ExprBinaryOp, ExprColumn, ExprInList, ExprOr, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// References a column of a table in the statement
    Column(ExprColumn),

    /// `expr [NOT] IN (list)`
    InList(ExprInList),

    /// OR a set of expressions
    Or(ExprOr),

    /// A constant value, bound as a parameter
    Value(Value),
}

impl Expr {
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        ExprColumn::new(table, column).into()
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn in_list(expr: impl Into<Expr>, list: Vec<Value>, negate: bool) -> Self {
        ExprInList {
            expr: Box::new(expr.into()),
            list,
            negate,
        }
        .into()
    }

    /// Combines expressions with AND. A single operand is returned unwrapped.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Self {
        if operands.len() == 1 {
            return operands.remove(0);
        }

        ExprAnd { operands }.into()
    }

    /// Combines expressions with OR. A single operand is returned unwrapped.
    pub fn or_from_vec(mut operands: Vec<Expr>) -> Self {
        if operands.len() == 1 {
            return operands.remove(0);
        }

        ExprOr { operands }.into()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
