use super::{Expr, TableFactor};

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The tree built so far
    pub left: TableFactor,

    /// Table joined onto the tree
    pub table: String,

    pub op: JoinOp,

    /// Join constraint
    pub on: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOp {
    Inner,
    LeftOuter,
}

impl JoinOp {
    pub fn from_outer(outer: bool) -> Self {
        if outer {
            JoinOp::LeftOuter
        } else {
            JoinOp::Inner
        }
    }
}
