use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,

    /// Null-safe equality
    Is,

    /// Null-safe inequality
    IsNot,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Eq => "=".fmt(f),
            BinaryOp::Ne => "!=".fmt(f),
            BinaryOp::Gt => ">".fmt(f),
            BinaryOp::Ge => ">=".fmt(f),
            BinaryOp::Lt => "<".fmt(f),
            BinaryOp::Le => "<=".fmt(f),
            BinaryOp::Is => "IS".fmt(f),
            BinaryOp::IsNot => "IS NOT".fmt(f),
        }
    }
}
