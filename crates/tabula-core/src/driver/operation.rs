use crate::stmt::Statement;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a statement
    Statement(Statement),

    /// Transaction control
    Transaction(Transaction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Begin,
    Commit,
    Rollback,
}

impl Operation {
    pub fn is_transaction(&self) -> bool {
        matches!(self, Operation::Transaction(_))
    }
}

impl From<Statement> for Operation {
    fn from(value: Statement) -> Self {
        Operation::Statement(value)
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Self {
        Operation::Transaction(value)
    }
}
