use std::fmt;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    Float,
    Text,
    Blob,
    Timestamp,
    Date,
    Boolean,
}

impl Type {
    /// The type name used in `CREATE TABLE` statements.
    pub fn sql_name(self) -> &'static str {
        match self {
            Type::Integer => "INTEGER",
            Type::Float => "REAL",
            Type::Text => "TEXT",
            Type::Blob => "BLOB",
            Type::Timestamp => "TIMESTAMP",
            Type::Date => "DATE",
            Type::Boolean => "BOOLEAN",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, Type::Text)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
