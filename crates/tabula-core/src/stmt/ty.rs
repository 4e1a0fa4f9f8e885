use std::fmt;

/// Declared type of a scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I64,
    F64,
    String,
    Bytes,
    Timestamp,
    Date,

    /// A type with no built-in mapping. It must be added to the type map before
    /// a table using it can be created.
    Custom(String),
}

impl Type {
    pub fn is_custom(&self) -> bool {
        matches!(self, Type::Custom(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("Bool"),
            Type::I64 => f.write_str("I64"),
            Type::F64 => f.write_str("F64"),
            Type::String => f.write_str("String"),
            Type::Bytes => f.write_str("Bytes"),
            Type::Timestamp => f.write_str("Timestamp"),
            Type::Date => f.write_str("Date"),
            Type::Custom(name) => f.write_str(name),
        }
    }
}
