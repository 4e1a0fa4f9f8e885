use super::Type;
use crate::stmt;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The column type, from Tabula's point of view.
    pub ty: stmt::Type,

    /// The database storage type of the column.
    pub storage_ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// Collation applied to text comparisons on this column
    pub collation: Option<Collation>,

    /// Set for foreign-key columns
    pub references: Option<ForeignKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

/// Text collations understood by the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    Binary,
    NoCase,
    RTrim,
}

impl Column {
    /// The synthetic integer primary key present on every table.
    pub fn primary_key() -> Self {
        Self {
            name: "id".to_string(),
            ty: stmt::Type::I64,
            storage_ty: Type::Integer,
            nullable: false,
            primary_key: true,
            collation: None,
            references: None,
        }
    }

    /// A foreign-key column pointing at the primary key of `table`.
    pub fn foreign_key(name: impl Into<String>, table: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty: stmt::Type::I64,
            storage_ty: Type::Integer,
            nullable,
            primary_key: false,
            collation: None,
            references: Some(ForeignKey {
                table: table.into(),
                column: "id".to_string(),
            }),
        }
    }
}

impl Collation {
    pub fn sql_name(self) -> &'static str {
        match self {
            Collation::Binary => "BINARY",
            Collation::NoCase => "NOCASE",
            Collation::RTrim => "RTRIM",
        }
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
