use tabula_core::schema::db::{Collation, TypeMap};

/// Settings that shape the derived table schemas.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maps scalar field types to column types
    pub type_map: TypeMap,

    /// Collation of text columns backing key fields
    pub key_collation: Option<Collation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            type_map: TypeMap::default(),
            key_collation: Some(Collation::NoCase),
        }
    }
}
