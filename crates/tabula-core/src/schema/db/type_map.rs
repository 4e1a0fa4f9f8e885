use super::Type;
use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// Maps declared field types onto column storage types.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: IndexMap<stmt::Type, Type>,
}

impl TypeMap {
    /// A map with no entries. Every lookup fails until types are inserted.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds or replaces the storage type for `ty`.
    pub fn insert(&mut self, ty: stmt::Type, storage_ty: Type) -> Option<Type> {
        self.entries.insert(ty, storage_ty)
    }

    pub fn get(&self, ty: &stmt::Type) -> Option<Type> {
        self.entries.get(ty).copied()
    }

    /// Resolves the storage type for a field, failing with a schema error when
    /// the type is not mapped.
    pub fn resolve(&self, record: &str, field: &str, ty: &stmt::Type) -> Result<Type> {
        self.get(ty).ok_or_else(|| {
            Error::invalid_schema(format!(
                "cannot map field `{record}.{field}` of type {ty} to a column type"
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&stmt::Type, Type)> + '_ {
        self.entries.iter().map(|(ty, storage_ty)| (ty, *storage_ty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert(stmt::Type::I64, Type::Integer);
        map.insert(stmt::Type::F64, Type::Float);
        map.insert(stmt::Type::String, Type::Text);
        map.insert(stmt::Type::Bytes, Type::Blob);
        map.insert(stmt::Type::Timestamp, Type::Timestamp);
        map.insert(stmt::Type::Date, Type::Date);
        map.insert(stmt::Type::Bool, Type::Boolean);
        map
    }
}
