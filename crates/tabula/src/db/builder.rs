use super::{Config, Db, SchemaCatalog};
use crate::{driver::Connect, Record, Result};

use tabula_core::{
    driver::Driver,
    schema::{
        app::RecordType,
        db::{self, Collation, TypeMap},
    },
    stmt,
};

use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct Builder {
    /// Record types whose tables are created when connecting
    records: Vec<&'static RecordType>,

    config: Config,
}

impl Builder {
    pub fn register<T: Record>(&mut self) -> &mut Self {
        self.records.push(T::schema());
        self
    }

    /// Replaces the whole scalar type mapping.
    pub fn type_map(&mut self, type_map: TypeMap) -> &mut Self {
        self.config.type_map = type_map;
        self
    }

    /// Maps a single scalar type, replacing any previous entry.
    pub fn map_type(&mut self, ty: stmt::Type, storage_ty: db::Type) -> &mut Self {
        self.config.type_map.insert(ty, storage_ty);
        self
    }

    pub fn key_collation(&mut self, collation: Option<Collation>) -> &mut Self {
        self.config.key_collation = collation;
        self
    }

    /// Connects using a URL such as `sqlite::memory:`.
    pub fn connect_url(&mut self, url: &str) -> Result<Db> {
        self.connect(Connect::new(url)?)
    }

    pub fn connect(&mut self, driver: impl Driver) -> Result<Db> {
        let connection = driver.connect()?;

        let db = Db {
            config: self.config.clone(),
            catalog: Mutex::new(SchemaCatalog::default()),
            connection: Mutex::new(connection),
        };

        for &ty in &self.records {
            db.require_table(ty)?;
        }

        Ok(db)
    }
}
