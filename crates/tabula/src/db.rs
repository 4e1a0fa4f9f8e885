mod builder;
pub use builder::Builder;

mod catalog;
use catalog::SchemaCatalog;

mod config;
pub use config::Config;

mod resolve;

mod transaction;
use transaction::UnitOfWork;

mod write;

use crate::QueryBuilder;

use tabula_core::{
    driver::{Connection, Response, Rows},
    err,
    schema::{app::RecordType, db::Table},
    stmt::{Select, Statement},
    Result,
};

use std::sync::{Arc, Mutex, MutexGuard};

/// A handle to a database.
///
/// Owns a single connection, the table schemas derived so far and the
/// configuration they were derived with. Every statement runs in its own unit
/// of work.
#[derive(Debug)]
pub struct Db {
    config: Config,

    /// Must be locked before `connection` when both are held.
    catalog: Mutex<SchemaCatalog>,

    connection: Mutex<Box<dyn Connection>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes a single statement, committing on success and rolling back on
    /// failure.
    pub fn exec(&self, stmt: impl Into<Statement>) -> Result<Response> {
        let mut connection = self.connection()?;

        let mut unit = UnitOfWork::begin(&mut **connection)?;
        let response = unit.exec(stmt.into())?;
        unit.commit()?;

        Ok(response)
    }

    /// Executes a select statement and returns its rows.
    pub fn query(&self, select: &Select) -> Result<Rows> {
        self.exec(select.clone())?.into_rows()
    }

    /// Compiles `query` and executes it.
    pub fn all(&self, query: &QueryBuilder) -> Result<Rows> {
        self.query(&query.build()?)
    }

    /// Returns the table for `ty`, creating it and the tables of any record
    /// types it references if they do not exist yet.
    pub fn require_table(&self, ty: &'static RecordType) -> Result<Arc<Table>> {
        let mut catalog = self.catalog()?;

        catalog.get_or_create(ty, &self.config, &mut |stmt: Statement| -> Result<()> {
            self.exec(stmt)?;
            Ok(())
        })
    }

    /// Returns `true` if the table for `ty` has been created through this
    /// handle.
    pub fn has_table(&self, ty: &RecordType) -> Result<bool> {
        Ok(self.catalog()?.contains(&ty.table_name()))
    }

    /// Derives the table name of `ty`. Never creates anything.
    pub fn table_name(&self, ty: &RecordType) -> String {
        ty.table_name()
    }

    fn catalog(&self) -> Result<MutexGuard<'_, SchemaCatalog>> {
        self.catalog
            .lock()
            .map_err(|_| err!("schema catalog lock poisoned"))
    }

    fn connection(&self) -> Result<MutexGuard<'_, Box<dyn Connection>>> {
        self.connection
            .lock()
            .map_err(|_| err!("connection lock poisoned"))
    }
}
