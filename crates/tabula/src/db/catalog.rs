use super::Config;

use indexmap::IndexMap;
use tabula_core::{
    schema::{app::RecordType, db::Table},
    stmt::Statement,
    Result,
};
use tracing::debug;

use std::{collections::HashSet, sync::Arc};

/// Table schemas created through a [`Db`](super::Db), keyed by table name.
#[derive(Debug, Default)]
pub(super) struct SchemaCatalog {
    tables: IndexMap<String, Arc<Table>>,
}

impl SchemaCatalog {
    pub(super) fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub(super) fn get(&self, name: &str) -> Option<Arc<Table>> {
        self.tables.get(name).cloned()
    }

    /// Returns the table for `ty`, deriving it and issuing its DDL through
    /// `exec` first if needed. Referenced tables are created before the tables
    /// that reference them, except where the references form a cycle.
    pub(super) fn get_or_create(
        &mut self,
        ty: &'static RecordType,
        config: &Config,
        exec: &mut dyn FnMut(Statement) -> Result<()>,
    ) -> Result<Arc<Table>> {
        if let Some(table) = self.get(&ty.table_name()) {
            return Ok(table);
        }

        let mut in_progress = HashSet::new();
        self.create(ty, config, exec, &mut in_progress)
    }

    fn create(
        &mut self,
        ty: &'static RecordType,
        config: &Config,
        exec: &mut dyn FnMut(Statement) -> Result<()>,
        in_progress: &mut HashSet<String>,
    ) -> Result<Arc<Table>> {
        let name = ty.table_name();

        if let Some(table) = self.get(&name) {
            return Ok(table);
        }

        let table = Table::from_record(ty, &config.type_map, config.key_collation)?;
        in_progress.insert(name.clone());

        for field in &ty.fields {
            let Some(target) = field.ty.as_record() else {
                continue;
            };

            if !in_progress.contains(&target.table_name()) {
                self.create(target, config, exec, in_progress)?;
            }
        }

        exec(table.create_table_stmt().into())?;
        debug!(table = %name, record = %ty.name, "created table");

        let table = Arc::new(table);
        self.tables.insert(name, table.clone());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{
        schema::app::{Field, RecordTypeRef},
        stmt,
    };

    use std::sync::OnceLock;

    fn parent() -> &'static RecordType {
        static PARENT: OnceLock<RecordType> = OnceLock::new();
        PARENT.get_or_init(|| {
            RecordType::builder("Parent")
                .field(Field::new("key_name", stmt::Type::String))
                .field(Field::new("child", RecordTypeRef::new(child)).nullable(true))
                .build()
                .unwrap()
        })
    }

    fn child() -> &'static RecordType {
        static CHILD: OnceLock<RecordType> = OnceLock::new();
        CHILD.get_or_init(|| {
            RecordType::builder("Child")
                .field(Field::new("key_name", stmt::Type::String))
                .field(Field::new("parent", RecordTypeRef::new(parent)).nullable(true))
                .build()
                .unwrap()
        })
    }

    fn created(catalog: &mut SchemaCatalog, ty: &'static RecordType) -> Vec<String> {
        let mut created = vec![];
        catalog
            .get_or_create(ty, &Config::default(), &mut |stmt: Statement| -> Result<()> {
                let Statement::CreateTable(create) = stmt else {
                    panic!("expected CREATE TABLE");
                };
                created.push(create.name);
                Ok(())
            })
            .unwrap();
        created
    }

    #[test]
    fn cyclic_types_terminate() {
        let mut catalog = SchemaCatalog::default();

        assert_eq!(created(&mut catalog, parent()), ["child", "parent"]);
        assert!(catalog.contains("parent"));
        assert!(catalog.contains("child"));

        // Already known, nothing issued
        assert!(created(&mut catalog, child()).is_empty());
        assert!(created(&mut catalog, parent()).is_empty());
    }

    #[test]
    fn unmapped_type_creates_nothing() {
        static BAD: OnceLock<RecordType> = OnceLock::new();
        let bad = BAD.get_or_init(|| {
            RecordType::builder("Bad")
                .field(Field::new("key_tags", stmt::Type::Custom("tags".into())))
                .build()
                .unwrap()
        });

        let mut catalog = SchemaCatalog::default();
        let err = catalog
            .get_or_create(bad, &Config::default(), &mut |_: Statement| -> Result<()> {
                panic!("no DDL expected")
            })
            .unwrap_err();

        assert!(err.is_invalid_schema());
        assert!(!catalog.contains("bad"));
    }
}
