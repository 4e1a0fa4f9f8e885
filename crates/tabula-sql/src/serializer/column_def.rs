use super::{Ident, Params, ToSql};

use tabula_core::schema::db;

impl ToSql for &db::Column {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(&self.name) " " self.storage_ty.sql_name());

        if self.primary_key {
            // An INTEGER PRIMARY KEY column aliases the rowid
            fmt!(f, " PRIMARY KEY");
            return;
        }

        if !self.nullable {
            fmt!(f, " NOT NULL");
        }

        if let Some(collation) = self.collation {
            fmt!(f, " COLLATE " collation.sql_name());
        }

        if let Some(fk) = &self.references {
            fmt!(f, " REFERENCES " Ident(&fk.table) " (" Ident(&fk.column) ")");
        }
    }
}
