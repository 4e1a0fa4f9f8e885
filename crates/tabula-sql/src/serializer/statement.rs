use super::{Comma, Ident, Params, ToSql};

use tabula_core::stmt::{self, JoinOp};

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(
            f, "CREATE TABLE " if_not_exists Ident(&self.name) " (" Comma(&self.columns) ")"
        );
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = &self.filter;
        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "INSERT INTO " Ident(&self.table));

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        fmt!(f, " (" columns ") VALUES (" Comma(&self.values) ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let filter = &self.filter;
        fmt!(
            f, "UPDATE " Ident(&self.table) " SET " Comma(&self.assignments) " WHERE " filter
        );
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = &self.value;
        fmt!(f, Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };

        fmt!(f, "SELECT " distinct Comma(&self.returning) " FROM " Comma(&self.source));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.expr);

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }
    }
}

impl ToSql for &stmt::TableWithJoins {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.relation);
    }
}

impl ToSql for &stmt::TableFactor {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::TableFactor::Table(name) => fmt!(f, Ident(name)),
            stmt::TableFactor::Join(join) => {
                let op = match join.op {
                    JoinOp::Inner => " JOIN ",
                    JoinOp::LeftOuter => " LEFT OUTER JOIN ",
                };

                let on = &join.on;
                fmt!(f, &join.left op Ident(&join.table) " ON " on);
            }
        }
    }
}
