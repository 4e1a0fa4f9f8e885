mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use tabula_core::{
    driver::{Driver, Operation, Response, Rows},
    stmt::{self, RowId, Statement},
    Error, Result,
};
use tabula_sql as sql;
use tracing::{debug, trace};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    ///
    /// Accepts `sqlite::memory:` and `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn url(&self) -> String {
        match self {
            Sqlite::InMemory => "sqlite::memory:".to_string(),
            Sqlite::File(path) => format!("sqlite:{}", path.display()),
        }
    }
}

impl Driver for Sqlite {
    fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn exec_statement(&mut self, stmt: Statement) -> Result<Response> {
        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite().serialize(&stmt, &mut params);

        debug!(sql = %sql_str, "executing SQL");
        trace!(params = ?params, "bound parameters");

        let mut prepared = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let params = rusqlite::params_from_iter(params.iter());

        match &stmt {
            Statement::Select(select) => {
                let tys: Vec<_> = select.returning.iter().map(|item| &item.ty).collect();
                let mut ret = Rows::new(select.output_names());

                let mut rows = prepared
                    .query(params)
                    .map_err(Error::driver_operation_failed)?;

                while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
                    let mut items = Vec::with_capacity(tys.len());

                    for (index, ty) in tys.iter().enumerate() {
                        items.push(Value::from_sql(row, index, ty)?.into_inner());
                    }

                    ret.push(items);
                }

                Ok(Response::Rows(ret))
            }
            Statement::Insert(_) => {
                prepared
                    .execute(params)
                    .map_err(Error::driver_operation_failed)?;

                Ok(Response::Inserted(RowId(
                    self.connection.last_insert_rowid(),
                )))
            }
            Statement::CreateTable(_) | Statement::Update(_) | Statement::Delete(_) => {
                let count = prepared
                    .execute(params)
                    .map_err(Error::driver_operation_failed)?;

                Ok(Response::count(count as u64))
            }
        }
    }
}

impl tabula_core::driver::Connection for Connection {
    fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Statement(stmt) => self.exec_statement(stmt),
            Operation::Transaction(op) => {
                let sql_str = sql::Serializer::sqlite().serialize_transaction(&op);
                debug!(sql = %sql_str, "executing SQL");

                self.connection
                    .execute_batch(&sql_str)
                    .map_err(Error::driver_operation_failed)?;

                Ok(Response::count(0))
            }
        }
    }
}
