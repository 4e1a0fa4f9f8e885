#![allow(dead_code)]

pub mod models;

use tabula::{
    driver::{Connection, Driver, Operation, Response},
    stmt::Statement,
    Db, Result,
};
use tabula_driver_sqlite::Sqlite;

use std::sync::{Arc, Mutex, Once};

/// Installs a `RUST_LOG`-filtered subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory database.
pub fn db() -> Db {
    init_tracing();
    Db::builder().connect(Sqlite::in_memory()).unwrap()
}

/// A fresh in-memory database whose executed statements can be inspected.
pub fn logged_db() -> (Db, OpsLog) {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let log = driver.ops_log_handle();

    (Db::builder().connect(driver).unwrap(), log)
}

#[derive(Debug, Clone, Default)]
pub struct OpsLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl OpsLog {
    /// Statements executed so far, transaction control excluded.
    pub fn statements(&self) -> Vec<Statement> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::Statement(stmt) => Some(stmt.clone()),
                Operation::Transaction(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    fn push(&self, op: Operation) {
        self.ops.lock().unwrap().push(op);
    }
}

/// Wraps a driver and records every operation its connections execute.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,
    ops_log: OpsLog,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: OpsLog::default(),
        }
    }

    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

impl Driver for LoggingDriver {
    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect()?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: OpsLog,
}

impl Connection for LoggingConnection {
    fn exec(&mut self, op: Operation) -> Result<Response> {
        self.ops_log.push(op.clone());
        self.inner.exec(op)
    }
}
