pub mod operation;
pub use operation::{Operation, Transaction};

mod response;
pub use response::Response;

mod rows;
pub use rows::{Row, Rows};

use crate::Result;

use std::fmt::Debug;

/// Opens connections to a storage engine.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single connection to the storage engine.
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    fn exec(&mut self, op: Operation) -> Result<Response>;
}
