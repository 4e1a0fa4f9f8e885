use tabula_core::{
    driver::{Connection, Operation, Response, Transaction},
    stmt::Statement,
    Result,
};

use tracing::warn;

/// A transaction scoped to a single statement.
///
/// Dropping it before [`UnitOfWork::commit`] rolls the transaction back.
pub(super) struct UnitOfWork<'a> {
    connection: &'a mut dyn Connection,
    done: bool,
}

impl<'a> UnitOfWork<'a> {
    pub(super) fn begin(connection: &'a mut dyn Connection) -> Result<Self> {
        connection.exec(Transaction::Begin.into())?;

        Ok(Self {
            connection,
            done: false,
        })
    }

    pub(super) fn exec(&mut self, stmt: Statement) -> Result<Response> {
        self.connection.exec(Operation::Statement(stmt))
    }

    pub(super) fn commit(mut self) -> Result<()> {
        self.connection.exec(Transaction::Commit.into())?;
        self.done = true;
        Ok(())
    }
}

impl Drop for UnitOfWork<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }

        if let Err(err) = self.connection.exec(Transaction::Rollback.into()) {
            warn!(error = %err, "failed to roll back unit of work");
        }
    }
}
