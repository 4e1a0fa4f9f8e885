use super::Rows;
use crate::{err, stmt::RowId, Result};

#[derive(Debug)]
pub enum Response {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Identity generated for an inserted row
    Inserted(RowId),

    /// Rows returned by a query
    Rows(Rows),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            other => Err(err!("expected row count, got {other:?}")),
        }
    }

    pub fn into_inserted(self) -> Result<RowId> {
        match self {
            Self::Inserted(id) => Ok(id),
            other => Err(err!("expected inserted row id, got {other:?}")),
        }
    }

    pub fn into_rows(self) -> Result<Rows> {
        match self {
            Self::Rows(rows) => Ok(rows),
            other => Err(err!("expected rows, got {other:?}")),
        }
    }
}
