use tabula_core::stmt::RowId;

use std::{cell::Cell, fmt};

/// Caches the primary key of the row a record is stored in.
///
/// Once set, the cached value is trusted by every operation until it is
/// cleared, either explicitly or by deleting the record. The cache does not
/// take part in equality.
#[derive(Default, Clone)]
pub struct Identity {
    row_id: Cell<Option<RowId>>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<RowId> {
        self.row_id.get()
    }

    pub fn is_set(&self) -> bool {
        self.get().is_some()
    }

    pub fn set(&self, row_id: RowId) {
        self.row_id.set(Some(row_id));
    }

    /// Forgets the cached identity. The next operation looks the row up by
    /// its key fields again.
    pub fn clear(&self) {
        self.row_id.set(None);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(row_id) => write!(f, "Identity({row_id})"),
            None => f.write_str("Identity(None)"),
        }
    }
}

impl PartialEq for Identity {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Identity {}
