use super::Error;

/// Error when a builder call references a column the record type does not have.
#[derive(Debug)]
pub(super) struct InvalidColumn {
    record: Box<str>,
    column: Box<str>,
}

impl std::error::Error for InvalidColumn {}

impl core::fmt::Display for InvalidColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid column: `{}` has no column `{}`",
            self.record, self.column
        )
    }
}

impl Error {
    /// Creates an invalid column error.
    pub fn invalid_column(record: &str, column: &str) -> Error {
        Error::from(super::ErrorKind::InvalidColumn(InvalidColumn {
            record: record.into(),
            column: column.into(),
        }))
    }

    /// Returns `true` if this error is an invalid column error.
    pub fn is_invalid_column(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidColumn(_)))
    }
}
