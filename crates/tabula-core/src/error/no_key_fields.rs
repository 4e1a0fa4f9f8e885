use super::Error;

/// Error when identity resolution is attempted on a record type without any
/// key fields.
#[derive(Debug)]
pub(super) struct NoKeyFields {
    record: Box<str>,
}

impl std::error::Error for NoKeyFields {}

impl core::fmt::Display for NoKeyFields {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record type `{}` has no key fields", self.record)
    }
}

impl Error {
    pub fn no_key_fields(record: &str) -> Error {
        Error::from(super::ErrorKind::NoKeyFields(NoKeyFields {
            record: record.into(),
        }))
    }

    pub fn is_no_key_fields(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::NoKeyFields(_)))
    }
}
