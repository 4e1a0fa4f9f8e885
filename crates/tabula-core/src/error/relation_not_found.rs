use super::Error;

/// Error when a join cannot find the foreign-key column linking two record
/// types, or when a join cannot be attached to the join tree.
#[derive(Debug)]
pub(super) struct RelationNotFound {
    message: Box<str>,
}

impl std::error::Error for RelationNotFound {}

impl core::fmt::Display for RelationNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "relation not found: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a `left` record type that has no field of type `right`.
    pub fn relation_not_found(left: &str, right: &str) -> Error {
        Error::relation_not_found_with(format!(
            "`{left}` has no field of type `{right}`"
        ))
    }

    /// Creates a relation error with a free-form message.
    pub fn relation_not_found_with(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RelationNotFound(RelationNotFound {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a relation not found error.
    pub fn is_relation_not_found(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::RelationNotFound(_)))
    }
}
