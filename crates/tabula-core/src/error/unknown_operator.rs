use super::Error;

const VALID: &str = "==, !=, >, >=, <, <=, in, notin, is, isnot";

#[derive(Debug)]
pub(super) struct UnknownOperator {
    operator: Box<str>,
}

impl std::error::Error for UnknownOperator {}

impl core::fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown operator `{}`; valid operators: {VALID}",
            self.operator
        )
    }
}

impl Error {
    /// Creates an error for a predicate operator outside the supported set.
    pub fn unknown_operator(operator: &str) -> Error {
        Error::from(super::ErrorKind::UnknownOperator(UnknownOperator {
            operator: operator.into(),
        }))
    }

    /// Returns `true` if this error is an unknown operator error.
    pub fn is_unknown_operator(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UnknownOperator(_)))
    }
}
