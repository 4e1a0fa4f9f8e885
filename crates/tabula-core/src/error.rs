mod adhoc;
mod driver_operation_failed;
mod invalid_column;
mod invalid_connection_url;
mod invalid_schema;
mod no_key_fields;
mod record_not_found;
mod relation_not_found;
mod type_conversion;
mod unknown_operator;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use invalid_column::InvalidColumn;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_schema::InvalidSchema;
use no_key_fields::NoKeyFields;
use record_not_found::RecordNotFound;
use relation_not_found::RelationNotFound;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unknown_operator::UnknownOperator;

/// Return early with an ad hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Build an ad hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Tabula.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    assert!(
                        inner.cause.is_none(),
                        "consequent error must not already have a cause"
                    );
                    inner.kind
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if `pred` holds for any error in the context chain.
    fn any(&self, pred: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| pred(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    TypeConversion(TypeConversionError),
    InvalidSchema(InvalidSchema),
    RelationNotFound(RelationNotFound),
    InvalidColumn(InvalidColumn),
    UnknownOperator(UnknownOperator),
    NoKeyFields(NoKeyFields),
    RecordNotFound(RecordNotFound),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            RelationNotFound(err) => core::fmt::Display::fmt(err, f),
            InvalidColumn(err) => core::fmt::Display::fmt(err, f),
            UnknownOperator(err) => core::fmt::Display::fmt(err, f),
            NoKeyFields(err) => core::fmt::Display::fmt(err, f),
            RecordNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown tabula error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::record_not_found("table=tree_data")
            .context(err!("update failed"))
            .context(err!("TreeData"));

        assert!(err.is_record_not_found());
        assert!(!err.is_no_key_fields());
        assert!(err.root().is_record_not_found());
        assert_eq!(
            err.to_string(),
            "TreeData: update failed: record not found: table=tree_data"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn type_conversion_error() {
        let value = crate::stmt::Value::I64(42);
        let err = Error::type_conversion(value, "String");
        assert_eq!(err.to_string(), "cannot convert I64 to String");
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("cannot map field `tags` of type Custom(\"tags\")");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: cannot map field `tags` of type Custom(\"tags\")"
        );
    }

    #[test]
    fn relation_not_found_error() {
        let err = Error::relation_not_found("TaxonomyData", "TreeData");
        assert!(err.is_relation_not_found());
        assert_eq!(
            err.to_string(),
            "relation not found: `TaxonomyData` has no field of type `TreeData`"
        );
    }

    #[test]
    fn invalid_column_error() {
        let err = Error::invalid_column("TreeData", "doesnotexist");
        assert!(err.is_invalid_column());
        assert_eq!(
            err.to_string(),
            "invalid column: `TreeData` has no column `doesnotexist`"
        );
    }

    #[test]
    fn unknown_operator_error() {
        let err = Error::unknown_operator("<>");
        assert!(err.is_unknown_operator());
        assert_eq!(
            err.to_string(),
            "unknown operator `<>`; valid operators: ==, !=, >, >=, <, <=, in, notin, is, isnot"
        );
    }

    #[test]
    fn no_key_fields_error() {
        let err = Error::no_key_fields("Note");
        assert!(err.is_no_key_fields());
        assert_eq!(err.to_string(), "record type `Note` has no key fields");
    }

    #[test]
    fn record_not_found_without_context() {
        let err = Error::record_not_found("");
        assert_eq!(err.to_string(), "record not found");
    }
}
