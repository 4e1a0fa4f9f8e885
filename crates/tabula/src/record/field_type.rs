use super::FieldValue;

use tabula_core::{
    schema::app::FieldTy,
    stmt::{Type, Value},
};

/// A Rust type that can be stored in a record field.
pub trait FieldType {
    /// The declared type of a field holding `Self`.
    fn field_ty() -> FieldTy;

    /// Whether a field holding `Self` may be empty.
    fn nullable() -> bool {
        false
    }

    fn field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_copy_scalar {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldType for $ty {
                fn field_ty() -> FieldTy {
                    FieldTy::Scalar(Type::$variant)
                }

                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Value(Value::from(*self))
                }
            }
        )*
    };
}

impl_copy_scalar! {
    bool => Bool,
    i8 => I64,
    i16 => I64,
    i32 => I64,
    i64 => I64,
    u8 => I64,
    u16 => I64,
    u32 => I64,
    f32 => F64,
    f64 => F64,
    chrono::NaiveDateTime => Timestamp,
    chrono::NaiveDate => Date,
}

impl FieldType for String {
    fn field_ty() -> FieldTy {
        FieldTy::Scalar(Type::String)
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Value(Value::from(self))
    }
}

impl FieldType for Vec<u8> {
    fn field_ty() -> FieldTy {
        FieldTy::Scalar(Type::Bytes)
    }

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Value(Value::from(&self[..]))
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn field_ty() -> FieldTy {
        T::field_ty()
    }

    fn nullable() -> bool {
        true
    }

    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.field_value(),
            None if T::field_ty().is_record() => FieldValue::Record(None),
            None => FieldValue::Value(Value::Null),
        }
    }
}

impl<T: FieldType> FieldType for Box<T> {
    fn field_ty() -> FieldTy {
        T::field_ty()
    }

    fn nullable() -> bool {
        T::nullable()
    }

    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert!(matches!(i32::field_ty(), FieldTy::Scalar(Type::I64)));
        assert!(matches!(f32::field_ty(), FieldTy::Scalar(Type::F64)));
        assert!(matches!(
            <Vec<u8>>::field_ty(),
            FieldTy::Scalar(Type::Bytes)
        ));
        assert!(!String::nullable());

        let value = 7u16.field_value();
        assert_eq!(value.as_value(), Some(&Value::I64(7)));
    }

    #[test]
    fn optional_scalars() {
        assert!(<Option<String>>::nullable());
        assert!(matches!(
            <Option<bool>>::field_ty(),
            FieldTy::Scalar(Type::Bool)
        ));

        let none: Option<f64> = None;
        assert_eq!(none.field_value().as_value(), Some(&Value::Null));
        assert_eq!(
            Some(1.5f64).field_value().as_value(),
            Some(&Value::F64(1.5))
        );
    }

    #[test]
    fn boxed() {
        let boxed = Box::new(Some(3i64));
        assert!(<Box<Option<i64>>>::nullable());
        assert_eq!(boxed.field_value().as_value(), Some(&Value::I64(3)));
    }
}
