mod field;
pub use field::{Field, FieldTy};

mod record;
pub use record::{Builder, RecordType, RecordTypeRef};
