// Lets `#[derive(Record)]` resolve `tabula` paths from inside this crate.
extern crate self as tabula;

pub mod db;
pub use db::Db;

pub mod driver;

pub mod query;
pub use query::{Clause, Operator, QueryBuilder};

mod record;
pub use record::{FieldType, FieldValue, Identity, Record};

pub use tabula_core::{
    schema::{self, app::RecordType},
    stmt::{self, RowId, Value},
    Error, Result,
};

pub use tabula_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{FieldType, FieldValue, Identity, Record};
    pub use tabula_core::schema::app::{Field, FieldTy, RecordType, RecordTypeRef};
}
