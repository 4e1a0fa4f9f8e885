pub mod app;
pub use app::{Field, FieldTy, RecordType, RecordTypeRef};

pub mod db;
pub use db::{Table, TypeMap};

mod name;
pub use name::Name;
