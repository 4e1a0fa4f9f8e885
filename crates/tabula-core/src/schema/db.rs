mod column;
pub use column::{Collation, Column, ForeignKey};

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;

mod type_map;
pub use type_map::TypeMap;
