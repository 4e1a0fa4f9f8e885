mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_or;
pub use expr_or::ExprOr;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinOp};

mod op_binary;
pub use op_binary::BinaryOp;

mod row_id;
pub use row_id::RowId;

mod select;
pub use select::{Select, SelectItem};

mod statement;
pub use statement::Statement;

mod table_factor;
pub use table_factor::TableFactor;

mod table_with_joins;
pub use table_with_joins::TableWithJoins;

mod ty;
pub use ty::Type;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

mod value_chrono;
