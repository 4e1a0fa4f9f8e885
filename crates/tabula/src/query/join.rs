use tabula_core::schema::app::RecordType;

/// How two record types' tables are joined.
#[derive(Debug, Clone)]
pub(super) struct JoinSpec {
    pub(super) left: &'static RecordType,
    pub(super) right: &'static RecordType,
    pub(super) left_column: String,
    pub(super) right_column: String,
    pub(super) outer: bool,
}
