mod clause;
pub use clause::Clause;

mod join;
use join::JoinSpec;

mod operator;
pub use operator::{IntoOperator, Operator};

use indexmap::IndexMap;
use tabula_core::{
    err,
    schema::app::RecordType,
    stmt::{
        self, Expr, ExprColumn, JoinOp, Select, SelectItem, TableFactor, TableWithJoins, Value,
    },
    Error, Result,
};

/// Accumulates projections, joins and predicates, then compiles them into a
/// [`Select`].
///
/// The builder only derives table and column names from record types. It never
/// touches the database, so tables do not need to exist until the statement is
/// executed.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    distinct: bool,

    /// Referenced record types, keyed by table name
    tables: IndexMap<String, &'static RecordType>,

    columns: Vec<Projection>,

    /// Keyed by (left table, right table)
    joins: IndexMap<(String, String), JoinSpec>,

    /// Each group is OR-ed, groups are AND-ed
    groups: Vec<Vec<Clause>>,
}

#[derive(Debug, Clone)]
struct Projection {
    ty: &'static RecordType,
    column: String,
    label: Option<String>,
    value_ty: stmt::Type,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes duplicate rows from the result.
    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// Projects `column` of `ty`'s table, optionally under `label`.
    ///
    /// `column` must name a field or end in `id`. Nested record fields are
    /// projected through their `<field>_id` column.
    pub fn add_column(
        &mut self,
        ty: &'static RecordType,
        column: &str,
        label: Option<&str>,
    ) -> Result<&mut Self> {
        let (column, value_ty) = resolve_column(ty, column)?;

        self.reference(ty);
        self.columns.push(Projection {
            ty,
            column,
            label: label.map(str::to_string),
            value_ty,
        });
        Ok(self)
    }

    /// Projects `id` followed by every field of `ty`.
    pub fn add_all_columns(&mut self, ty: &'static RecordType) -> Result<&mut Self> {
        self.add_column(ty, "id", None)?;

        for field in &ty.fields {
            self.add_column(ty, &field.name, None)?;
        }

        Ok(self)
    }

    /// Joins `left` with `right` on `left.left_column = right.right_column`.
    ///
    /// `right_column` defaults to `id`. Without `left_column`, the foreign-key
    /// column of the first field of `left` holding a `right` record is used.
    /// Adding the same pair again replaces the earlier join in place.
    pub fn add_join(
        &mut self,
        left: &'static RecordType,
        right: &'static RecordType,
        outer: bool,
        left_column: Option<&str>,
        right_column: Option<&str>,
    ) -> Result<&mut Self> {
        if left.is(right) {
            return Err(Error::relation_not_found_with(format!(
                "cannot join `{}` with itself",
                left.name
            )));
        }

        let (right_column, _) = resolve_column(right, right_column.unwrap_or("id"))?;

        let left_column = match left_column {
            Some(column) => resolve_column(left, column)?.0,
            None => match left.field_referencing(right) {
                Some(field) => field.column_name(),
                None => return Err(Error::relation_not_found(&left.name, &right.name)),
            },
        };

        self.reference(left);
        self.reference(right);
        self.joins.insert(
            (left.table_name(), right.table_name()),
            JoinSpec {
                left,
                right,
                left_column,
                right_column,
                outer,
            },
        );
        Ok(self)
    }

    /// Validates a predicate without adding it to the query.
    pub fn create_clause(
        &self,
        ty: &'static RecordType,
        column: &str,
        value: impl Into<Value>,
        op: impl IntoOperator,
    ) -> Result<Clause> {
        let (column, _) = resolve_column(ty, column)?;
        let op = op.into_operator()?;

        Ok(Clause {
            ty,
            column,
            value: value.into(),
            op,
        })
    }

    /// Adds a predicate as its own group.
    pub fn add_clause(
        &mut self,
        ty: &'static RecordType,
        column: &str,
        value: impl Into<Value>,
        op: impl IntoOperator,
    ) -> Result<&mut Self> {
        let clause = self.create_clause(ty, column, value, op)?;
        self.add_clause_group([clause])
    }

    /// Adds a group of predicates combined with OR.
    pub fn add_clause_group(
        &mut self,
        clauses: impl IntoIterator<Item = Clause>,
    ) -> Result<&mut Self> {
        let group: Vec<_> = clauses.into_iter().collect();

        if group.is_empty() {
            return Err(err!("a clause group needs at least one clause"));
        }

        for clause in &group {
            self.reference(clause.ty);
        }

        self.groups.push(group);
        Ok(self)
    }

    /// Compiles the accumulated parts into a select statement.
    pub fn build(&self) -> Result<Select> {
        if self.tables.is_empty() {
            return Err(err!("query does not reference any record type"));
        }

        if self.columns.is_empty() {
            return Err(err!("query does not project any column"));
        }

        let returning = self
            .columns
            .iter()
            .map(|projection| {
                SelectItem::new(
                    ExprColumn::new(projection.ty.table_name(), &projection.column),
                    projection.label.clone(),
                    projection.value_ty.clone(),
                )
            })
            .collect();

        let mut select = Select::new(self.build_source()?);
        select.distinct = self.distinct;
        select.returning = returning;
        select.filter = self.build_filter();
        Ok(select)
    }

    fn build_source(&self) -> Result<Vec<TableWithJoins>> {
        let mut tree: Option<TableFactor> = None;

        for ((left, right), spec) in &self.joins {
            let on = Expr::eq(
                Expr::column(left, &spec.left_column),
                Expr::column(right, &spec.right_column),
            );
            let op = JoinOp::from_outer(spec.outer);

            tree = Some(match tree {
                None => TableFactor::Table(left.clone()).join(right, op, on),
                Some(tree) => match (tree.contains(left), tree.contains(right)) {
                    (true, false) => tree.join(right, op, on),
                    (false, true) => tree.join(left, op, on),
                    (true, true) => {
                        return Err(Error::relation_not_found_with(format!(
                            "`{}` and `{}` are already both part of the join tree",
                            spec.left.name, spec.right.name
                        )))
                    }
                    (false, false) => {
                        return Err(Error::relation_not_found_with(format!(
                            "cannot join `{}` with `{}`: neither is reachable from the join tree",
                            spec.left.name, spec.right.name
                        )))
                    }
                },
            });
        }

        let mut source = vec![];

        for name in self.tables.keys() {
            if tree.as_ref().is_some_and(|tree| tree.contains(name)) {
                continue;
            }

            source.push(TableWithJoins::table(name));
        }

        if let Some(tree) = tree {
            source.insert(0, tree.into());
        }

        Ok(source)
    }

    fn build_filter(&self) -> Option<Expr> {
        if self.groups.is_empty() {
            return None;
        }

        let groups = self
            .groups
            .iter()
            .map(|group| Expr::or_from_vec(group.iter().map(Clause::to_expr).collect()))
            .collect();

        Some(Expr::and_from_vec(groups))
    }

    fn reference(&mut self, ty: &'static RecordType) {
        self.tables.entry(ty.table_name()).or_insert(ty);
    }
}

/// Maps a field name or `id`-suffixed column to the column name and value
/// type it is read as.
fn resolve_column(ty: &RecordType, column: &str) -> Result<(String, stmt::Type)> {
    ty.resolve_column(column)
        .ok_or_else(|| Error::invalid_column(&ty.name, column))
}
