mod support;

use support::models::{hibiscus, rosa, tree, TaxonomyData, TreeData};
use tabula::{
    stmt::{JoinOp, TableFactor},
    Identity, Operator, QueryBuilder, Record, Value,
};

use pretty_assertions::assert_eq;

#[derive(Debug, Record)]
struct Forest {
    identity: Identity,

    #[key]
    name: String,

    landmark: TreeData,
}

#[test]
fn builder_errors() {
    let tree = TreeData::schema();
    let taxonomy = TaxonomyData::schema();

    let mut query = QueryBuilder::new();

    assert!(query.build().is_err());

    assert!(query
        .add_column(tree, "doesnotexist", None)
        .unwrap_err()
        .is_invalid_column());
    assert!(query
        .add_clause(tree, "doesnotexist", 1, "==")
        .unwrap_err()
        .is_invalid_column());
    assert!(query
        .add_clause(tree, "specie", "x", "<>")
        .unwrap_err()
        .is_unknown_operator());
    assert!(query
        .add_join(taxonomy, tree, false, None, None)
        .unwrap_err()
        .is_relation_not_found());
    assert!(query
        .add_join(tree, tree, false, None, None)
        .unwrap_err()
        .is_relation_not_found());
    assert!(query
        .add_join(tree, taxonomy, false, Some("nope"), None)
        .unwrap_err()
        .is_invalid_column());
    assert!(query.add_clause_group(vec![]).is_err());

    // Only failures so far, nothing was registered
    assert!(query.build().is_err());
}

#[test]
fn three_way_join() {
    let db = support::db();

    let forest = Forest {
        identity: Identity::new(),
        name: "kew".to_string(),
        landmark: tree(1, hibiscus(), "rosa-sinensis"),
    };
    db.insert(&forest).unwrap();
    db.insert(&tree(2, rosa(), "canina")).unwrap();

    let mut query = QueryBuilder::new();
    query
        .add_column(Forest::schema(), "name", Some("forest"))
        .unwrap()
        .add_column(TaxonomyData::schema(), "genus", None)
        .unwrap()
        .add_join(Forest::schema(), TreeData::schema(), false, None, None)
        .unwrap()
        .add_join(TreeData::schema(), TaxonomyData::schema(), false, None, None)
        .unwrap();

    let select = query.build().unwrap();
    assert_eq!(select.source.len(), 1);
    assert_eq!(
        select.source[0].relation.tables(),
        ["forest", "tree_data", "taxonomy_data"]
    );

    let rows = db.query(&select).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["forest"], Value::from("kew"));
    assert_eq!(rows[0]["genus"], Value::from("hibiscus"));
}

#[test]
fn join_attaches_left_side() {
    let mut query = QueryBuilder::new();
    query
        .add_column(TreeData::schema(), "id", None)
        .unwrap()
        .add_join(TreeData::schema(), TaxonomyData::schema(), false, None, None)
        .unwrap()
        .add_join(Forest::schema(), TreeData::schema(), true, None, None)
        .unwrap();

    let select = query.build().unwrap();
    let TableFactor::Join(join) = &select.source[0].relation else {
        panic!("expected a join");
    };

    assert_eq!(join.table, "forest");
    assert_eq!(join.op, JoinOp::LeftOuter);
}

#[test]
fn join_between_attached_tables_fails() {
    let mut query = QueryBuilder::new();
    query
        .add_column(TreeData::schema(), "id", None)
        .unwrap()
        .add_join(TreeData::schema(), TaxonomyData::schema(), false, None, None)
        .unwrap()
        .add_join(Forest::schema(), TreeData::schema(), false, None, None)
        .unwrap()
        .add_join(Forest::schema(), TaxonomyData::schema(), false, Some("landmark"), None)
        .unwrap();

    // Both sides of the last join are already part of the tree
    assert!(query.build().unwrap_err().is_relation_not_found());
}

#[test]
fn unjoined_tables_are_crossed() {
    let db = support::db();

    db.insert(&tree(1, hibiscus(), "rosa-sinensis")).unwrap();
    db.insert(&tree(2, rosa(), "canina")).unwrap();

    let mut query = QueryBuilder::new();
    query
        .distinct(true)
        .add_column(TreeData::schema(), "serial_number", None)
        .unwrap()
        .add_column(TaxonomyData::schema(), "genus", None)
        .unwrap();

    let select = query.build().unwrap();
    assert!(select.distinct);
    assert_eq!(select.source.len(), 2);
    assert_eq!(db.query(&select).unwrap().len(), 4);

    query
        .add_clause(TaxonomyData::schema(), "genus", vec![Value::from("rosa")], Operator::NotIn)
        .unwrap()
        .add_clause(TreeData::schema(), "serial_number", 2, ">=")
        .unwrap();

    let rows = db.all(&query).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["genus"], Value::from("hibiscus"));
    assert_eq!(rows[0]["serial_number"], Value::from(2));
}

#[test]
fn query_never_creates_tables() {
    let db = support::db();

    let mut query = QueryBuilder::new();
    query.add_column(Forest::schema(), "name", None).unwrap();
    query.build().unwrap();

    assert!(!db.has_table(Forest::schema()).unwrap());
    assert_eq!(db.table_name(Forest::schema()), "forest");
}

#[test]
fn connect_by_url() {
    support::init_tracing();

    let db = tabula::Db::builder()
        .register::<Forest>()
        .connect_url("sqlite::memory:")
        .unwrap();

    assert!(db.has_table(Forest::schema()).unwrap());
    assert!(db.has_table(TreeData::schema()).unwrap());
    assert!(db.has_table(TaxonomyData::schema()).unwrap());

    let err = tabula::Db::builder()
        .connect_url("postgresql://localhost/trees")
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
}
