use pretty_assertions::assert_eq;
use tabula_core::{
    driver::{Driver, Operation, Response, Transaction},
    schema::{
        app::{Field, RecordType},
        db::{Collation, Table, TypeMap},
    },
    stmt::{
        self, Assignment, Delete, Expr, ExprColumn, Insert, RowId, Select, SelectItem,
        Statement, TableWithJoins, Update, Value,
    },
    Connection,
};
use tabula_driver_sqlite::Sqlite;

fn garden_table() -> Table {
    let record = RecordType::builder("Garden")
        .field(Field::new("name", stmt::Type::String).key(true))
        .field(Field::new("area", stmt::Type::F64).nullable(true))
        .field(Field::new("photo", stmt::Type::Bytes).nullable(true))
        .field(Field::new("public", stmt::Type::Bool).nullable(true))
        .field(Field::new("opened", stmt::Type::Date).nullable(true))
        .field(Field::new("visited", stmt::Type::Timestamp).nullable(true))
        .build()
        .unwrap();

    Table::from_record(&record, &TypeMap::default(), Some(Collation::NoCase)).unwrap()
}

fn connect() -> Box<dyn Connection> {
    let mut connection = Sqlite::in_memory().connect().unwrap();
    let create = garden_table().create_table_stmt();
    connection
        .exec(Operation::Statement(create.into()))
        .unwrap();
    connection
}

fn exec(connection: &mut Box<dyn Connection>, stmt: impl Into<Statement>) -> Response {
    connection.exec(Operation::Statement(stmt.into())).unwrap()
}

fn select_all(filter: Option<Expr>) -> Select {
    let table = garden_table();
    let mut select = Select::new(vec![TableWithJoins::table("garden")]);
    select.returning = table
        .columns
        .iter()
        .map(|column| {
            SelectItem::new(
                ExprColumn::new("garden", &column.name),
                None,
                column.ty.clone(),
            )
        })
        .collect();
    select.filter = filter;
    select
}

fn insert_garden(connection: &mut Box<dyn Connection>, values: Vec<Value>) -> RowId {
    let insert = Insert {
        table: "garden".into(),
        columns: ["name", "area", "photo", "public", "opened", "visited"]
            .into_iter()
            .map(String::from)
            .collect(),
        values,
    };

    exec(connection, insert).into_inserted().unwrap()
}

#[test]
fn url_parsing() {
    assert!(matches!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory));

    let Sqlite::File(path) = Sqlite::new("sqlite:/tmp/gardens.db").unwrap() else {
        panic!("expected a file database");
    };
    assert_eq!(path.to_str(), Some("/tmp/gardens.db"));

    let err = Sqlite::new("postgres://localhost/gardens").unwrap_err();
    assert!(err.is_invalid_connection_url());

    assert_eq!(Sqlite::in_memory().url(), "sqlite::memory:");
}

#[test]
fn typed_round_trip() {
    let mut connection = connect();

    let opened = chrono::NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
    let visited = opened.and_hms_micro_opt(9, 30, 0, 125).unwrap();

    let id = insert_garden(
        &mut connection,
        vec![
            Value::from("Kew"),
            Value::from(132.5),
            Value::from(vec![1u8, 2, 3]),
            Value::from(true),
            Value::from(opened),
            Value::from(visited),
        ],
    );
    assert_eq!(id, RowId(1));

    let rows = exec(&mut connection, select_all(None)).into_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows.columns(),
        ["id", "name", "area", "photo", "public", "opened", "visited"]
    );

    let row = &rows[0];
    assert_eq!(row["id"], Value::I64(1));
    assert_eq!(row["name"], Value::from("Kew"));
    assert_eq!(row["area"], Value::F64(132.5));
    assert_eq!(row["photo"], Value::Bytes(vec![1, 2, 3]));
    assert_eq!(row["public"], Value::Bool(true));
    assert_eq!(row["opened"], Value::Date(opened));
    assert_eq!(row["visited"], Value::Timestamp(visited));
}

#[test]
fn nulls_round_trip() {
    let mut connection = connect();

    insert_garden(
        &mut connection,
        vec![
            Value::from("Empty"),
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
        ],
    );

    let filter = Expr::eq(Expr::column("garden", "area"), Value::Null);
    let rows = exec(&mut connection, select_all(Some(filter))).into_rows().unwrap();

    assert_eq!(rows.len(), 1);
    assert!(rows[0].values()[2..].iter().all(Value::is_null));
}

#[test]
fn key_text_is_case_insensitive() {
    let mut connection = connect();
    insert_garden(
        &mut connection,
        vec![
            Value::from("Kew"),
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
        ],
    );

    let filter = Expr::eq(Expr::column("garden", "name"), Expr::value("KEW"));
    let rows = exec(&mut connection, select_all(Some(filter))).into_rows().unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn update_and_delete_counts() {
    let mut connection = connect();
    let nulls = || vec![Value::Null; 5];

    let mut values = vec![Value::from("a")];
    values.extend(nulls());
    let a = insert_garden(&mut connection, values);

    let mut values = vec![Value::from("b")];
    values.extend(nulls());
    insert_garden(&mut connection, values);

    let by_id = |id: RowId| Expr::eq(Expr::column("garden", "id"), Expr::value(id));

    let count = exec(
        &mut connection,
        Update {
            table: "garden".into(),
            assignments: vec![Assignment {
                column: "area".into(),
                value: Value::from(3.0),
            }],
            filter: by_id(a),
        },
    )
    .into_count()
    .unwrap();
    assert_eq!(count, 1);

    let count = exec(
        &mut connection,
        Delete {
            table: "garden".into(),
            filter: by_id(a),
        },
    )
    .into_count()
    .unwrap();
    assert_eq!(count, 1);

    let rows = exec(&mut connection, select_all(None)).into_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("b"));
}

#[test]
fn rollback_discards_changes() {
    let mut connection = connect();

    connection
        .exec(Operation::Transaction(Transaction::Begin))
        .unwrap();

    let mut values = vec![Value::from("temporary")];
    values.extend(vec![Value::Null; 5]);
    insert_garden(&mut connection, values);

    connection
        .exec(Operation::Transaction(Transaction::Rollback))
        .unwrap();

    let rows = exec(&mut connection, select_all(None)).into_rows().unwrap();
    assert!(rows.is_empty());
}

#[test]
fn driver_errors_are_reported() {
    let mut connection = Sqlite::in_memory().connect().unwrap();

    let err = connection
        .exec(Operation::Statement(
            Delete {
                table: "missing".into(),
                filter: Expr::eq(Expr::column("missing", "id"), Expr::value(1)),
            }
            .into(),
        ))
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
}

#[test]
fn decoding_checks_declared_type() {
    let mut connection = connect();
    let mut values = vec![Value::from("Kew")];
    values.extend(vec![Value::Null; 5]);
    insert_garden(&mut connection, values);

    let mut select = Select::new(vec![TableWithJoins::table("garden")]);
    select.returning = vec![SelectItem::new(
        ExprColumn::new("garden", "name"),
        None,
        stmt::Type::I64,
    )];

    let err = connection
        .exec(Operation::Statement(select.into()))
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to I64");
}
