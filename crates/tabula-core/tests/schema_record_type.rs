use tabula_core::schema::app::*;
use tabula_core::stmt;

use std::sync::OnceLock;

fn taxonomy() -> &'static RecordType {
    static TAXONOMY: OnceLock<RecordType> = OnceLock::new();
    TAXONOMY.get_or_init(|| {
        RecordType::builder("TaxonomyData")
            .field(Field::new("kingdom", stmt::Type::String).key(true))
            .field(Field::new("order", stmt::Type::String).key(true))
            .field(Field::new("family", stmt::Type::String).key(true))
            .field(Field::new("genus", stmt::Type::String).key(true))
            .build()
            .unwrap()
    })
}

fn tree() -> &'static RecordType {
    static TREE: OnceLock<RecordType> = OnceLock::new();
    TREE.get_or_init(|| {
        RecordType::builder("TreeData")
            .field(Field::new("serial_number", stmt::Type::I64).key(true))
            .field(Field::new("taxonomy", RecordTypeRef::new(taxonomy)).key(true))
            .field(Field::new("specie", stmt::Type::String).key(true))
            .field(Field::new("diameter_m", stmt::Type::F64).nullable(true))
            .build()
            .unwrap()
    })
}

// Two record types referencing each other.
fn author() -> &'static RecordType {
    static AUTHOR: OnceLock<RecordType> = OnceLock::new();
    AUTHOR.get_or_init(|| {
        RecordType::builder("Author")
            .field(Field::new("key_name", stmt::Type::String))
            .field(Field::new("favorite_book", RecordTypeRef::new(book)).nullable(true))
            .build()
            .unwrap()
    })
}

fn book() -> &'static RecordType {
    static BOOK: OnceLock<RecordType> = OnceLock::new();
    BOOK.get_or_init(|| {
        RecordType::builder("Book")
            .field(Field::new("key_title", stmt::Type::String))
            .field(Field::new("author", RecordTypeRef::new(author)).nullable(true))
            .build()
            .unwrap()
    })
}

#[test]
fn table_names() {
    assert_eq!(tree().table_name(), "tree_data");
    assert_eq!(taxonomy().table_name(), "taxonomy_data");
    assert_eq!(tree().table_name(), tree().table_name());
}

#[test]
fn key_fields_by_flag_and_prefix() {
    let keys: Vec<_> = tree().key_fields().map(|(_, f)| f.name.as_str()).collect();
    assert_eq!(keys, ["serial_number", "taxonomy", "specie"]);

    let keys: Vec<_> = author().key_fields().map(|(_, f)| f.name.as_str()).collect();
    assert_eq!(keys, ["key_name"]);
}

#[test]
fn nested_fields_use_id_columns() {
    let field = tree().field("taxonomy").unwrap();
    assert!(field.is_record());
    assert_eq!(field.column_name(), "taxonomy_id");
    assert_eq!(field.ty.column_ty(), stmt::Type::I64);
    assert_eq!(field.ty.as_record().unwrap().name, "TaxonomyData");
}

#[test]
fn column_validation() {
    assert_eq!(
        tree().resolve_column("specie"),
        Some(("specie".to_string(), stmt::Type::String))
    );
    assert_eq!(
        tree().resolve_column("taxonomy"),
        Some(("taxonomy_id".to_string(), stmt::Type::I64))
    );
    assert_eq!(
        tree().resolve_column("id"),
        Some(("id".to_string(), stmt::Type::I64))
    );
    assert_eq!(
        tree().resolve_column("taxonomy_id"),
        Some(("taxonomy_id".to_string(), stmt::Type::I64))
    );
    assert_eq!(tree().resolve_column("doesnotexist"), None);
}

#[test]
fn field_referencing() {
    let field = tree().field_referencing(taxonomy()).unwrap();
    assert_eq!(field.name, "taxonomy");
    assert!(taxonomy().field_referencing(tree()).is_none());
}

#[test]
fn cyclic_descriptors() {
    let book_field = author().field("favorite_book").unwrap();
    let target = book_field.ty.as_record().unwrap();
    let back = target.field("author").unwrap().ty.as_record().unwrap();

    assert!(back.is(author()));
    // Debug output must terminate.
    assert!(format!("{:?}", author()).contains("RecordTypeRef(Book)"));
}

#[test]
fn reject_id_field() {
    let err = RecordType::builder("Broken")
        .scalar("id", stmt::Type::I64)
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn reject_duplicate_columns() {
    let err = RecordType::builder("Broken")
        .scalar("owner_id", stmt::Type::I64)
        .field(Field::new("owner", RecordTypeRef::new(taxonomy)))
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: `Broken` declares column `owner_id` more than once"
    );
}
