use tabula_core::stmt::{Expr, JoinOp, TableFactor};

#[test]
fn left_deep_tree() {
    let tree = TableFactor::Table("tree_data".into())
        .join(
            "taxonomy_data",
            JoinOp::Inner,
            Expr::eq(
                Expr::column("tree_data", "taxonomy_id"),
                Expr::column("taxonomy_data", "id"),
            ),
        )
        .join(
            "garden",
            JoinOp::LeftOuter,
            Expr::eq(
                Expr::column("tree_data", "garden_id"),
                Expr::column("garden", "id"),
            ),
        );

    assert_eq!(tree.tables(), ["tree_data", "taxonomy_data", "garden"]);
    assert!(tree.contains("garden"));
    assert!(tree.contains("tree_data"));
    assert!(!tree.contains("owner"));
}

#[test]
fn single_operand_groups_are_unwrapped() {
    let clause = Expr::eq(Expr::column("t", "a"), Expr::value(1));
    assert_eq!(Expr::or_from_vec(vec![clause.clone()]), clause);
    assert_eq!(Expr::and_from_vec(vec![clause.clone()]), clause);
    assert!(matches!(
        Expr::or_from_vec(vec![clause.clone(), clause]),
        Expr::Or(_)
    ));
}
