use crate::common::{User, UserFields};
use sleet::error::{SleetError, TranslateError};
use sleet::prelude::*;

fn where_sql(dialect: Dialect, predicate: impl FnOnce(UserFields) -> Expr) -> String {
    let sql = Sleet::new(dialect)
        .count::<User>()
        .r#where(predicate)
        .build()
        .unwrap()
        .sql();
    sql.split_once(" WHERE ")
        .map(|(_, tail)| tail.to_string())
        .unwrap_or_default()
}

#[test]
fn constant_on_the_left_is_mirrored() {
    assert_eq!(
        where_sql(Dialect::SQLite, |u| val(18).compare(sleet::core::BinaryOp::Lt, u.age)),
        r#""age" > @age"#
    );
}

#[test]
fn null_comparisons() {
    assert_eq!(
        where_sql(Dialect::PostgreSQL, |u| u.email.eq(None::<String>)),
        r#""email" IS NULL"#
    );
    assert_eq!(
        where_sql(Dialect::PostgreSQL, |u| u.email.ne(None::<String>)),
        r#""email" IS NOT NULL"#
    );

    let err = Sleet::new(Dialect::SQLite)
        .count::<User>()
        .r#where(|u| u.age.ge(None::<i32>))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SleetError::Translate(TranslateError::NullOrdering(">="))
    ));
}

#[test]
fn or_inside_and_is_grouped() {
    assert_eq!(
        where_sql(Dialect::SQLite, |u| (u.age.lt(18) | u.age.gt(65)) & u.active),
        r#"("age" < @age OR "age" > @age_1) AND "active" = 1"#
    );
}

#[test]
fn folded_false_branch_drops_its_parameters() {
    let stmt = Sleet::new(Dialect::PostgreSQL)
        .select::<User>()
        .r#where(|u| u.name.eq("Ann") | (u.age.gt(1) & val(false)))
        .build()
        .unwrap();
    assert!(stmt.sql().ends_with(r#"WHERE "user_name" = :name"#), "{}", stmt.sql());
    assert_eq!(stmt.params().len(), 1);
}

#[test]
fn folded_false_predicate_per_dialect() {
    assert_eq!(where_sql(Dialect::SQLite, |_| val(false)), "0");
    assert_eq!(where_sql(Dialect::PostgreSQL, |_| val(false)), "FALSE");
    assert_eq!(where_sql(Dialect::SqlServer, |_| val(false)), "(1=0)");
}

#[test]
fn conditional_expression() {
    assert_eq!(
        where_sql(Dialect::SQLite, |u| cond(u.active, u.age.gt(18), u.age.gt(21))),
        r#"("active" = 1 AND "age" > @age) OR (NOT ("active" = 1) AND "age" > @age_1)"#
    );
    assert_eq!(
        where_sql(Dialect::SQLite, |u| cond(val(true), u.age.gt(18), u.age.gt(21))),
        r#""age" > @age"#
    );
}

#[test]
fn in_list_and_empty_in_list() {
    assert_eq!(
        where_sql(Dialect::MySQL, |u| u.id.in_list([1i64, 2, 3])),
        "`id` IN (:id, :id_1, :id_2)"
    );
    assert_eq!(
        where_sql(Dialect::MySQL, |u| u.id.in_list(Vec::<i64>::new())),
        "FALSE"
    );
}

#[test]
fn raw_sql_templates() {
    assert_eq!(
        where_sql(Dialect::SQLite, |u| {
            sql_eval_with("LENGTH({0}) > {1}", vec![u.name.expr(), val(3)])
        }),
        r#"LENGTH("user_name") > @p"#
    );
    assert_eq!(
        where_sql(Dialect::PostgreSQL, |_| sql_eval("deleted_at IS NULL")),
        "deleted_at IS NULL"
    );
}

#[test]
fn and_all_and_or_any() {
    assert_eq!(
        where_sql(Dialect::SQLite, |u| and_all([u.age.ge(18), u.active.expr()])),
        r#""age" >= @age AND "active" = 1"#
    );
    assert_eq!(where_sql(Dialect::SQLite, |_| or_any(Vec::<Expr>::new())), "0");
}

#[test]
fn unknown_field_is_rejected() {
    let err = Sleet::new(Dialect::SQLite)
        .count::<User>()
        .filter(Field::new("nickname").eq("x"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SleetError::Translate(TranslateError::UnknownField { .. })
    ));
}
