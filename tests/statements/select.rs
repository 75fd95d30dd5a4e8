use crate::common::{Account, OrderLine, User};
use sleet::error::SleetError;
use sleet::prelude::*;

const USER_COLUMNS: &str = r#""id", "user_name" AS "name", "email", "age", "active""#;

#[test]
fn select_all_columns() {
    let stmt = Sleet::new(Dialect::SQLite).select::<User>().build().unwrap();
    assert_eq!(stmt.sql(), format!(r#"SELECT {USER_COLUMNS} FROM "users""#));
    assert!(stmt.params().is_empty());
}

#[test]
fn select_without_aliases() {
    let config = SleetConfig::new(Dialect::SQLite).with_alias_columns(false);
    let stmt = Sleet::with_config(config).select::<User>().build().unwrap();
    assert_eq!(
        stmt.sql(),
        r#"SELECT "id", "user_name", "email", "age", "active" FROM "users""#
    );
}

#[test]
fn select_skips_unselectable_columns() {
    let stmt = Sleet::new(Dialect::PostgreSQL)
        .select::<Account>()
        .build()
        .unwrap();
    assert_eq!(stmt.sql(), r#"SELECT "id", "type", "balance" FROM "accounts""#);
}

#[test]
fn select_with_where_order_and_limit() {
    let stmt = Sleet::new(Dialect::PostgreSQL)
        .select::<User>()
        .r#where(|u| u.age.ge(18) & u.name.like("A%"))
        .order_by(User::fields().name.asc())
        .order_by(User::fields().id.desc())
        .limit(10)
        .offset(20)
        .build()
        .unwrap();

    assert_eq!(
        stmt.sql(),
        format!(
            r#"SELECT {USER_COLUMNS} FROM "users" WHERE "age" >= :age AND "user_name" LIKE :name ORDER BY "user_name" ASC, "id" DESC LIMIT 10 OFFSET 20"#
        )
    );

    let positional = stmt.positional();
    assert!(positional.sql.contains(r#""age" >= $1 AND "user_name" LIKE $2"#));
    assert_eq!(positional.values, vec![Value::Int(18), Value::from("A%")]);
}

#[test]
fn select_where_calls_accumulate() {
    let stmt = Sleet::new(Dialect::MySQL)
        .select::<User>()
        .r#where(|u| u.active)
        .r#where(|u| u.email.is_not_null())
        .build()
        .unwrap();
    assert!(
        stmt.sql()
            .ends_with("WHERE `active` = TRUE AND `email` IS NOT NULL"),
        "{}",
        stmt.sql()
    );
    assert!(stmt.params().is_empty());
}

#[test]
fn select_with_constant_true_predicate_has_no_where() {
    let stmt = Sleet::new(Dialect::SQLite)
        .select::<User>()
        .filter(val(1).compare(sleet::core::BinaryOp::Eq, 1))
        .build()
        .unwrap();
    assert_eq!(stmt.sql(), format!(r#"SELECT {USER_COLUMNS} FROM "users""#));
}

#[test]
fn get_by_single_key() {
    let stmt = Sleet::new(Dialect::PostgreSQL).get::<User, _>([7]).unwrap();
    let positional = stmt.positional();
    assert_eq!(
        positional.sql,
        format!(r#"SELECT {USER_COLUMNS} FROM "users" WHERE "id" = $1"#)
    );
    assert_eq!(positional.values, vec![Value::Int(7)]);
}

#[test]
fn get_by_composite_key() {
    let stmt = Sleet::new(Dialect::SQLite)
        .get::<OrderLine, _>([Value::Int(1), Value::Int(2)])
        .unwrap();
    assert!(
        stmt.sql()
            .ends_with(r#"FROM "order_line" WHERE "order_id" = @order_id AND "line_no" = @line_no"#),
        "{}",
        stmt.sql()
    );
}

#[test]
fn get_with_wrong_key_count() {
    let err = Sleet::new(Dialect::SQLite)
        .get::<OrderLine, _>([1])
        .unwrap_err();
    assert!(matches!(
        err,
        SleetError::KeyCount {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn default_schema_qualifies_tables() {
    let config = SleetConfig::new(Dialect::SqlServer).with_default_schema("dbo");
    let stmt = Sleet::with_config(config).count::<User>().build().unwrap();
    assert_eq!(stmt.sql(), "SELECT COUNT(*) FROM [dbo].[users]");
}

#[test]
fn count_with_predicate() {
    let stmt = Sleet::new(Dialect::SQLite)
        .count::<User>()
        .r#where(|u| u.age.between(18, 30))
        .build()
        .unwrap();
    assert_eq!(
        stmt.sql(),
        r#"SELECT COUNT(*) FROM "users" WHERE "age" BETWEEN @age AND @age_1"#
    );
}

#[test]
fn truncate_per_dialect() {
    let sql = |dialect| Sleet::new(dialect).truncate::<User>().build().unwrap().sql();
    assert_eq!(sql(Dialect::SQLite), r#"DELETE FROM "users""#);
    assert_eq!(sql(Dialect::PostgreSQL), r#"TRUNCATE TABLE "users""#);
    assert_eq!(sql(Dialect::MySQL), "TRUNCATE TABLE `users`");
    assert_eq!(sql(Dialect::SqlServer), "TRUNCATE TABLE [users]");
}
