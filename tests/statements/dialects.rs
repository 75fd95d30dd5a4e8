use crate::common::User;
use chrono::NaiveDate;
use sleet::prelude::*;

#[test]
fn identifier_quoting() {
    let sql = |dialect| Sleet::new(dialect).count::<User>().build().unwrap().sql();
    assert_eq!(sql(Dialect::SQLite), r#"SELECT COUNT(*) FROM "users""#);
    assert_eq!(sql(Dialect::PostgreSQL), r#"SELECT COUNT(*) FROM "users""#);
    assert_eq!(sql(Dialect::MySQL), "SELECT COUNT(*) FROM `users`");
    assert_eq!(sql(Dialect::SqlServer), "SELECT COUNT(*) FROM [users]");
}

#[test]
fn named_and_positional_markers() {
    let markers = |dialect| {
        let stmt = Sleet::new(dialect)
            .count::<User>()
            .r#where(|u| u.age.gt(18) & u.age.lt(65))
            .build()
            .unwrap();
        let named = stmt.sql().split_once(" WHERE ").map(|(_, w)| w.to_string());
        let positional = stmt
            .positional()
            .sql
            .split_once(" WHERE ")
            .map(|(_, w)| w.to_string());
        (named.unwrap_or_default(), positional.unwrap_or_default())
    };

    assert_eq!(
        markers(Dialect::SQLite),
        (
            r#""age" > @age AND "age" < @age_1"#.to_string(),
            r#""age" > ? AND "age" < ?"#.to_string()
        )
    );
    assert_eq!(
        markers(Dialect::PostgreSQL),
        (
            r#""age" > :age AND "age" < :age_1"#.to_string(),
            r#""age" > $1 AND "age" < $2"#.to_string()
        )
    );
    assert_eq!(
        markers(Dialect::MySQL).1,
        "`age` > ? AND `age` < ?".to_string()
    );
    assert_eq!(
        markers(Dialect::SqlServer).1,
        "[age] > @P1 AND [age] < @P2".to_string()
    );
}

#[test]
fn boolean_literals() {
    let sql = |dialect| {
        Sleet::new(dialect)
            .count::<User>()
            .r#where(|u| u.active)
            .build()
            .unwrap()
            .sql()
    };
    assert!(sql(Dialect::SQLite).ends_with(r#""active" = 1"#));
    assert!(sql(Dialect::PostgreSQL).ends_with(r#""active" = TRUE"#));
    assert!(sql(Dialect::MySQL).ends_with("`active` = TRUE"));
    assert!(sql(Dialect::SqlServer).ends_with("[active] = 1"));
}

#[test]
fn inline_sql_renders_literals() {
    let stmt = Sleet::new(Dialect::PostgreSQL)
        .update_where::<User>()
        .set(User::fields().name, "O'Brien")
        .r#where(|u| u.active & u.age.ge(21))
        .build()
        .unwrap();
    assert_eq!(
        stmt.inline_sql(),
        r#"UPDATE "users" SET "user_name" = 'O''Brien' WHERE "active" = TRUE AND "age" >= 21"#
    );
}

#[test]
fn date_values_bind_as_parameters() {
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let stmt = Sleet::new(Dialect::SQLite)
        .count::<User>()
        .filter(Field::new("age").ne(day))
        .build()
        .unwrap();
    assert_eq!(stmt.params().get("age"), Some(&Value::Date(day)));
}

#[test]
fn dialect_names_round_trip() {
    for dialect in [
        Dialect::SQLite,
        Dialect::PostgreSQL,
        Dialect::MySQL,
        Dialect::SqlServer,
    ] {
        assert_eq!(Dialect::parse(dialect.as_str()), Some(dialect));
    }
    assert_eq!(Dialect::parse("mssql"), Some(Dialect::SqlServer));
}
