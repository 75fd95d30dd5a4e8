use crate::common::{AuditEntry, Document, User};
use sleet::error::{SleetError, TranslateError};
use sleet::prelude::*;

fn document() -> Document {
    Document {
        id: 9,
        title: "Draft".into(),
        version: 3,
        created: None,
        cached_html: None,
    }
}

#[test]
fn update_entity_matches_key_and_concurrency_columns() {
    let stmt = Sleet::new(Dialect::PostgreSQL)
        .update(&document())
        .build()
        .unwrap();
    assert_eq!(
        stmt.sql(),
        r#"UPDATE "archive"."documents" SET "title" = :title, "version" = version + 1 WHERE "id" = :id AND "version" = :version"#
    );
    assert_eq!(stmt.params().get("version"), Some(&Value::Int(3)));

    let positional = stmt.positional();
    assert_eq!(
        positional.values,
        vec![Value::from("Draft"), Value::Int(9), Value::Int(3)]
    );
}

#[test]
fn update_entity_sets_every_updatable_column() {
    let mut user = User::new("Ann", 31);
    user.id = 4;
    let stmt = Sleet::new(Dialect::SqlServer).update(&user).build().unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE [users] SET [user_name] = @name, [email] = @email, [age] = @age, [active] = @active WHERE [id] = @id"
    );
    assert!(stmt.positional().sql.ends_with("WHERE [id] = @P5"));
}

#[test]
fn update_entity_can_narrow_with_extra_predicate() {
    let mut user = User::new("Ann", 31);
    user.id = 4;
    let stmt = Sleet::new(Dialect::SQLite)
        .update(&user)
        .r#where(|u| u.active)
        .build()
        .unwrap();
    assert!(
        stmt.sql().ends_with(r#"WHERE "id" = @id AND "active" = 1"#),
        "{}",
        stmt.sql()
    );
}

#[test]
fn update_where_with_explicit_assignments() {
    let fields = User::fields();
    let stmt = Sleet::new(Dialect::MySQL)
        .update_where::<User>()
        .set(fields.active, false)
        .set_sql(fields.age, "age + 1")
        .r#where(|u| u.age.lt(18))
        .build()
        .unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE `users` SET `active` = :active, `age` = age + 1 WHERE `age` < :age"
    );
}

#[test]
fn update_where_parameter_names_do_not_collide() {
    let stmt = Sleet::new(Dialect::SQLite)
        .update_where::<User>()
        .set(User::fields().age, 40)
        .r#where(|u| u.age.eq(39))
        .build()
        .unwrap();
    assert_eq!(
        stmt.sql(),
        r#"UPDATE "users" SET "age" = @age WHERE "age" = @age_1"#
    );
}

#[test]
fn update_without_assignments_fails() {
    let err = Sleet::new(Dialect::SQLite)
        .update_where::<User>()
        .r#where(|u| u.id.eq(1))
        .build()
        .unwrap_err();
    assert!(matches!(err, SleetError::NoAssignments { .. }));
}

#[test]
fn update_of_unknown_field_fails() {
    let err = Sleet::new(Dialect::SQLite)
        .update_where::<User>()
        .set(Field::new("nickname"), "x")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        SleetError::Translate(TranslateError::UnknownField { .. })
    ));
}

#[test]
fn update_entity_without_key_fails() {
    let entry = AuditEntry {
        message: "x".into(),
        logged_at: None,
    };
    let err = Sleet::new(Dialect::SQLite)
        .update(&entry)
        .build()
        .unwrap_err();
    assert!(matches!(err, SleetError::MissingKey { .. }));
}
