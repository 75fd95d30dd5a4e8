use crate::common::{Account, AuditEntry, Document, User};
use sleet::error::SleetError;
use sleet::prelude::*;

#[test]
fn insert_returns_identity_per_dialect() {
    let user = User::new("Ann", 30);
    let sql = |dialect| Sleet::new(dialect).insert(&user).build().unwrap().sql();

    assert_eq!(
        sql(Dialect::SQLite),
        r#"INSERT INTO "users" ("user_name", "email", "age", "active") VALUES (@name, @email, @age, @active) RETURNING "id""#
    );
    assert_eq!(
        sql(Dialect::PostgreSQL),
        r#"INSERT INTO "users" ("user_name", "email", "age", "active") VALUES (:name, :email, :age, :active) RETURNING "id""#
    );
    assert_eq!(
        sql(Dialect::MySQL),
        "INSERT INTO `users` (`user_name`, `email`, `age`, `active`) VALUES (:name, :email, :age, :active); SELECT LAST_INSERT_ID()"
    );
    assert_eq!(
        sql(Dialect::SqlServer),
        "INSERT INTO [users] ([user_name], [email], [age], [active]) OUTPUT INSERTED.[id] VALUES (@name, @email, @age, @active)"
    );
}

#[test]
fn insert_binds_captured_values() {
    let mut user = User::new("Ann", 30);
    user.email = Some("ann@example.com".into());
    let stmt = Sleet::new(Dialect::PostgreSQL).insert(&user).build().unwrap();

    let positional = stmt.positional();
    assert!(positional.sql.contains("VALUES ($1, $2, $3, $4)"));
    assert_eq!(
        positional.values,
        vec![
            Value::from("Ann"),
            Value::from("ann@example.com"),
            Value::Int(30),
            Value::Bool(true),
        ]
    );
}

#[test]
fn insert_without_identity_retrieval() {
    let stmt = Sleet::new(Dialect::SQLite)
        .insert(&User::new("Ann", 30))
        .return_identity(false)
        .build()
        .unwrap();
    assert!(!stmt.sql().contains("RETURNING"));
}

#[test]
fn insert_uses_sql_overrides_and_schema() {
    let doc = Document {
        id: 1,
        title: "Notes".into(),
        version: 1,
        created: None,
        cached_html: Some("<p>ignored</p>".into()),
    };
    let stmt = Sleet::new(Dialect::PostgreSQL).insert(&doc).build().unwrap();
    assert_eq!(
        stmt.sql(),
        r#"INSERT INTO "archive"."documents" ("id", "title", "version", "created") VALUES (:id, :title, :version, CURRENT_TIMESTAMP)"#
    );
    assert_eq!(stmt.params().len(), 3);
    assert!(!stmt.params().contains("created"));
}

#[test]
fn insert_skips_no_insert_columns() {
    let account = Account {
        id: 0,
        r#type: "checking".into(),
        password_hash: "x".into(),
        balance: 100,
    };
    let stmt = Sleet::new(Dialect::SQLite).insert(&account).build().unwrap();
    assert_eq!(
        stmt.sql(),
        r#"INSERT INTO "accounts" ("type", "password_hash") VALUES (@type, @password_hash) RETURNING "id""#
    );
}

#[test]
fn insert_many_renames_parameters_per_row() {
    let users = [User::new("Ann", 30), User::new("Bob", 41)];
    let stmt = Sleet::new(Dialect::MySQL)
        .insert_many(&users)
        .build()
        .unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO `users` (`user_name`, `email`, `age`, `active`) VALUES (:name, :email, :age, :active), (:name_1, :email_1, :age_1, :active_1)"
    );
    assert_eq!(stmt.params().get("name_1"), Some(&Value::from("Bob")));
    assert_eq!(stmt.positional().values.len(), 8);
}

#[test]
fn insert_many_empty_batch_fails() {
    let err = Sleet::new(Dialect::SQLite)
        .insert_many::<User>(&[])
        .build()
        .unwrap_err();
    assert!(matches!(err, SleetError::EmptyBatch));
}

#[test]
fn insert_read_only_columns_are_left_out() {
    let entry = AuditEntry {
        message: "started".into(),
        logged_at: None,
    };
    let stmt = Sleet::new(Dialect::SqlServer).insert(&entry).build().unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO [audit_log] ([message]) VALUES (@message)"
    );
}
