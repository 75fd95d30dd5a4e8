use crate::common::{AuditEntry, OrderLine, User};
use sleet::error::SleetError;
use sleet::prelude::*;

fn line() -> OrderLine {
    OrderLine {
        order_id: 10,
        line_no: 1,
        sku: "A-1".into(),
        quantity: 3,
    }
}

#[test]
fn upsert_on_conflict() {
    let stmt = Sleet::new(Dialect::PostgreSQL).upsert(&line()).build().unwrap();
    assert_eq!(
        stmt.sql(),
        r#"INSERT INTO "order_line" ("order_id", "line_no", "sku", "quantity") VALUES (:order_id, :line_no, :sku, :quantity) ON CONFLICT ("order_id", "line_no") DO UPDATE SET "sku" = excluded."sku", "quantity" = excluded."quantity""#
    );
    assert_eq!(stmt.positional().values.len(), 4);
}

#[test]
fn upsert_on_duplicate_key() {
    let stmt = Sleet::new(Dialect::MySQL).upsert(&line()).build().unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO `order_line` (`order_id`, `line_no`, `sku`, `quantity`) VALUES (:order_id, :line_no, :sku, :quantity) ON DUPLICATE KEY UPDATE `sku` = VALUES(`sku`), `quantity` = VALUES(`quantity`)"
    );
}

#[test]
fn upsert_merge() {
    let stmt = Sleet::new(Dialect::SqlServer).upsert(&line()).build().unwrap();
    assert_eq!(
        stmt.sql(),
        "MERGE INTO [order_line] AS target USING (VALUES (@order_id, @line_no, @sku, @quantity)) AS source ([order_id], [line_no], [sku], [quantity]) ON target.[order_id] = source.[order_id] AND target.[line_no] = source.[line_no] WHEN MATCHED THEN UPDATE SET [sku] = source.[sku], [quantity] = source.[quantity] WHEN NOT MATCHED THEN INSERT ([order_id], [line_no], [sku], [quantity]) VALUES (source.[order_id], source.[line_no], source.[sku], source.[quantity]);"
    );
}

#[test]
fn upsert_includes_identity_key() {
    let mut user = User::new("Ann", 30);
    user.id = 3;
    let stmt = Sleet::new(Dialect::SQLite).upsert(&user).build().unwrap();
    assert!(
        stmt.sql()
            .starts_with(r#"INSERT INTO "users" ("id", "user_name", "email", "age", "active") VALUES (@id, "#),
        "{}",
        stmt.sql()
    );
    assert!(stmt.sql().contains(r#"ON CONFLICT ("id") DO UPDATE SET "user_name" = excluded."user_name""#));
}

#[test]
fn upsert_requires_a_key() {
    let entry = AuditEntry {
        message: "x".into(),
        logged_at: None,
    };
    let err = Sleet::new(Dialect::PostgreSQL)
        .upsert(&entry)
        .build()
        .unwrap_err();
    assert!(matches!(err, SleetError::MissingKey { .. }));
}
