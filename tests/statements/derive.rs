use crate::common::{Account, AuditEntry, Document, OrderLine, User};
use sleet::prelude::*;

#[test]
fn table_names_and_schema() {
    assert_eq!(User::table().name(), "users");
    assert_eq!(User::table().schema(), None);
    assert_eq!(Document::table().schema(), Some("archive"));
    assert_eq!(OrderLine::table().name(), "order_line");
}

#[test]
fn renamed_and_raw_identifiers() {
    let column = User::table().column_by_property("name").unwrap();
    assert_eq!(column.name(), "user_name");
    assert!(column.is_renamed());

    assert_eq!(User::fields().name.name(), "name");
    assert_eq!(Account::fields().r#type.name(), "type");
    assert_eq!(Account::table().column("type").unwrap().name(), "type");
}

#[test]
fn column_flags() {
    let table = User::table();
    let id = table.column("id").unwrap();
    assert!(id.is_key() && id.is_identity());
    assert!(!id.is_insertable());
    assert_eq!(table.identity_column().map(|c| c.name()), Some("id"));

    let doc = Document::table();
    assert_eq!(doc.columns().len(), 4);
    assert!(doc.column("cached_html").is_none());
    assert_eq!(doc.column("created").unwrap().insert_override(), Some("CURRENT_TIMESTAMP"));
    assert!(!doc.column("created").unwrap().is_updatable());
    assert_eq!(
        doc.concurrency_columns().map(|c| c.name()).collect::<Vec<_>>(),
        ["version"]
    );

    let keys: Vec<_> = OrderLine::table().key_columns().map(|c| c.name()).collect();
    assert_eq!(keys, ["order_id", "line_no"]);

    let audit = AuditEntry::table();
    assert!(!audit.has_key());
    let logged = audit.column("logged_at").unwrap();
    assert!(!logged.is_insertable() && !logged.is_updatable() && logged.is_selectable());

    assert!(!Account::table().column("password_hash").unwrap().is_selectable());
}

#[test]
fn value_capture() {
    let mut user = User::new("Ann", 30);
    user.id = 12;
    assert_eq!(user.value("id"), Some(Value::Int(12)));
    assert_eq!(user.value("name"), Some(Value::from("Ann")));
    assert_eq!(user.value("email"), Some(Value::Null));
    assert_eq!(user.value("active"), Some(Value::Bool(true)));
    assert_eq!(user.value("user_name"), None);

    let doc = Document {
        id: 1,
        title: "t".into(),
        version: 1,
        created: None,
        cached_html: Some("x".into()),
    };
    assert_eq!(doc.value("cached_html"), None);
}

#[test]
fn table_descriptor_is_shared() {
    assert!(std::ptr::eq(User::table(), User::table()));
}
