use crate::common::rusqlite::{execute, query_i64, query_strings, setup_db};
use crate::common::{OrderLine, User};
use sleet::prelude::*;

fn sleet() -> Sleet {
    crate::common::init_tracing();
    Sleet::new(Dialect::SQLite)
}

fn insert_user(conn: &::rusqlite::Connection, user: &User) -> i64 {
    let stmt = sleet().insert(user).build().unwrap();
    query_i64(conn, &stmt.positional())
}

#[test]
fn insert_returns_generated_ids() {
    let conn = setup_db();
    let first = insert_user(&conn, &User::new("Ann", 30));
    let second = insert_user(&conn, &User::new("Bob", 17));
    assert_eq!((first, second), (1, 2));

    let count = sleet().count::<User>().build().unwrap();
    assert_eq!(query_i64(&conn, &count.positional()), 2);
}

#[test]
fn select_filters_and_orders() {
    let conn = setup_db();
    for (name, age) in [("Cid", 40), ("Ann", 30), ("Bob", 17), ("Abe", 65)] {
        insert_user(&conn, &User::new(name, age));
    }

    let stmt = sleet()
        .select::<User>()
        .r#where(|u| u.age.ge(18) & u.name.like("A%") | u.name.eq("Cid"))
        .order_by(User::fields().age.desc())
        .build()
        .unwrap();
    assert_eq!(
        query_strings(&conn, &stmt.positional(), "name"),
        ["Abe", "Cid", "Ann"]
    );

    let page = sleet()
        .select::<User>()
        .order_by(User::fields().name)
        .offset(1)
        .limit(2)
        .build()
        .unwrap();
    assert_eq!(query_strings(&conn, &page.positional(), "name"), ["Ann", "Bob"]);
}

#[test]
fn update_and_delete_by_entity() {
    let conn = setup_db();
    let mut user = User::new("Ann", 30);
    user.id = insert_user(&conn, &user);
    insert_user(&conn, &User::new("Bob", 17));

    user.email = Some("ann@example.com".into());
    let update = sleet().update(&user).build().unwrap();
    assert_eq!(execute(&conn, &update.positional()), 1);

    let with_email = sleet()
        .count::<User>()
        .r#where(|u| u.email.is_not_null())
        .build()
        .unwrap();
    assert_eq!(query_i64(&conn, &with_email.positional()), 1);

    let delete = sleet().delete(&user).build().unwrap();
    assert_eq!(execute(&conn, &delete.positional()), 1);

    let by_key = sleet().get::<User, _>([user.id]).unwrap();
    assert!(query_strings(&conn, &by_key.positional(), "name").is_empty());
}

#[test]
fn upsert_inserts_then_updates() {
    let conn = setup_db();
    let mut line = OrderLine {
        order_id: 1,
        line_no: 1,
        sku: "A-1".into(),
        quantity: 2,
    };
    execute(&conn, &sleet().upsert(&line).build().unwrap().positional());
    line.quantity = 5;
    execute(&conn, &sleet().upsert(&line).build().unwrap().positional());

    let count = sleet().count::<OrderLine>().build().unwrap();
    assert_eq!(query_i64(&conn, &count.positional()), 1);

    let quantity = sleet()
        .count::<OrderLine>()
        .r#where(|l| l.quantity.eq(5))
        .build()
        .unwrap();
    assert_eq!(query_i64(&conn, &quantity.positional()), 1);
}

#[test]
fn truncate_and_delete_where() {
    let conn = setup_db();
    for (name, age) in [("Ann", 30), ("Bob", 17), ("Cid", 12)] {
        insert_user(&conn, &User::new(name, age));
    }

    let minors = sleet()
        .delete_where::<User>()
        .r#where(|u| u.age.lt(18))
        .build()
        .unwrap();
    assert_eq!(execute(&conn, &minors.positional()), 2);

    let truncate = sleet().truncate::<User>().build().unwrap();
    assert_eq!(execute(&conn, &truncate.positional()), 1);
}

#[test]
fn named_parameters_execute_directly() {
    let conn = setup_db();
    insert_user(&conn, &User::new("Ann", 30));

    let stmt = sleet()
        .count::<User>()
        .r#where(|u| u.age.between(20, 40) & u.active)
        .build()
        .unwrap();
    let (sql, params) = stmt.into_parts();
    let values: Vec<(String, ::rusqlite::types::Value)> = params
        .iter()
        .map(|(name, value)| (format!("@{name}"), crate::common::rusqlite::to_sqlite(value)))
        .collect();
    let bound: Vec<(&str, &dyn ::rusqlite::ToSql)> = values
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn ::rusqlite::ToSql))
        .collect();
    let count: i64 = conn
        .query_row(&sql, bound.as_slice(), |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
