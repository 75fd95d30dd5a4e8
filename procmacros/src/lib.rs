#![recursion_limit = "128"]

extern crate proc_macro;

mod entity;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Maps a struct with named fields to a table.
///
/// Generates a `<Struct>Fields` companion holding one `Field` handle per
/// mapped column, and an `Entity` impl exposing the table descriptor, the
/// field handles and per-property value capture.
///
/// # Attributes
///
/// Container: `#[table(name = "...", schema = "...")]`. The table name
/// defaults to the snake_case struct name.
///
/// Field: `#[column(...)]` accepting
/// - `name = "..."` column name (defaults to the field name)
/// - `key`, `identity`, `concurrency`
/// - `read_only`, `no_select`, `no_insert`, `no_update`
/// - `insert_sql = "..."`, `update_sql = "..."` raw SQL overrides
/// - `ignore` leaves the field unmapped
///
/// # Example
///
/// ```ignore
/// use sleet::Entity;
///
/// #[derive(Entity)]
/// #[table(name = "users")]
/// struct User {
///     #[column(key, identity)]
///     id: i64,
///     #[column(name = "user_name")]
///     name: String,
///     email: Option<String>,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(table, column))]
pub fn entity_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match entity::generate_entity(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
