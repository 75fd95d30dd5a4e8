//! # sleet
//!
//! Builds SQL for CRUD statements from entity metadata and predicate
//! expressions, for SQLite, PostgreSQL, MySQL and SQL Server.
//!
//! ## Quick Start
//!
//! ```rust
//! use sleet::prelude::*;
//!
//! #[derive(Entity)]
//! #[table(name = "users")]
//! struct User {
//!     #[column(key, identity)]
//!     id: i64,
//!     #[column(name = "user_name")]
//!     name: String,
//!     age: i32,
//! }
//!
//! # fn main() -> sleet::Result<()> {
//! let sleet = Sleet::new(Dialect::PostgreSQL);
//!
//! let stmt = sleet
//!     .select::<User>()
//!     .r#where(|u| u.age.ge(18) & u.name.like("A%"))
//!     .limit(10)
//!     .build()?;
//!
//! assert_eq!(
//!     stmt.positional().sql,
//!     r#"SELECT "id", "user_name" AS "name", "age" FROM "users" WHERE "age" >= $1 AND "user_name" LIKE $2 LIMIT 10"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialects
//!
//! | Dialect    | Identifiers   | Named    | Positional | Booleans        |
//! |------------|---------------|----------|------------|-----------------|
//! | SQLite     | `"name"`      | `@name`  | `?`        | `1` / `0`       |
//! | PostgreSQL | `"name"`      | `:name`  | `$1`       | `TRUE` / `FALSE`|
//! | MySQL      | `` `name` ``  | `:name`  | `?`        | `TRUE` / `FALSE`|
//! | SQL Server | `[name]`      | `@name`  | `@P1`      | `1` / `0`       |

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as sleet;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for sleet operations
pub use sleet_core::error::Result;

/// Derive macro mapping a struct to a table, and the trait it implements
pub use sleet_core::Entity;
pub use sleet_macros::Entity;

/// Database dialect enum
pub use sleet_types::Dialect;

/// Statement builder entry point and configuration
pub use sleet_core::{Sleet, SleetConfig, Statement};

/// Error types
pub mod error {
    pub use sleet_core::error::{SleetError, TranslateError};
}

// =============================================================================
// Core module - shared functionality
// =============================================================================

/// Everything sleet generates SQL with.
///
/// # Module Structure
///
/// - **Schema**: `Table`, `Column`, `TableBuilder`, the `Entity` trait
/// - **Expressions**: `Expr`, `Field`, `Marker`, `sql_eval`, `and_all`, `or_any`
/// - **SQL**: `SQL`, `SQLChunk`, `Token`, `Statement`, `ParamSet`
/// - **Builders**: `SelectBuilder`, `InsertBuilder`, `UpdateBuilder`, ...
///
/// Derived entities refer to this module, so its paths are stable.
pub mod core {
    pub use sleet_core::*;
}

// =============================================================================
// Prelude
// =============================================================================

/// Glob-import for the common surface.
///
/// ```rust
/// use sleet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Entity;
    pub use sleet_core::{
        Dialect, Expr, Field, IntoExpr, OrderBy, SetValue, Sleet, SleetConfig, Statement, Table,
        Value, and_all, cond, or_any, sql_eval, sql_eval_with, val,
    };
}
