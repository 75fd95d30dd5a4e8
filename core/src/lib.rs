//! Core of sleet: SQL generation for CRUD statements.
//!
//! The pieces, bottom-up:
//!
//! - [`Value`] and [`ParamSet`]: bound values and their unique names
//! - [`Table`] / [`Column`]: attribute metadata, usually produced by
//!   `#[derive(Entity)]`
//! - [`Expr`]: the predicate AST built from [`Field`] handles
//! - [`Translator`]: predicate AST to SQL fragment, with constant folding
//! - [`Sleet`] and the statement builders: select, insert, update, delete,
//!   upsert, count and truncate, each producing a [`Statement`]

pub mod builder;
pub mod config;
pub mod error;
pub mod expr;
pub mod params;
pub mod schema;
pub mod sql;
pub mod statement;
pub mod tracing;
pub mod translate;
pub mod value;

pub use builder::{
    CountBuilder, DeleteBuilder, InsertBuilder, SelectBuilder, SetValue, Sleet, TruncateBuilder,
    UpdateBuilder, UpsertBuilder,
};
pub use config::SleetConfig;
pub use error::{Result, SleetError, TranslateError};
pub use expr::{
    BinaryOp, Expr, Field, IntoExpr, Marker, OrderBy, and_all, cond, or_any, sql_eval,
    sql_eval_with, val,
};
pub use params::ParamSet;
pub use schema::{Column, Entity, Table, TableBuilder};
pub use sleet_types::Dialect;
pub use sql::{SQL, SQLChunk, Token};
pub use statement::{PositionalSql, Statement};
pub use translate::{Predicate, Translator};
pub use value::Value;
