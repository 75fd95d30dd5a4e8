//! CRUD statement builders.
//!
//! [`Sleet`] is the entry point. Every builder is lazy: nothing is
//! translated until `build()`, which returns a [`Statement`](crate::Statement)
//! or the first error met while building.
//!
//! ```ignore
//! let sleet = Sleet::new(Dialect::PostgreSQL);
//! let stmt = sleet
//!     .select::<User>()
//!     .r#where(|u| u.age.ge(18) & u.name.like("A%"))
//!     .order_by(User::fields().name.asc())
//!     .limit(10)
//!     .build()?;
//! ```

mod common;
mod count;
mod delete;
mod insert;
mod select;
mod truncate;
mod update;
mod upsert;

pub use count::CountBuilder;
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use truncate::TruncateBuilder;
pub use update::{SetValue, UpdateBuilder};
pub use upsert::UpsertBuilder;

use std::borrow::Cow;

use common::{Target, capture, key_predicate, row_predicate};
use sleet_types::Dialect;

use crate::config::SleetConfig;
use crate::error::Result;
use crate::schema::{Entity, Table};
use crate::statement::Statement;
use crate::value::Value;

/// Entry point for building statements with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Sleet {
    config: SleetConfig,
}

impl Sleet {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_config(SleetConfig::new(dialect))
    }

    pub fn with_config(config: SleetConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SleetConfig {
        &self.config
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    fn target<'a>(&self, table: &'a Table) -> Target<'a> {
        let table = match &self.config.default_schema {
            Some(schema) if table.schema().is_none() => {
                Cow::Owned(table.with_default_schema(schema))
            }
            _ => Cow::Borrowed(table),
        };
        Target {
            dialect: self.config.dialect,
            table,
        }
    }

    //--------------------------------------------------------------------------
    // SELECT
    //--------------------------------------------------------------------------

    /// `SELECT` over the entity's selectable columns.
    pub fn select<E: Entity>(&self) -> SelectBuilder<'static, E::Fields> {
        SelectBuilder::new(self.target(E::table()), E::fields(), self.config.alias_columns)
    }

    /// `SELECT` over a table descriptor without an entity type.
    pub fn select_table<'a>(&self, table: &'a Table) -> SelectBuilder<'a, ()> {
        SelectBuilder::new(self.target(table), (), self.config.alias_columns)
    }

    /// Select one row by its key values, given in key-column order.
    pub fn get<E, I>(&self, keys: I) -> Result<Statement>
    where
        E: Entity,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let filter = key_predicate(E::table(), keys.into_iter().map(Into::into).collect())?;
        self.select::<E>().filter(filter).build()
    }

    //--------------------------------------------------------------------------
    // INSERT
    //--------------------------------------------------------------------------

    pub fn insert<E: Entity>(&self, entity: &E) -> InsertBuilder<'static> {
        self.insert_many(std::slice::from_ref(entity))
    }

    /// Multi-row `INSERT`. An empty batch fails at build time.
    pub fn insert_many<E: Entity>(&self, entities: &[E]) -> InsertBuilder<'static> {
        let table = E::table();
        let rows = entities
            .iter()
            .map(|entity| capture(table, entity))
            .collect::<Result<Vec<_>>>();
        InsertBuilder::new(self.target(table), rows)
    }

    //--------------------------------------------------------------------------
    // UPDATE
    //--------------------------------------------------------------------------

    /// Update the entity's row, matched on key and concurrency-check columns.
    pub fn update<E: Entity>(&self, entity: &E) -> UpdateBuilder<'static, E::Fields> {
        let table = E::table();
        let builder = UpdateBuilder::new(self.target(table), E::fields());
        match capture(table, entity).and_then(|row| {
            let filter = row_predicate(table, &row)?;
            Ok((row, filter))
        }) {
            Ok((row, filter)) => builder.with_row(&row).filter(filter),
            Err(err) => builder.fail(err),
        }
    }

    /// Update with explicit assignments and predicate.
    pub fn update_where<E: Entity>(&self) -> UpdateBuilder<'static, E::Fields> {
        UpdateBuilder::new(self.target(E::table()), E::fields())
    }

    //--------------------------------------------------------------------------
    // DELETE
    //--------------------------------------------------------------------------

    /// Delete the entity's row, matched on key and concurrency-check columns.
    pub fn delete<E: Entity>(&self, entity: &E) -> DeleteBuilder<'static, E::Fields> {
        let table = E::table();
        let builder = DeleteBuilder::new(self.target(table), E::fields());
        match capture(table, entity).and_then(|row| row_predicate(table, &row)) {
            Ok(filter) => builder.filter(filter),
            Err(err) => builder.fail(err),
        }
    }

    /// Delete one row by its key values, given in key-column order.
    pub fn delete_by_key<E, I>(&self, keys: I) -> Result<Statement>
    where
        E: Entity,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let filter = key_predicate(E::table(), keys.into_iter().map(Into::into).collect())?;
        self.delete_where::<E>().filter(filter).build()
    }

    /// Delete with a predicate; without one every row is deleted.
    pub fn delete_where<E: Entity>(&self) -> DeleteBuilder<'static, E::Fields> {
        DeleteBuilder::new(self.target(E::table()), E::fields())
    }

    //--------------------------------------------------------------------------
    // UPSERT, COUNT, TRUNCATE
    //--------------------------------------------------------------------------

    /// Insert the entity, or update it when its key already exists.
    pub fn upsert<E: Entity>(&self, entity: &E) -> UpsertBuilder<'static> {
        let table = E::table();
        UpsertBuilder::new(self.target(table), capture(table, entity))
    }

    pub fn count<E: Entity>(&self) -> CountBuilder<'static, E::Fields> {
        CountBuilder::new(self.target(E::table()), E::fields())
    }

    pub fn truncate<E: Entity>(&self) -> TruncateBuilder<'static> {
        TruncateBuilder::new(self.target(E::table()))
    }
}
