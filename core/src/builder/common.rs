//! Pieces shared by the statement builders.

use std::borrow::Cow;

use sleet_types::Dialect;

use crate::error::{Result, SleetError};
use crate::expr::{Expr, and_all};
use crate::params::ParamSet;
use crate::schema::{Column, Entity, Table};
use crate::sql::{SQL, Token};
use crate::translate::Translator;
use crate::value::Value;

/// Dialect and table a builder renders against.
#[derive(Debug, Clone)]
pub(crate) struct Target<'a> {
    pub dialect: Dialect,
    pub table: Cow<'a, Table>,
}

impl Target<'_> {
    #[inline]
    pub fn table_sql(&self) -> SQL {
        self.table.sql()
    }

    /// `WHERE <predicate>`, or nothing when the predicate folds to true.
    pub fn where_clause(&self, filter: Option<&Expr>, params: &mut ParamSet) -> Result<SQL> {
        let Some(filter) = filter else {
            return Ok(SQL::empty());
        };
        let predicate = Translator::new(self.dialect, &self.table, params).translate(filter)?;
        if predicate.is_true() {
            return Ok(SQL::empty());
        }
        Ok(SQL::token(Token::WHERE).append(predicate.into_sql()))
    }
}

/// ANDs `next` onto an optional existing filter.
pub(crate) fn and_filter(current: Option<Expr>, next: Expr) -> Option<Expr> {
    Some(match current {
        Some(current) => current.and(next),
        None => next,
    })
}

/// Current values of every column, in column order.
pub(crate) fn capture<E: Entity>(table: &Table, entity: &E) -> Result<Vec<Value>> {
    table
        .columns()
        .iter()
        .map(|column| {
            entity
                .value(column.property_name())
                .ok_or_else(|| SleetError::MissingValue {
                    property: column.property_name().to_string(),
                })
        })
        .collect()
}

/// Key columns equal to the given values, in key order.
pub(crate) fn key_predicate(table: &Table, keys: Vec<Value>) -> Result<Expr> {
    let columns: Vec<&Column> = table.key_columns().collect();
    if columns.is_empty() {
        return Err(SleetError::MissingKey {
            table: table.name().to_string(),
        });
    }
    if columns.len() != keys.len() {
        return Err(SleetError::KeyCount {
            table: table.name().to_string(),
            expected: columns.len(),
            actual: keys.len(),
        });
    }
    Ok(and_all(
        columns
            .into_iter()
            .zip(keys)
            .map(|(column, key)| column_eq(column, key)),
    ))
}

/// Key and concurrency-check columns equal to the captured row.
pub(crate) fn row_predicate(table: &Table, row: &[Value]) -> Result<Expr> {
    if !table.has_key() {
        return Err(SleetError::MissingKey {
            table: table.name().to_string(),
        });
    }
    Ok(and_all(
        table
            .columns()
            .iter()
            .zip(row)
            .filter(|(column, _)| column.is_key() || column.is_concurrency_check())
            .map(|(column, value)| column_eq(column, value.clone())),
    ))
}

fn column_eq(column: &Column, value: Value) -> Expr {
    Expr::field(column.property_name().to_string()).compare(crate::BinaryOp::Eq, value)
}

/// `INSERT INTO <table>`
pub(crate) fn insert_into(target: &Target<'_>) -> SQL {
    SQL::token(Token::INSERT)
        .push(Token::INTO)
        .append(target.table_sql())
}

/// `(<col>, <col>, ...)`
pub(crate) fn column_list<'c>(columns: impl IntoIterator<Item = &'c Column>) -> SQL {
    SQL::comma_list(columns.into_iter().map(Column::ident)).parens()
}

/// `(<value>, ...)` for one row: literal overrides or bound parameters.
pub(crate) fn value_row<'c>(
    cells: impl IntoIterator<Item = (&'c Column, &'c Value)>,
    params: &mut ParamSet,
) -> SQL {
    SQL::comma_list(cells.into_iter().map(|(column, value)| {
        match column.insert_override() {
            Some(sql) => SQL::raw(sql.to_string()),
            None => SQL::param(params.add(column.property_name(), value.clone())),
        }
    }))
    .parens()
}

/// `<prefix>.<column>`, e.g. `excluded."name"` or `INSERTED.[id]`.
pub(crate) fn prefixed(prefix: &'static str, column: &Column) -> SQL {
    SQL::raw(prefix).push(Token::DOT).append(column.ident())
}
