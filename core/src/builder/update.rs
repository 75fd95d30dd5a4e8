use std::borrow::Cow;

use super::common::{Target, and_filter};
use crate::error::{Result, SleetError, TranslateError};
use crate::expr::{Expr, Field, IntoExpr};
use crate::params::ParamSet;
use crate::sql::{SQL, Token};
use crate::statement::Statement;
use crate::value::Value;

/// Right-hand side of a `SET` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    /// Bound as a parameter.
    Value(Value),
    /// Written as-is, e.g. `version + 1`.
    Sql(Cow<'static, str>),
}

/// Builds an `UPDATE` statement.
#[derive(Debug)]
pub struct UpdateBuilder<'a, F> {
    target: Target<'a>,
    fields: F,
    sets: Vec<(Cow<'static, str>, SetValue)>,
    filter: Option<Expr>,
    pending: Option<SleetError>,
}

impl<'a, F: Clone> UpdateBuilder<'a, F> {
    pub(crate) fn new(target: Target<'a>, fields: F) -> Self {
        Self {
            target,
            fields,
            sets: Vec::new(),
            filter: None,
            pending: None,
        }
    }

    /// Assigns every updatable column from a captured row.
    pub(crate) fn with_row(mut self, row: &[Value]) -> Self {
        for (column, value) in self.target.table.columns().iter().zip(row) {
            if !column.is_updatable() {
                continue;
            }
            let value = match column.update_override() {
                Some(sql) => SetValue::Sql(Cow::Owned(sql.to_string())),
                None => SetValue::Value(value.clone()),
            };
            self.sets
                .push((Cow::Owned(column.property_name().to_string()), value));
        }
        self
    }

    pub(crate) fn fail(mut self, err: SleetError) -> Self {
        self.pending.get_or_insert(err);
        self
    }

    /// `SET <field> = <param>`
    pub fn set(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.sets
            .push((Cow::Borrowed(field.name()), SetValue::Value(value.into())));
        self
    }

    /// `SET <field> = <raw sql>`
    pub fn set_sql(mut self, field: Field, sql: impl Into<Cow<'static, str>>) -> Self {
        self.sets
            .push((Cow::Borrowed(field.name()), SetValue::Sql(sql.into())));
        self
    }

    /// Adds a predicate built from the field handles; repeated calls are
    /// ANDed together.
    pub fn r#where<R: IntoExpr>(self, predicate: impl FnOnce(F) -> R) -> Self {
        let expr = predicate(self.fields.clone()).into_expr();
        self.filter(expr)
    }

    /// Adds a ready-made predicate.
    pub fn filter(mut self, expr: impl IntoExpr) -> Self {
        self.filter = and_filter(self.filter.take(), expr.into_expr());
        self
    }

    pub fn build(self) -> Result<Statement> {
        if let Some(err) = self.pending {
            return Err(err);
        }
        let table = &self.target.table;
        if self.sets.is_empty() {
            return Err(SleetError::NoAssignments {
                table: table.name().to_string(),
            });
        }

        let mut params = ParamSet::new();
        let mut assignments = Vec::with_capacity(self.sets.len());
        for (name, value) in self.sets {
            let column = table
                .column(&name)
                .ok_or_else(|| TranslateError::UnknownField {
                    table: table.name().to_string(),
                    field: name.to_string(),
                })?;
            let rhs = match value {
                SetValue::Value(value) => SQL::param(params.add(column.property_name(), value)),
                SetValue::Sql(sql) => SQL::raw(sql),
            };
            assignments.push(column.ident().push(Token::EQ).append(rhs));
        }

        let mut sql = SQL::token(Token::UPDATE)
            .append(self.target.table_sql())
            .push(Token::SET)
            .append(SQL::comma_list(assignments));
        sql.append_mut(self.target.where_clause(self.filter.as_ref(), &mut params)?);

        let statement = Statement::new(self.target.dialect, sql, params);
        crate::sleet_trace_statement!("update", statement);
        Ok(statement)
    }
}
