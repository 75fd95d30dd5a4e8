use super::common::{Target, and_filter};
use crate::error::{Result, SleetError, TranslateError};
use crate::expr::{Expr, IntoExpr, OrderBy};
use crate::params::ParamSet;
use crate::sql::{SQL, Token};
use crate::statement::Statement;
use sleet_types::Dialect;

/// Largest row count MySQL accepts in `LIMIT`, used when only an offset is set.
const MYSQL_NO_LIMIT: &str = "18446744073709551615";

/// Builds a `SELECT` statement.
#[derive(Debug, Clone)]
pub struct SelectBuilder<'a, F> {
    target: Target<'a>,
    fields: F,
    alias_columns: bool,
    filter: Option<Expr>,
    order: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl<'a, F: Clone> SelectBuilder<'a, F> {
    pub(crate) fn new(target: Target<'a>, fields: F, alias_columns: bool) -> Self {
        Self {
            target,
            fields,
            alias_columns,
            filter: None,
            order: Vec::new(),
            limit: None,
            offset: None,
        }
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

    /// Adds an `ORDER BY` term after any existing ones.
    pub fn order_by(mut self, order: impl Into<OrderBy>) -> Self {
        self.order.push(order.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn build(self) -> Result<Statement> {
        let table = &self.target.table;
        let mut params = ParamSet::new();

        let columns: Vec<SQL> = table
            .select_columns()
            .map(|column| {
                let sql = column.ident();
                if self.alias_columns && column.is_renamed() {
                    sql.push(Token::AS)
                        .append(SQL::ident(column.property_name().to_string()))
                } else {
                    sql
                }
            })
            .collect();
        if columns.is_empty() {
            return Err(SleetError::Schema(format!(
                "table `{}` has no selectable columns",
                table.name()
            )));
        }

        let mut sql = SQL::token(Token::SELECT)
            .append(SQL::comma_list(columns))
            .push(Token::FROM)
            .append(self.target.table_sql());
        // SQL Server rejects `FETCH NEXT 0 ROWS`; an empty page becomes a false filter.
        let empty_page = self.target.dialect == Dialect::SqlServer && self.limit == Some(0);
        let filter = if empty_page {
            and_filter(self.filter.clone(), crate::expr::val(false))
        } else {
            self.filter.clone()
        };
        sql.append_mut(self.target.where_clause(filter.as_ref(), &mut params)?);
        sql.append_mut(self.order_clause()?);
        if !empty_page {
            sql.append_mut(self.paging());
        }

        let statement = Statement::new(self.target.dialect, sql, params);
        crate::sleet_trace_statement!("select", statement);
        Ok(statement)
    }

    fn order_clause(&self) -> Result<SQL> {
        if self.order.is_empty() {
            return Ok(SQL::empty());
        }
        let mut terms = Vec::with_capacity(self.order.len());
        for order in &self.order {
            let column = self.target.table.column(order.field).ok_or_else(|| {
                TranslateError::UnknownField {
                    table: self.target.table.name().to_string(),
                    field: order.field.to_string(),
                }
            })?;
            let direction = if order.descending {
                Token::DESC
            } else {
                Token::ASC
            };
            terms.push(column.ident().push(direction));
        }
        Ok(SQL::token(Token::ORDER)
            .push(Token::BY)
            .append(SQL::comma_list(terms)))
    }

    fn paging(&self) -> SQL {
        let number = |n: u64| SQL::raw(n.to_string());
        let (limit, offset) = (self.limit, self.offset);
        if limit.is_none() && offset.is_none() {
            return SQL::empty();
        }

        match self.target.dialect {
            Dialect::SqlServer => {
                let mut sql = SQL::empty();
                if self.order.is_empty() {
                    sql.append_mut(
                        SQL::token(Token::ORDER)
                            .push(Token::BY)
                            .append(SQL::raw("(SELECT NULL)")),
                    );
                }
                sql.append_mut(
                    SQL::token(Token::OFFSET)
                        .append(number(offset.unwrap_or(0)))
                        .push(Token::ROWS),
                );
                if let Some(limit) = limit {
                    sql.append_mut(
                        SQL::token(Token::FETCH)
                            .push(Token::NEXT)
                            .append(number(limit))
                            .push(Token::ROWS)
                            .push(Token::ONLY),
                    );
                }
                sql
            }
            dialect => {
                let limit = match (limit, dialect) {
                    (Some(limit), _) => Some(number(limit)),
                    (None, Dialect::SQLite) => Some(SQL::raw("-1")),
                    (None, Dialect::MySQL) => Some(SQL::raw(MYSQL_NO_LIMIT)),
                    (None, _) => None,
                };
                let mut sql = SQL::empty();
                if let Some(limit) = limit {
                    sql.append_mut(SQL::token(Token::LIMIT).append(limit));
                }
                if let Some(offset) = offset {
                    sql.append_mut(SQL::token(Token::OFFSET).append(number(offset)));
                }
                sql
            }
        }
    }
}
