use super::common::{Target, and_filter};
use crate::error::{Result, SleetError};
use crate::expr::{Expr, IntoExpr};
use crate::params::ParamSet;
use crate::sql::{SQL, Token};
use crate::statement::Statement;

/// Builds a `DELETE` statement. Without a predicate every row is deleted.
#[derive(Debug)]
pub struct DeleteBuilder<'a, F> {
    target: Target<'a>,
    fields: F,
    filter: Option<Expr>,
    pending: Option<SleetError>,
}

impl<'a, F: Clone> DeleteBuilder<'a, F> {
    pub(crate) fn new(target: Target<'a>, fields: F) -> Self {
        Self {
            target,
            fields,
            filter: None,
            pending: None,
        }
    }

    pub(crate) fn fail(mut self, err: SleetError) -> Self {
        self.pending.get_or_insert(err);
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
        let mut params = ParamSet::new();
        let mut sql = SQL::token(Token::DELETE)
            .push(Token::FROM)
            .append(self.target.table_sql());
        sql.append_mut(self.target.where_clause(self.filter.as_ref(), &mut params)?);

        let statement = Statement::new(self.target.dialect, sql, params);
        crate::sleet_trace_statement!("delete", statement);
        Ok(statement)
    }
}
