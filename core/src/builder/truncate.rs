use super::common::Target;
use crate::error::Result;
use crate::params::ParamSet;
use crate::sql::{SQL, Token};
use crate::statement::Statement;

/// Builds a statement removing every row of a table.
///
/// SQLite has no `TRUNCATE`; it gets an unfiltered `DELETE FROM` instead.
#[derive(Debug, Clone)]
pub struct TruncateBuilder<'a> {
    target: Target<'a>,
}

impl<'a> TruncateBuilder<'a> {
    pub(crate) fn new(target: Target<'a>) -> Self {
        Self { target }
    }

    pub fn build(self) -> Result<Statement> {
        let dialect = self.target.dialect;
        let head = if dialect.supports_truncate() {
            SQL::token(Token::TRUNCATE).push(Token::TABLE)
        } else {
            SQL::token(Token::DELETE).push(Token::FROM)
        };
        let sql = head.append(self.target.table_sql());

        let statement = Statement::new(dialect, sql, ParamSet::new());
        crate::sleet_trace_statement!("truncate", statement);
        Ok(statement)
    }
}
