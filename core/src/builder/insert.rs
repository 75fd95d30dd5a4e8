use super::common::{Target, column_list, insert_into, prefixed, value_row};
use crate::error::{Result, SleetError};
use crate::params::ParamSet;
use crate::schema::Column;
use crate::sql::{SQL, Token};
use crate::statement::Statement;
use crate::value::Value;
use sleet_types::Dialect;

/// Builds an `INSERT` statement for one or more captured rows.
///
/// Identity retrieval is on by default and depends on the dialect:
/// `RETURNING` (SQLite, PostgreSQL), `OUTPUT INSERTED` (SQL Server) or a
/// trailing `SELECT LAST_INSERT_ID()` (MySQL, single row only).
#[derive(Debug)]
pub struct InsertBuilder<'a> {
    target: Target<'a>,
    rows: Result<Vec<Vec<Value>>>,
    return_identity: bool,
}

impl<'a> InsertBuilder<'a> {
    pub(crate) fn new(target: Target<'a>, rows: Result<Vec<Vec<Value>>>) -> Self {
        Self {
            target,
            rows,
            return_identity: true,
        }
    }

    /// Whether to fetch the generated identity value back.
    pub fn return_identity(mut self, enabled: bool) -> Self {
        self.return_identity = enabled;
        self
    }

    pub fn build(self) -> Result<Statement> {
        let rows = self.rows?;
        if rows.is_empty() {
            return Err(SleetError::EmptyBatch);
        }

        let dialect = self.target.dialect;
        let table = &self.target.table;
        let mut params = ParamSet::new();
        let columns: Vec<(usize, &Column)> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| column.is_insertable())
            .collect();
        let identity = table
            .identity_column()
            .filter(|_| self.return_identity);

        let mut sql = insert_into(&self.target);

        if columns.is_empty() {
            match dialect {
                Dialect::MySQL => {
                    let empty = || SQL::token(Token::LPAREN).push(Token::RPAREN);
                    sql.append_mut(empty());
                    sql.push_mut(Token::VALUES);
                    sql.append_mut(SQL::comma_list(rows.iter().map(|_| empty())));
                }
                _ if rows.len() > 1 => {
                    return Err(SleetError::Schema(format!(
                        "table `{}` has no insertable columns; only one default row can be inserted",
                        table.name()
                    )));
                }
                _ => {
                    if let (Dialect::SqlServer, Some(identity)) = (dialect, identity) {
                        sql.append_mut(output_inserted(identity));
                    }
                    sql.push_mut(Token::DEFAULT);
                    sql.push_mut(Token::VALUES);
                }
            }
        } else {
            sql.append_mut(column_list(columns.iter().map(|(_, column)| *column)));
            if let (Dialect::SqlServer, Some(identity)) = (dialect, identity) {
                sql.append_mut(output_inserted(identity));
            }
            sql.push_mut(Token::VALUES);
            let values: Vec<SQL> = rows
                .iter()
                .map(|row| {
                    value_row(
                        columns.iter().map(|&(index, column)| (column, &row[index])),
                        &mut params,
                    )
                })
                .collect();
            sql.append_mut(SQL::comma_list(values));
        }

        if let Some(identity) = identity {
            match dialect {
                _ if dialect.supports_returning() => {
                    sql.push_mut(Token::RETURNING);
                    sql.append_mut(identity.ident());
                }
                Dialect::MySQL if rows.len() == 1 => {
                    sql.push_mut(Token::SEMI);
                    sql.push_mut(Token::SELECT);
                    sql.append_mut(SQL::raw("LAST_INSERT_ID()"));
                }
                // SQL Server already emitted OUTPUT INSERTED
                _ => {}
            }
        }

        let statement = Statement::new(dialect, sql, params);
        crate::sleet_trace_statement!("insert", statement);
        Ok(statement)
    }
}

/// `OUTPUT INSERTED.<identity>`
fn output_inserted(identity: &Column) -> SQL {
    SQL::token(Token::OUTPUT).append(prefixed("INSERTED", identity))
}
