use super::common::{Target, column_list, insert_into, prefixed, value_row};
use crate::error::{Result, SleetError};
use crate::params::ParamSet;
use crate::schema::Column;
use crate::sql::{SQL, Token};
use crate::statement::Statement;
use crate::value::Value;
use sleet_types::Dialect;

/// Builds an insert-or-update on primary-key conflict.
///
/// - SQLite, PostgreSQL: `INSERT ... ON CONFLICT (<keys>) DO UPDATE SET`
/// - MySQL: `INSERT ... ON DUPLICATE KEY UPDATE`
/// - SQL Server: `MERGE INTO ... USING (VALUES ...) AS source`
///
/// Key columns are always inserted, even when they are identity columns.
#[derive(Debug)]
pub struct UpsertBuilder<'a> {
    target: Target<'a>,
    row: Result<Vec<Value>>,
}

impl<'a> UpsertBuilder<'a> {
    pub(crate) fn new(target: Target<'a>, row: Result<Vec<Value>>) -> Self {
        Self { target, row }
    }

    pub fn build(self) -> Result<Statement> {
        let row = self.row?;
        let table = &self.target.table;
        if !table.has_key() {
            return Err(SleetError::MissingKey {
                table: table.name().to_string(),
            });
        }

        let inserted: Vec<(usize, &Column)> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| column.is_key() || column.is_insertable())
            .collect();
        let keys: Vec<&Column> = table.key_columns().collect();
        let updated: Vec<&Column> = table.update_columns().collect();

        let mut params = ParamSet::new();
        let values = value_row(
            inserted.iter().map(|&(index, column)| (column, &row[index])),
            &mut params,
        );
        let columns = || column_list(inserted.iter().map(|(_, column)| *column));

        let sql = match self.target.dialect {
            Dialect::SQLite | Dialect::PostgreSQL => {
                let mut sql = insert_into(&self.target)
                    .append(columns())
                    .push(Token::VALUES)
                    .append(values)
                    .push(Token::ON)
                    .push(Token::CONFLICT)
                    .append(column_list(keys.iter().copied()))
                    .push(Token::DO);
                if updated.is_empty() {
                    sql.push_mut(Token::NOTHING);
                } else {
                    sql.push_mut(Token::UPDATE);
                    sql.push_mut(Token::SET);
                    sql.append_mut(assignments(&updated, |column| prefixed("excluded", column)));
                }
                sql
            }
            Dialect::MySQL => {
                let sql = insert_into(&self.target)
                    .append(columns())
                    .push(Token::VALUES)
                    .append(values)
                    .push(Token::ON)
                    .push(Token::DUPLICATE)
                    .push(Token::KEY)
                    .push(Token::UPDATE);
                if updated.is_empty() {
                    // no-op assignment keeps the existing row
                    let key = keys[0].ident();
                    sql.append(key.clone().push(Token::EQ).append(key))
                } else {
                    sql.append(assignments(&updated, |column| {
                        SQL::raw("VALUES(")
                            .append(column.ident())
                            .push(Token::RPAREN)
                    }))
                }
            }
            Dialect::SqlServer => {
                let on = SQL::join(
                    keys.iter().map(|key| {
                        prefixed("target", key)
                            .push(Token::EQ)
                            .append(prefixed("source", key))
                    }),
                    Token::AND,
                );
                let mut sql = SQL::token(Token::MERGE)
                    .push(Token::INTO)
                    .append(self.target.table_sql())
                    .push(Token::AS)
                    .append(SQL::raw("target"))
                    .push(Token::USING)
                    .append(SQL::token(Token::VALUES).append(values).parens())
                    .push(Token::AS)
                    .append(SQL::raw("source"))
                    .append(columns())
                    .push(Token::ON)
                    .append(on);
                if !updated.is_empty() {
                    sql.append_mut(
                        SQL::token(Token::WHEN)
                            .push(Token::MATCHED)
                            .push(Token::THEN)
                            .push(Token::UPDATE)
                            .push(Token::SET)
                            .append(assignments(&updated, |column| prefixed("source", column))),
                    );
                }
                sql.append_mut(
                    SQL::token(Token::WHEN)
                        .push(Token::NOT)
                        .push(Token::MATCHED)
                        .push(Token::THEN)
                        .push(Token::INSERT)
                        .append(columns())
                        .push(Token::VALUES)
                        .append(
                            SQL::comma_list(
                                inserted.iter().map(|(_, column)| prefixed("source", column)),
                            )
                            .parens(),
                        )
                        .push(Token::SEMI),
                );
                sql
            }
        };

        let statement = Statement::new(self.target.dialect, sql, params);
        crate::sleet_trace_statement!("upsert", statement);
        Ok(statement)
    }
}

/// `<col> = <update_sql>` for overridden columns, `<col> = incoming(<col>)`
/// for the rest.
fn assignments(columns: &[&Column], incoming: impl Fn(&Column) -> SQL) -> SQL {
    SQL::comma_list(columns.iter().map(|&column| {
        let rhs = match column.update_override() {
            Some(sql) => SQL::raw(sql.to_string()),
            None => incoming(column),
        };
        column.ident().push(Token::EQ).append(rhs)
    }))
}
