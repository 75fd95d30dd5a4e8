//! Built statements and their renderings.

use core::fmt;

use hashbrown::HashMap;
use sleet_types::Dialect;

use crate::params::ParamSet;
use crate::sql::SQL;
use crate::value::Value;

/// A statement ready to hand to a driver.
///
/// The SQL is kept as a dialect-agnostic fragment plus the dialect it was
/// built for; each rendering is produced on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    dialect: Dialect,
    sql: SQL,
    params: ParamSet,
}

/// SQL with positional placeholders and the values in binding order.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalSql {
    pub sql: String,
    pub values: Vec<Value>,
}

impl Statement {
    pub fn new(dialect: Dialect, sql: SQL, params: ParamSet) -> Self {
        Self {
            dialect,
            sql,
            params,
        }
    }

    #[inline]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// SQL text with named parameter markers (`@name` or `:name`).
    pub fn sql(&self) -> String {
        self.sql.to_sql(self.dialect)
    }

    #[inline]
    pub fn fragment(&self) -> &SQL {
        &self.sql
    }

    #[inline]
    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// Named SQL and its bindings.
    pub fn into_parts(self) -> (String, ParamSet) {
        (self.sql.to_sql(self.dialect), self.params)
    }

    /// SQL with the dialect's positional placeholders.
    ///
    /// Numbered placeholders (`$1`, `@P1`) are reused when a parameter
    /// appears more than once; with `?` the value is repeated instead.
    pub fn positional(&self) -> PositionalSql {
        let dialect = self.dialect;
        let mut values = Vec::with_capacity(self.params.len());
        let mut numbers: HashMap<String, usize> = HashMap::new();
        let mut sql = String::new();

        self.sql.write_with(dialect, &mut sql, |buf, name| {
            if dialect.uses_numbered_placeholders() {
                let number = match numbers.get(name) {
                    Some(&number) => number,
                    None => {
                        values.push(self.params.get(name).cloned().unwrap_or_default());
                        numbers.insert(name.to_string(), values.len());
                        values.len()
                    }
                };
                dialect.write_positional(buf, number);
            } else {
                values.push(self.params.get(name).cloned().unwrap_or_default());
                dialect.write_positional(buf, values.len());
            }
        });

        PositionalSql { sql, values }
    }

    /// SQL with every parameter inlined as a literal.
    ///
    /// Meant for logs and diagnostics; execute [`Statement::sql`] or
    /// [`Statement::positional`] instead.
    pub fn inline_sql(&self) -> String {
        let dialect = self.dialect;
        let mut sql = String::new();
        self.sql.write_with(dialect, &mut sql, |buf, name| {
            match self.params.get(name) {
                Some(value) => buf.push_str(&value.to_literal(dialect)),
                None => buf.push_str("NULL"),
            }
        });
        sql
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}
