//! Unified database dialect enum
//!
//! A single source of truth for how each supported database spells
//! identifiers, parameters and literals. Every rendering decision that
//! differs between databases goes through a method on [`Dialect`].

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use core::fmt::Write;

/// SQL dialect for database-specific rendering
///
/// # Examples
///
/// ```
/// use sleet_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.uses_numbered_placeholders());
/// assert_eq!(dialect.quote_ident("user"), "\"user\"");
///
/// let mssql = Dialect::SqlServer;
/// assert_eq!(mssql.quote_ident("user"), "[user]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - `"ident"`, `@name` parameters, `?` positional placeholders
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "sqlite3"))]
    SQLite,

    /// PostgreSQL - `"ident"`, `:name` parameters, `$1, $2, ...` placeholders
    #[cfg_attr(feature = "serde", serde(alias = "postgres", alias = "pg"))]
    PostgreSQL,

    /// MySQL - `` `ident` ``, `:name` parameters, `?` positional placeholders
    #[cfg_attr(feature = "serde", serde(alias = "mariadb"))]
    MySQL,

    /// SQL Server - `[ident]`, `@name` parameters, `@P1, @P2, ...` placeholders
    #[cfg_attr(feature = "serde", serde(alias = "mssql", alias = "tsql"))]
    SqlServer,
}

impl Dialect {
    /// All supported dialects, in declaration order.
    pub const ALL: [Dialect; 4] = [
        Dialect::SQLite,
        Dialect::PostgreSQL,
        Dialect::MySQL,
        Dialect::SqlServer,
    ];

    /// Returns `true` if this dialect uses numbered placeholders.
    ///
    /// Numbered placeholders let a repeated parameter reuse its number;
    /// `?` placeholders need the value repeated for every occurrence.
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL | Dialect::SqlServer)
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"sqlite3"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    /// - SQL Server: `"sqlserver"`, `"mssql"`, `"tsql"`
    ///
    /// ```
    /// use sleet_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("MSSQL"), Some(Dialect::SqlServer));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        const ALIASES: [(&str, Dialect); 10] = [
            ("sqlite", Dialect::SQLite),
            ("sqlite3", Dialect::SQLite),
            ("postgresql", Dialect::PostgreSQL),
            ("postgres", Dialect::PostgreSQL),
            ("pg", Dialect::PostgreSQL),
            ("mysql", Dialect::MySQL),
            ("mariadb", Dialect::MySQL),
            ("sqlserver", Dialect::SqlServer),
            ("mssql", Dialect::SqlServer),
            ("tsql", Dialect::SqlServer),
        ];

        ALIASES
            .iter()
            .find(|(alias, _)| s.eq_ignore_ascii_case(alias))
            .map(|(_, dialect)| *dialect)
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
            Dialect::SqlServer => "sqlserver",
        }
    }

    // ==================== identifiers ====================

    /// Quote an identifier, escaping the closing quote character.
    #[must_use]
    pub fn quote_ident(&self, name: &str) -> String {
        let mut buf = String::with_capacity(name.len() + 2);
        self.write_ident(&mut buf, name);
        buf
    }

    /// Quote `schema.name`, each part escaped on its own.
    #[must_use]
    pub fn quote_qualified(&self, schema: Option<&str>, name: &str) -> String {
        let mut buf = String::with_capacity(name.len() + 8);
        if let Some(schema) = schema {
            self.write_ident(&mut buf, schema);
            buf.push('.');
        }
        self.write_ident(&mut buf, name);
        buf
    }

    /// Write a quoted identifier into `buf`.
    pub fn write_ident(&self, buf: &mut String, name: &str) {
        let (open, close) = self.ident_quotes();
        buf.push(open);
        for ch in name.chars() {
            if ch == close {
                buf.push(close);
            }
            buf.push(ch);
        }
        buf.push(close);
    }

    const fn ident_quotes(&self) -> (char, char) {
        match self {
            Dialect::SQLite | Dialect::PostgreSQL => ('"', '"'),
            Dialect::MySQL => ('`', '`'),
            Dialect::SqlServer => ('[', ']'),
        }
    }

    // ==================== parameters ====================

    /// Marker character that prefixes a named parameter.
    #[must_use]
    pub const fn param_marker(&self) -> char {
        match self {
            Dialect::SQLite | Dialect::SqlServer => '@',
            Dialect::PostgreSQL | Dialect::MySQL => ':',
        }
    }

    /// Write a named parameter marker such as `@age` or `:age`.
    pub fn write_named_param(&self, buf: &mut String, name: &str) {
        buf.push(self.param_marker());
        buf.push_str(name);
    }

    /// Write a positional placeholder for the given 1-based index.
    ///
    /// - PostgreSQL: `$1`, `$2`, `$3`
    /// - SQL Server: `@P1`, `@P2`, `@P3`
    /// - SQLite/MySQL: `?`
    pub fn write_positional(&self, buf: &mut String, index: usize) {
        match self {
            Dialect::PostgreSQL => {
                let _ = write!(buf, "${index}");
            }
            Dialect::SqlServer => {
                let _ = write!(buf, "@P{index}");
            }
            Dialect::SQLite | Dialect::MySQL => buf.push('?'),
        }
    }

    // ==================== literals ====================

    /// Boolean literal in a value context (`VALUES (...)`, `SET x = ...`).
    #[must_use]
    pub const fn bool_literal(&self, value: bool) -> &'static str {
        match (self, value) {
            (Dialect::SQLite | Dialect::SqlServer, true) => "1",
            (Dialect::SQLite | Dialect::SqlServer, false) => "0",
            (Dialect::PostgreSQL | Dialect::MySQL, true) => "TRUE",
            (Dialect::PostgreSQL | Dialect::MySQL, false) => "FALSE",
        }
    }

    /// Boolean literal in a predicate context (`WHERE ...`).
    ///
    /// SQL Server has no boolean expressions of type bit, so a folded
    /// predicate is spelled as a tautology or contradiction.
    #[must_use]
    pub const fn bool_predicate(&self, value: bool) -> &'static str {
        match (self, value) {
            (Dialect::SqlServer, true) => "(1=1)",
            (Dialect::SqlServer, false) => "(1=0)",
            _ => self.bool_literal(value),
        }
    }

    /// Quote a string literal.
    #[must_use]
    pub fn string_literal(&self, value: &str) -> String {
        let mut buf = String::with_capacity(value.len() + 2);
        buf.push('\'');
        for ch in value.chars() {
            match ch {
                '\'' => buf.push_str("''"),
                '\\' if matches!(self, Dialect::MySQL) => buf.push_str("\\\\"),
                _ => buf.push(ch),
            }
        }
        buf.push('\'');
        buf
    }

    /// Timestamp literal. Fractional seconds are rendered only when non-zero.
    #[must_use]
    pub fn timestamp_literal(&self, value: &NaiveDateTime) -> String {
        let separator = if matches!(self, Dialect::SqlServer) {
            "T"
        } else {
            " "
        };
        let mut text = value
            .format(&format!("%Y-%m-%d{separator}%H:%M:%S"))
            .to_string();
        let nanos = value.nanosecond() % 1_000_000_000;
        if nanos != 0 {
            match self {
                Dialect::SqlServer => {
                    let _ = write!(text, ".{:07}", nanos / 100);
                }
                _ => {
                    let _ = write!(text, ".{:06}", nanos / 1_000);
                }
            }
        }

        match self {
            Dialect::SQLite => format!("'{text}'"),
            Dialect::PostgreSQL | Dialect::MySQL => format!("TIMESTAMP '{text}'"),
            Dialect::SqlServer => format!("CAST('{text}' AS DATETIME2)"),
        }
    }

    /// Date literal.
    #[must_use]
    pub fn date_literal(&self, value: &NaiveDate) -> String {
        let text = value.format("%Y-%m-%d");
        match self {
            Dialect::SQLite => format!("'{text}'"),
            Dialect::PostgreSQL | Dialect::MySQL => format!("DATE '{text}'"),
            Dialect::SqlServer => format!("CAST('{text}' AS DATE)"),
        }
    }

    /// Binary literal.
    #[must_use]
    pub fn blob_literal(&self, bytes: &[u8]) -> String {
        let mut buf = String::with_capacity(bytes.len() * 2 + 12);
        match self {
            Dialect::SQLite | Dialect::MySQL => {
                buf.push_str("X'");
                for b in bytes {
                    let _ = write!(buf, "{b:02X}");
                }
                buf.push('\'');
            }
            Dialect::PostgreSQL => {
                buf.push_str("'\\x");
                for b in bytes {
                    let _ = write!(buf, "{b:02x}");
                }
                buf.push_str("'::bytea");
            }
            Dialect::SqlServer => {
                buf.push_str("0x");
                for b in bytes {
                    let _ = write!(buf, "{b:02X}");
                }
            }
        }
        buf
    }

    // ==================== capabilities ====================

    /// Whether `INSERT ... RETURNING` is available.
    #[must_use]
    pub const fn supports_returning(&self) -> bool {
        matches!(self, Dialect::SQLite | Dialect::PostgreSQL)
    }

    /// Whether `TRUNCATE TABLE` is available.
    #[must_use]
    pub const fn supports_truncate(&self) -> bool {
        !matches!(self, Dialect::SQLite)
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}
