use thiserror::Error;

/// Errors raised while turning a predicate AST into SQL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A field that is not mapped to any column of the table
    #[error("unknown field `{field}` on table `{table}`")]
    UnknownField { table: String, field: String },

    /// A constant that is not a boolean used where a predicate is expected
    #[error("constant {0} cannot be used as a predicate")]
    NonBooleanPredicate(String),

    /// Ordering comparison against NULL (`<`, `<=`, `>`, `>=`)
    #[error("cannot apply `{0}` to NULL")]
    NullOrdering(&'static str),

    /// Two constants whose values cannot be compared
    #[error("cannot compare constants {left} and {right}")]
    IncomparableConstants { left: String, right: String },

    /// A marker call whose target is not a column
    #[error("{marker} requires a column as its target")]
    MarkerTarget { marker: &'static str },

    /// A raw SQL template referencing an argument that was not supplied
    #[error("raw sql references argument {{{index}}} but only {count} were given")]
    SqlEvalArgument { index: usize, count: usize },

    /// An expression shape the translator does not understand
    #[error("unsupported expression: {0}")]
    Unsupported(String),
}

#[derive(Debug, Error)]
pub enum SleetError {
    /// Predicate translation failed
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    /// Invalid table or column metadata
    #[error("Schema error: {0}")]
    Schema(String),

    /// Operation needs key columns but the table has none
    #[error("Table `{table}` has no key columns")]
    MissingKey { table: String },

    /// Wrong number of key values supplied
    #[error("Table `{table}` has {expected} key column(s), got {actual} value(s)")]
    KeyCount {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Update with nothing to set
    #[error("No assignable columns for update of `{table}`")]
    NoAssignments { table: String },

    /// Multi-row insert with no rows
    #[error("Cannot build a statement for an empty batch")]
    EmptyBatch,

    /// Entity did not produce a value for a mapped column
    #[error("Entity has no value for property `{property}`")]
    MissingValue { property: String },

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SleetError {
    fn from(err: toml::de::Error) -> Self {
        SleetError::Config(err.to_string())
    }
}

/// Result type for statement generation
pub type Result<T> = std::result::Result<T, SleetError>;
