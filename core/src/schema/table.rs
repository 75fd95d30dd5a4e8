use std::borrow::Cow;

use super::Column;
use crate::error::{Result, SleetError};
use crate::sql::SQL;

/// Table descriptor: a name, an optional schema and ordered columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: Cow<'static, str>,
    schema: Option<Cow<'static, str>>,
    columns: Vec<Column>,
}

impl Table {
    /// Starts a validated table definition.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            schema: None,
            columns: Vec::new(),
        }
    }

    /// Assembles a table without validation.
    ///
    /// Used by `#[derive(Entity)]`, which rejects duplicate names at
    /// compile time. Lookups return the first matching column.
    #[doc(hidden)]
    pub fn from_parts(
        name: impl Into<Cow<'static, str>>,
        schema: Option<&'static str>,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.map(Cow::Borrowed),
            columns,
        }
    }

    /// Returns a copy placed in `schema` unless it already names one.
    pub fn with_default_schema(&self, schema: &str) -> Table {
        let mut table = self.clone();
        if table.schema.is_none() {
            table.schema = Some(Cow::Owned(schema.to_string()));
        }
        table
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Table name as a (possibly schema-qualified) SQL chunk.
    pub(crate) fn sql(&self) -> SQL {
        SQL::qualified(self.schema.clone(), self.name.clone())
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks a column up by its property name.
    pub fn column_by_property(&self, property: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.property_name() == property)
    }

    /// Looks a column up by property name, then by SQL column name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_by_property(name)
            .or_else(|| self.columns.iter().find(|c| c.name() == name))
    }

    pub fn key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_key())
    }

    pub fn select_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_selectable())
    }

    pub fn insert_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_insertable())
    }

    pub fn update_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_updatable())
    }

    pub fn concurrency_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_concurrency_check())
    }

    /// The first database-generated column, if any.
    pub fn identity_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_identity())
    }

    pub fn has_key(&self) -> bool {
        self.columns.iter().any(Column::is_key)
    }
}

/// Builder for [`Table`] that validates column names.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: Cow<'static, str>,
    schema: Option<Cow<'static, str>>,
    columns: Vec<Column>,
}

impl TableBuilder {
    pub fn schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Validates and builds the table.
    ///
    /// Fails on an empty name, no columns, or a duplicate column or
    /// property name.
    pub fn build(self) -> Result<Table> {
        if self.name.is_empty() {
            return Err(SleetError::Schema("table name is empty".into()));
        }
        if self.columns.is_empty() {
            return Err(SleetError::Schema(format!(
                "table `{}` has no columns",
                self.name
            )));
        }
        for (i, column) in self.columns.iter().enumerate() {
            let earlier = &self.columns[..i];
            if earlier.iter().any(|c| c.name() == column.name()) {
                return Err(SleetError::Schema(format!(
                    "duplicate column `{}` in table `{}`",
                    column.name(),
                    self.name
                )));
            }
            if earlier
                .iter()
                .any(|c| c.property_name() == column.property_name())
            {
                return Err(SleetError::Schema(format!(
                    "duplicate property `{}` in table `{}`",
                    column.property_name(),
                    self.name
                )));
            }
        }

        Ok(Table {
            name: self.name,
            schema: self.schema,
            columns: self.columns,
        })
    }
}
