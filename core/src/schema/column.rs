use std::borrow::Cow;

use crate::sql::SQL;

/// Column descriptor: how one entity field maps to a SQL column.
///
/// `name` is the SQL column name; `property` is the Rust-side name used by
/// predicates ([`Field`](crate::Field)) and by [`Entity::value`](crate::Entity::value).
/// They are equal unless the column was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: Cow<'static, str>,
    property: Cow<'static, str>,
    key: bool,
    identity: bool,
    select: bool,
    insert: bool,
    update: bool,
    insert_sql: Option<Cow<'static, str>>,
    update_sql: Option<Cow<'static, str>>,
    concurrency_check: bool,
}

impl Column {
    /// Creates a selectable, insertable, updatable column whose property
    /// name equals its column name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self {
            property: name.clone(),
            name,
            key: false,
            identity: false,
            select: true,
            insert: true,
            update: true,
            insert_sql: None,
            update_sql: None,
            concurrency_check: false,
        }
    }

    /// Sets the Rust-side property name.
    pub fn property(mut self, property: impl Into<Cow<'static, str>>) -> Self {
        self.property = property.into();
        self
    }

    /// Marks the column as part of the primary key.
    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// Marks the column as generated by the database on insert.
    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    /// Neither inserted nor updated.
    pub fn read_only(mut self) -> Self {
        self.insert = false;
        self.update = false;
        self
    }

    pub fn no_select(mut self) -> Self {
        self.select = false;
        self
    }

    pub fn no_insert(mut self) -> Self {
        self.insert = false;
        self
    }

    pub fn no_update(mut self) -> Self {
        self.update = false;
        self
    }

    /// Raw SQL written into `VALUES (...)` instead of a parameter.
    pub fn insert_sql(mut self, sql: impl Into<Cow<'static, str>>) -> Self {
        self.insert_sql = Some(sql.into());
        self
    }

    /// Raw SQL written into `SET col = ...` instead of a parameter.
    pub fn update_sql(mut self, sql: impl Into<Cow<'static, str>>) -> Self {
        self.update_sql = Some(sql.into());
        self
    }

    /// Includes the column's current value in the WHERE clause of entity
    /// updates and deletes.
    pub fn concurrency_check(mut self) -> Self {
        self.concurrency_check = true;
        self
    }

    // ==================== accessors ====================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property
    }

    /// Column name as a SQL identifier chunk.
    pub(crate) fn ident(&self) -> SQL {
        SQL::ident(self.name.clone())
    }

    #[inline]
    pub const fn is_key(&self) -> bool {
        self.key
    }

    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.identity
    }

    #[inline]
    pub const fn is_selectable(&self) -> bool {
        self.select
    }

    #[inline]
    pub const fn is_concurrency_check(&self) -> bool {
        self.concurrency_check
    }

    pub fn insert_override(&self) -> Option<&str> {
        self.insert_sql.as_deref()
    }

    pub fn update_override(&self) -> Option<&str> {
        self.update_sql.as_deref()
    }

    /// Written by INSERT: insert-eligible and not generated by the database.
    pub const fn is_insertable(&self) -> bool {
        self.insert && !self.identity
    }

    /// Written by UPDATE ... SET.
    ///
    /// Keys and identities never are. A concurrency column is only when it
    /// carries an `update_sql` override (e.g. `version + 1`).
    pub fn is_updatable(&self) -> bool {
        self.update
            && !self.key
            && !self.identity
            && (!self.concurrency_check || self.update_sql.is_some())
    }

    /// Whether the SELECT list needs `AS <property>`.
    pub fn is_renamed(&self) -> bool {
        self.name != self.property
    }
}
