//! Dialect-agnostic SQL fragments.

mod chunk;
mod tokens;

pub use chunk::*;
pub use tokens::*;

use std::borrow::Cow;

use sleet_types::Dialect;
use smallvec::SmallVec;

/// SQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical SQL fragments
/// without heap allocation. Nothing is dialect specific until the fragment
/// is rendered with [`SQL::to_sql`] or [`SQL::write_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SQL {
    pub chunks: SmallVec<[SQLChunk; 8]>,
}

impl SQL {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with a quoted identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL naming a table, optionally schema-qualified
    #[inline]
    pub fn qualified(
        schema: Option<impl Into<Cow<'static, str>>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Qualified {
                schema: schema.map(Into::into),
                name: name.into(),
            }],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a named parameter marker
    #[inline]
    pub fn param(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Param(name.into())],
        }
    }

    /// Creates SQL with a folded predicate literal
    #[inline]
    pub fn bool(value: bool) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Bool(value)],
        }
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL>) -> Self {
        self.append_mut(other);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL>) {
        let other = other.into();
        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk>) {
        self.chunks.push(chunk.into());
    }

    /// Joins fragments with a separator token.
    pub fn join<T>(sqls: T, separator: Token) -> SQL
    where
        T: IntoIterator,
        T::Item: Into<SQL>,
    {
        let mut result = SQL::empty();
        for (i, sql) in sqls.into_iter().enumerate() {
            if i > 0 {
                result.push_mut(separator);
            }
            result.append_mut(sql);
        }
        result
    }

    /// Comma separated list.
    #[inline]
    pub fn comma_list<T>(sqls: T) -> SQL
    where
        T: IntoIterator,
        T::Item: Into<SQL>,
    {
        Self::join(sqls, Token::COMMA)
    }

    /// Wrap in parentheses
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Names of the parameters referenced, in order of appearance.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            SQLChunk::Param(name) => Some(name.as_ref()),
            _ => None,
        })
    }

    // ==================== output generation ====================

    /// Renders with the dialect's named parameter markers.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut buf = String::with_capacity(self.chunks.len() * 8);
        self.write_with(dialect, &mut buf, |buf, name| {
            dialect.write_named_param(buf, name)
        });
        buf
    }

    /// Renders into `buf`, letting `param` write each parameter.
    pub fn write_with(
        &self,
        dialect: Dialect,
        buf: &mut String,
        mut param: impl FnMut(&mut String, &str),
    ) {
        for (i, chunk) in self.chunks.iter().enumerate() {
            chunk.write(dialect, buf, &mut param);
            if self.needs_space(i) {
                buf.push(' ');
            }
        }
    }

    fn needs_space(&self, index: usize) -> bool {
        let Some(next) = self.chunks.get(index + 1) else {
            return false;
        };
        chunk_needs_space(&self.chunks[index], next)
    }
}

// ==================== trait implementations ====================

impl From<Token> for SQL {
    #[inline]
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl From<SQLChunk> for SQL {
    #[inline]
    fn from(value: SQLChunk) -> Self {
        Self {
            chunks: smallvec::smallvec![value],
        }
    }
}

impl FromIterator<SQLChunk> for SQL {
    fn from_iter<I: IntoIterator<Item = SQLChunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SQL {
    type Item = SQLChunk;
    type IntoIter = smallvec::IntoIter<[SQLChunk; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
