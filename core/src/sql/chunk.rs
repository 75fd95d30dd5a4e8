use std::borrow::Cow;

use super::Token;
use sleet_types::Dialect;

/// A SQL chunk represents a part of an SQL statement.
///
/// Chunks are dialect-agnostic; quoting, parameter markers and folded
/// predicates are spelled out when the fragment is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SQLChunk {
    /// SQL keywords and operators: SELECT, FROM, =, etc.
    Token(Token),

    /// Identifier, quoted with the dialect's rule.
    Ident(Cow<'static, str>),

    /// Schema-qualified table name: `"schema"."name"`.
    Qualified {
        schema: Option<Cow<'static, str>>,
        name: Cow<'static, str>,
    },

    /// Raw SQL text, written as-is.
    Raw(Cow<'static, str>),

    /// Named parameter, bound in the statement's parameter set.
    Param(Cow<'static, str>),

    /// Folded predicate literal.
    Bool(bool),
}

impl SQLChunk {
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    #[inline]
    pub fn ident(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Ident(name.into())
    }

    #[inline]
    pub fn raw(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Raw(text.into())
    }

    #[inline]
    pub fn param(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Param(name.into())
    }

    /// Write chunk content to buffer. Parameters go through `param`.
    pub(crate) fn write(
        &self,
        dialect: Dialect,
        buf: &mut String,
        param: &mut impl FnMut(&mut String, &str),
    ) {
        match self {
            SQLChunk::Token(token) => buf.push_str(token.as_str()),
            SQLChunk::Ident(name) => dialect.write_ident(buf, name),
            SQLChunk::Qualified { schema, name } => {
                if let Some(schema) = schema {
                    dialect.write_ident(buf, schema);
                    buf.push('.');
                }
                dialect.write_ident(buf, name);
            }
            SQLChunk::Raw(text) => buf.push_str(text),
            SQLChunk::Param(name) => param(buf, name),
            SQLChunk::Bool(value) => buf.push_str(dialect.bool_predicate(*value)),
        }
    }

    /// Word-like chunks are separated from each other by a space.
    #[inline]
    pub(crate) const fn is_word_like(&self) -> bool {
        match self {
            SQLChunk::Token(t) => !t.is_punctuation() && !t.is_operator(),
            SQLChunk::Ident(_)
            | SQLChunk::Qualified { .. }
            | SQLChunk::Raw(_)
            | SQLChunk::Param(_)
            | SQLChunk::Bool(_) => true,
        }
    }
}

impl From<Token> for SQLChunk {
    #[inline]
    fn from(value: Token) -> Self {
        SQLChunk::Token(value)
    }
}

/// Spacing between two adjacent chunks.
pub(crate) fn chunk_needs_space(current: &SQLChunk, next: &SQLChunk) -> bool {
    // Raw text that brings its own boundary
    if let SQLChunk::Raw(text) = current
        && text.ends_with([' ', '(', '.'])
    {
        return false;
    }
    if let SQLChunk::Raw(text) = next
        && text.starts_with([' ', ')', ',', '.'])
    {
        return false;
    }

    match (current, next) {
        (_, SQLChunk::Token(Token::RPAREN | Token::COMMA | Token::SEMI | Token::DOT)) => false,
        (SQLChunk::Token(Token::LPAREN | Token::DOT), _) => false,
        (SQLChunk::Token(Token::COMMA | Token::SEMI), _) => true,
        (SQLChunk::Token(t), _) if t.is_operator() => true,
        (_, SQLChunk::Token(t)) if t.is_operator() => true,
        (SQLChunk::Token(Token::RPAREN), next) => next.is_word_like(),
        (current, SQLChunk::Token(Token::LPAREN)) => current.is_word_like(),
        _ => current.is_word_like() && next.is_word_like(),
    }
}
