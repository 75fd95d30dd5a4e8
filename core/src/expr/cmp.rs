//! Field handles and comparisons.

use std::borrow::Cow;

use super::{BinaryOp, Expr, IntoExpr, Marker};

/// Handle to a mapped field, used to build predicates.
///
/// Derived entities expose one `Field` per mapped property through their
/// `Fields` struct. Handles are `Copy`, so a closure can use the same field
/// several times.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    name: &'static str,
}

impl Field {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Property name this handle resolves to.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn expr(self) -> Expr {
        Expr::Field(Cow::Borrowed(self.name))
    }

    #[inline]
    pub fn eq(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Eq, self, rhs)
    }

    #[inline]
    pub fn ne(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Ne, self, rhs)
    }

    #[inline]
    pub fn lt(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Lt, self, rhs)
    }

    #[inline]
    pub fn le(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Le, self, rhs)
    }

    #[inline]
    pub fn gt(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Gt, self, rhs)
    }

    #[inline]
    pub fn ge(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Ge, self, rhs)
    }

    /// `field IS NULL`
    #[inline]
    pub fn is_null(self) -> Expr {
        Expr::binary(BinaryOp::Eq, self, Expr::Const(crate::Value::Null))
    }

    /// `field IS NOT NULL`
    #[inline]
    pub fn is_not_null(self) -> Expr {
        Expr::binary(BinaryOp::Ne, self, Expr::Const(crate::Value::Null))
    }

    pub fn like(self, pattern: impl IntoExpr) -> Expr {
        Expr::Marker(Marker::Like {
            target: Box::new(self.expr()),
            pattern: Box::new(pattern.into_expr()),
        })
    }

    pub fn between(self, low: impl IntoExpr, high: impl IntoExpr) -> Expr {
        Expr::Marker(Marker::Between {
            target: Box::new(self.expr()),
            low: Box::new(low.into_expr()),
            high: Box::new(high.into_expr()),
        })
    }

    pub fn in_list<I>(self, values: I) -> Expr
    where
        I: IntoIterator,
        I::Item: IntoExpr,
    {
        Expr::Marker(Marker::In {
            target: Box::new(self.expr()),
            values: values.into_iter().map(IntoExpr::into_expr).collect(),
        })
    }

    #[inline]
    pub const fn asc(self) -> OrderBy {
        OrderBy {
            field: self.name,
            descending: false,
        }
    }

    #[inline]
    pub const fn desc(self) -> OrderBy {
        OrderBy {
            field: self.name,
            descending: true,
        }
    }
}

impl IntoExpr for Field {
    #[inline]
    fn into_expr(self) -> Expr {
        self.expr()
    }
}

impl From<Field> for Expr {
    #[inline]
    fn from(value: Field) -> Self {
        value.expr()
    }
}

/// One `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderBy {
    pub field: &'static str,
    pub descending: bool,
}

impl From<Field> for OrderBy {
    #[inline]
    fn from(value: Field) -> Self {
        value.asc()
    }
}
