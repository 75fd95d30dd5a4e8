//! Logical operators (AND, OR, NOT) and the conditional.
//!
//! ```ignore
//! // Function style
//! a.and(b)
//! and_all([a, b, c])
//! cond(test, if_true, if_false)
//!
//! // Operator style (via std::ops traits)
//! a & b
//! a | b
//! !a
//! ```

use core::ops::{BitAnd, BitOr, Not};

use super::{BinaryOp, Expr, Field, IntoExpr};
use crate::value::Value;

impl Expr {
    #[inline]
    pub fn and(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::And, self, rhs)
    }

    #[inline]
    pub fn or(self, rhs: impl IntoExpr) -> Expr {
        Expr::binary(BinaryOp::Or, self, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// `test ? if_true : if_false` in predicate form.
pub fn cond(test: impl IntoExpr, if_true: impl IntoExpr, if_false: impl IntoExpr) -> Expr {
    Expr::Conditional {
        test: Box::new(test.into_expr()),
        if_true: Box::new(if_true.into_expr()),
        if_false: Box::new(if_false.into_expr()),
    }
}

/// Conjunction of all conditions. Empty input is `true`.
pub fn and_all<I>(conditions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    conditions
        .into_iter()
        .map(IntoExpr::into_expr)
        .reduce(|acc, next| acc.and(next))
        .unwrap_or(Expr::Const(Value::Bool(true)))
}

/// Disjunction of all conditions. Empty input is `false`.
pub fn or_any<I>(conditions: I) -> Expr
where
    I: IntoIterator,
    I::Item: IntoExpr,
{
    conditions
        .into_iter()
        .map(IntoExpr::into_expr)
        .reduce(|acc, next| acc.or(next))
        .unwrap_or(Expr::Const(Value::Bool(false)))
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl Not for Field {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self.expr()))
    }
}

impl<Rhs: IntoExpr> BitAnd<Rhs> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Rhs) -> Self::Output {
        self.and(rhs)
    }
}

impl<Rhs: IntoExpr> BitOr<Rhs> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        self.or(rhs)
    }
}

impl<Rhs: IntoExpr> BitAnd<Rhs> for Field {
    type Output = Expr;

    fn bitand(self, rhs: Rhs) -> Self::Output {
        self.expr().and(rhs)
    }
}

impl<Rhs: IntoExpr> BitOr<Rhs> for Field {
    type Output = Expr;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        self.expr().or(rhs)
    }
}
