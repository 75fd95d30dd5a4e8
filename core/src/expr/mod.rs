//! Predicate AST.
//!
//! Predicates are plain data: a tree of [`Expr`] nodes built from [`Field`]
//! handles, constants and marker calls. Nothing here is evaluated in Rust;
//! the [`Translator`](crate::Translator) turns the tree into SQL.
//!
//! ```ignore
//! // Method style
//! u.age.gt(18).and(u.name.like("A%"))
//!
//! // Operator style (via std::ops traits)
//! u.age.gt(18) & !u.active | u.id.in_list([1, 2, 3])
//! ```

mod cmp;
mod logical;
mod marker;

pub use cmp::{Field, OrderBy};
pub use logical::{and_all, cond, or_any};
pub use marker::{sql_eval, sql_eval_with};

use std::borrow::Cow;

use crate::sql::Token;
use crate::value::Value;
use core::cmp::Ordering;

/// A node of a predicate tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Member access on the entity, by property (or column) name.
    Field(Cow<'static, str>),
    Const(Value),
    Not(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `test ? if_true : if_false`
    Conditional {
        test: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    Marker(Marker),
}

/// Binary operators of the predicate grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    #[inline]
    pub const fn is_comparison(&self) -> bool {
        !matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    /// The operator with its operands swapped: `a < b` is `b > a`.
    pub const fn mirror(&self) -> BinaryOp {
        match self {
            BinaryOp::Lt => BinaryOp::Gt,
            BinaryOp::Le => BinaryOp::Ge,
            BinaryOp::Gt => BinaryOp::Lt,
            BinaryOp::Ge => BinaryOp::Le,
            other => *other,
        }
    }

    pub const fn token(&self) -> Token {
        match self {
            BinaryOp::Eq => Token::EQ,
            BinaryOp::Ne => Token::NE,
            BinaryOp::Lt => Token::LT,
            BinaryOp::Le => Token::LE,
            BinaryOp::Gt => Token::GT,
            BinaryOp::Ge => Token::GE,
            BinaryOp::And => Token::AND,
            BinaryOp::Or => Token::OR,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.token().as_str()
    }

    /// Applies a comparison operator to an ordering.
    pub const fn holds(&self, ordering: Ordering) -> bool {
        match self {
            BinaryOp::Eq => matches!(ordering, Ordering::Equal),
            BinaryOp::Ne => !matches!(ordering, Ordering::Equal),
            BinaryOp::Lt => matches!(ordering, Ordering::Less),
            BinaryOp::Le => !matches!(ordering, Ordering::Greater),
            BinaryOp::Gt => matches!(ordering, Ordering::Greater),
            BinaryOp::Ge => !matches!(ordering, Ordering::Less),
            BinaryOp::And | BinaryOp::Or => false,
        }
    }
}

/// Marker calls: constructs with no comparison-operator spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// `target LIKE pattern`
    Like {
        target: Box<Expr>,
        pattern: Box<Expr>,
    },
    /// `target BETWEEN low AND high`
    Between {
        target: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    /// `target IN (values...)`
    In {
        target: Box<Expr>,
        values: Vec<Expr>,
    },
    /// Raw SQL with `{0}`, `{1}`, ... replaced by the translated args.
    SqlEval {
        sql: Cow<'static, str>,
        args: Vec<Expr>,
    },
}

impl Marker {
    pub const fn name(&self) -> &'static str {
        match self {
            Marker::Like { .. } => "LIKE",
            Marker::Between { .. } => "BETWEEN",
            Marker::In { .. } => "IN",
            Marker::SqlEval { .. } => "sql_eval",
        }
    }
}

impl Expr {
    /// Member access by property name.
    #[inline]
    pub fn field(name: impl Into<Cow<'static, str>>) -> Expr {
        Expr::Field(name.into())
    }

    #[inline]
    pub fn binary(op: BinaryOp, left: impl IntoExpr, right: impl IntoExpr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left.into_expr()),
            right: Box::new(right.into_expr()),
        }
    }

    /// Comparison of this expression against another operand.
    #[inline]
    pub fn compare(self, op: BinaryOp, rhs: impl IntoExpr) -> Expr {
        Expr::binary(op, self, rhs)
    }
}

/// Wraps a constant.
#[inline]
pub fn val(value: impl Into<Value>) -> Expr {
    Expr::Const(value.into())
}

/// Conversion into a predicate operand.
///
/// Implemented for [`Expr`], [`Field`], [`Value`] and the Rust types that
/// convert into a [`Value`].
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    #[inline]
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Value {
    #[inline]
    fn into_expr(self) -> Expr {
        Expr::Const(self)
    }
}

impl<T: Into<Value>> IntoExpr for Option<T> {
    #[inline]
    fn into_expr(self) -> Expr {
        Expr::Const(Value::from(self))
    }
}

macro_rules! impl_into_expr_const {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoExpr for $ty {
                #[inline]
                fn into_expr(self) -> Expr {
                    Expr::Const(Value::from(self))
                }
            }
        )*
    };
}

impl_into_expr_const!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    bool,
    &str,
    String,
    &String,
    Vec<u8>,
    &[u8],
    chrono::NaiveDateTime,
    chrono::NaiveDate,
);

#[cfg(feature = "uuid")]
impl_into_expr_const!(uuid::Uuid);
