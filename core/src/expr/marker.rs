use std::borrow::Cow;

use super::{Expr, Marker};

/// Raw SQL spliced into a predicate as-is.
///
/// ```ignore
/// sql_eval("deleted_at IS NULL")
/// ```
pub fn sql_eval(sql: impl Into<Cow<'static, str>>) -> Expr {
    sql_eval_with(sql, Vec::new())
}

/// Raw SQL with `{0}`, `{1}`, ... placeholders replaced by the translated
/// arguments. Fields render as columns and constants as parameters; `{{`
/// and `}}` escape braces.
///
/// ```ignore
/// sql_eval_with("LENGTH({0}) > {1}", vec![u.name.expr(), val(3)])
/// ```
pub fn sql_eval_with(sql: impl Into<Cow<'static, str>>, args: Vec<Expr>) -> Expr {
    Expr::Marker(Marker::SqlEval {
        sql: sql.into(),
        args,
    })
}
