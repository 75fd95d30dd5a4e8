//! Predicate AST to SQL.
//!
//! The translator walks an [`Expr`] against a [`Table`], resolving fields to
//! columns and binding constants into a [`ParamSet`]. Constant
//! sub-predicates are folded on the way: `false AND x` never looks at `x`,
//! `true AND x` is exactly `x`, and comparisons between two constants are
//! decided here instead of being sent to the database.

use sleet_types::Dialect;

use crate::error::TranslateError;
use crate::expr::{BinaryOp, Expr, Marker};
use crate::params::ParamSet;
use crate::schema::{Column, Table};
use crate::sql::{SQL, Token};
use crate::value::Value;

type Result<T> = std::result::Result<T, TranslateError>;

/// A translated predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Folded to a constant truth value.
    Literal(bool),
    Sql(SQL),
}

impl Predicate {
    /// SQL for the predicate; literals use the dialect's predicate spelling
    /// at render time.
    pub fn into_sql(self) -> SQL {
        match self {
            Predicate::Literal(value) => SQL::bool(value),
            Predicate::Sql(sql) => sql,
        }
    }

    #[inline]
    pub const fn is_true(&self) -> bool {
        matches!(self, Predicate::Literal(true))
    }
}

#[derive(Debug, Clone)]
enum Node {
    Literal(bool),
    /// `disjunction` is set when the top-level operator is OR, so the
    /// fragment needs grouping under AND.
    Sql { sql: SQL, disjunction: bool },
}

impl Node {
    fn sql(sql: SQL) -> Self {
        Node::Sql {
            sql,
            disjunction: false,
        }
    }
}

enum Operand<'t> {
    Column(&'t Column),
    Const(Value),
    Raw(SQL),
}

/// Translates predicates for one table into one parameter set.
pub struct Translator<'a> {
    dialect: Dialect,
    table: &'a Table,
    params: &'a mut ParamSet,
}

impl<'a> Translator<'a> {
    pub fn new(dialect: Dialect, table: &'a Table, params: &'a mut ParamSet) -> Self {
        Self {
            dialect,
            table,
            params,
        }
    }

    /// Translates a boolean predicate, binding its constants.
    pub fn translate(&mut self, expr: &Expr) -> Result<Predicate> {
        Ok(match self.node(expr)? {
            Node::Literal(value) => Predicate::Literal(value),
            Node::Sql { sql, .. } => Predicate::Sql(sql),
        })
    }

    fn node(&mut self, expr: &Expr) -> Result<Node> {
        match expr {
            Expr::Const(Value::Bool(value)) => {
                crate::sleet_trace_fold!("const", *value);
                Ok(Node::Literal(*value))
            }
            Expr::Const(other) => Err(TranslateError::NonBooleanPredicate(format!(
                "{} {other}",
                other.kind()
            ))),
            Expr::Field(name) => {
                let column = self.column(name)?;
                Ok(Node::sql(
                    column
                        .ident()
                        .push(Token::EQ)
                        .append(SQL::raw(self.dialect.bool_literal(true))),
                ))
            }
            Expr::Not(inner) => {
                let node = self.node(inner)?;
                Ok(negate(node))
            }
            Expr::Binary {
                op: BinaryOp::And,
                left,
                right,
            } => self.and(left, right),
            Expr::Binary {
                op: BinaryOp::Or,
                left,
                right,
            } => self.or(left, right),
            Expr::Binary { op, left, right } => self.comparison(*op, left, right),
            Expr::Conditional {
                test,
                if_true,
                if_false,
            } => self.conditional(test, if_true, if_false),
            Expr::Marker(marker) => self.marker(marker),
        }
    }

    // ==================== connectives ====================

    fn and(&mut self, left: &Expr, right: &Expr) -> Result<Node> {
        let mark = self.params.len();
        let left = self.node(left)?;
        if let Node::Literal(false) = left {
            crate::sleet_trace_fold!("and", false);
            return Ok(left);
        }
        let right = self.node(right)?;
        if let Node::Literal(false) = right {
            crate::sleet_trace_fold!("and", false);
            self.params.truncate(mark);
        }
        Ok(conjoin(left, right))
    }

    fn or(&mut self, left: &Expr, right: &Expr) -> Result<Node> {
        let mark = self.params.len();
        let left = self.node(left)?;
        if let Node::Literal(true) = left {
            crate::sleet_trace_fold!("or", true);
            return Ok(left);
        }
        let right = self.node(right)?;
        if let Node::Literal(true) = right {
            crate::sleet_trace_fold!("or", true);
            self.params.truncate(mark);
        }
        Ok(disjoin(left, right))
    }

    /// `(test AND a) OR (NOT (test) AND b)`
    fn conditional(&mut self, test: &Expr, if_true: &Expr, if_false: &Expr) -> Result<Node> {
        let mark = self.params.len();
        let result = match self.node(test)? {
            Node::Literal(true) => {
                crate::sleet_trace_fold!("conditional", true);
                self.node(if_true)?
            }
            Node::Literal(false) => {
                crate::sleet_trace_fold!("conditional", false);
                self.node(if_false)?
            }
            test => {
                let if_true = self.node(if_true)?;
                let if_false = self.node(if_false)?;
                if let (Node::Literal(a), Node::Literal(b)) = (&if_true, &if_false)
                    && a == b
                {
                    crate::sleet_trace_fold!("conditional", *a);
                    return self.truncated(mark, Node::Literal(*a));
                }
                let when_true = conjoin(test.clone(), if_true);
                let when_false = conjoin(negate(test), if_false);
                match (when_true, when_false) {
                    (Node::Sql { sql: left, .. }, Node::Sql { sql: right, .. }) => Node::Sql {
                        sql: left.parens().push(Token::OR).append(right.parens()),
                        disjunction: true,
                    },
                    (left, right) => disjoin(left, right),
                }
            }
        };
        self.truncated(mark, result)
    }

    /// Literals carry no parameters; drop any bound since `mark`.
    fn truncated(&mut self, mark: usize, node: Node) -> Result<Node> {
        if let Node::Literal(_) = node {
            self.params.truncate(mark);
        }
        Ok(node)
    }

    // ==================== comparisons ====================

    fn comparison(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Result<Node> {
        let left = self.operand(left)?;
        let right = self.operand(right)?;

        match (left, right) {
            (Operand::Const(a), Operand::Const(b)) => {
                let value = fold_constants(op, &a, &b)?;
                crate::sleet_trace_fold!("comparison", value);
                Ok(Node::Literal(value))
            }
            (Operand::Const(value), target) => self.compare_value(op.mirror(), target, value),
            (target, Operand::Const(value)) => self.compare_value(op, target, value),
            (left, right) => {
                let left = self.render(left, "p");
                let right = self.render(right, "p");
                Ok(Node::sql(left.push(op.token()).append(right)))
            }
        }
    }

    fn compare_value(&mut self, op: BinaryOp, target: Operand<'a>, value: Value) -> Result<Node> {
        let base = base_name(&target);
        let target = self.render(target, base);

        if value.is_null() {
            return match op {
                BinaryOp::Eq => Ok(Node::sql(target.push(Token::IS).push(Token::NULL))),
                BinaryOp::Ne => Ok(Node::sql(
                    target.push(Token::IS).push(Token::NOT).push(Token::NULL),
                )),
                _ => Err(TranslateError::NullOrdering(op.as_str())),
            };
        }

        let name = self.params.add(base, value);
        Ok(Node::sql(target.push(op.token()).append(SQL::param(name))))
    }

    // ==================== markers ====================

    fn marker(&mut self, marker: &Marker) -> Result<Node> {
        match marker {
            Marker::Like { target, pattern } => {
                let column = self.marker_target(target, marker)?;
                let pattern = self.operand(pattern)?;
                let pattern = self.render(pattern, column.property_name());
                Ok(Node::sql(column.ident().push(Token::LIKE).append(pattern)))
            }
            Marker::Between { target, low, high } => {
                let column = self.marker_target(target, marker)?;
                let low = self.operand(low)?;
                let low = self.render(low, column.property_name());
                let high = self.operand(high)?;
                let high = self.render(high, column.property_name());
                Ok(Node::sql(
                    column
                        .ident()
                        .push(Token::BETWEEN)
                        .append(low)
                        .push(Token::AND)
                        .append(high),
                ))
            }
            Marker::In { target, values } => {
                let column = self.marker_target(target, marker)?;
                if values.is_empty() {
                    crate::sleet_trace_fold!("in", false);
                    return Ok(Node::Literal(false));
                }
                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    let operand = self.operand(value)?;
                    items.push(self.render(operand, column.property_name()));
                }
                Ok(Node::sql(
                    column
                        .ident()
                        .push(Token::IN)
                        .append(SQL::comma_list(items).parens()),
                ))
            }
            Marker::SqlEval { sql, args } => Ok(Node::Sql {
                sql: self.sql_eval(sql, args)?,
                disjunction: true,
            }),
        }
    }

    fn marker_target(&self, target: &Expr, marker: &Marker) -> Result<&'a Column> {
        match target {
            Expr::Field(name) => self.column(name),
            _ => Err(TranslateError::MarkerTarget {
                marker: marker.name(),
            }),
        }
    }

    /// Splices translated arguments into a raw SQL template.
    fn sql_eval(&mut self, template: &str, args: &[Expr]) -> Result<SQL> {
        let mut out = SQL::empty();
        let mut text = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find(['{', '}']) {
            text.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with("{{") || tail.starts_with("}}") {
                text.push_str(&tail[..1]);
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('{')
                && let Some(end) = tail.find('}')
                && let Ok(index) = tail[1..end].parse::<usize>()
            {
                let arg = args.get(index).ok_or(TranslateError::SqlEvalArgument {
                    index,
                    count: args.len(),
                })?;
                if !text.is_empty() {
                    out.append_mut(SQL::raw(std::mem::take(&mut text)));
                }
                let operand = self.operand(arg)?;
                let base = base_name(&operand);
                out.append_mut(self.render(operand, base));
                rest = &tail[end + 1..];
                continue;
            }
            text.push_str(&tail[..1]);
            rest = &tail[1..];
        }
        text.push_str(rest);
        if !text.is_empty() {
            out.append_mut(SQL::raw(text));
        }
        Ok(out)
    }

    // ==================== operands ====================

    fn operand(&mut self, expr: &Expr) -> Result<Operand<'a>> {
        match expr {
            Expr::Field(name) => Ok(Operand::Column(self.column(name)?)),
            Expr::Const(value) => Ok(Operand::Const(value.clone())),
            Expr::Marker(Marker::SqlEval { sql, args }) => {
                Ok(Operand::Raw(self.sql_eval(sql, args)?.parens()))
            }
            Expr::Marker(marker) => Err(TranslateError::Unsupported(format!(
                "{} used as a comparison operand",
                marker.name()
            ))),
            Expr::Not(_) | Expr::Binary { .. } => Err(TranslateError::Unsupported(
                "boolean expression used as a comparison operand".into(),
            )),
            Expr::Conditional { .. } => Err(TranslateError::Unsupported(
                "conditional used as a comparison operand".into(),
            )),
        }
    }

    /// Column, raw SQL, or a constant bound under `base`.
    fn render(&mut self, operand: Operand<'a>, base: &str) -> SQL {
        match operand {
            Operand::Column(column) => column.ident(),
            Operand::Raw(sql) => sql,
            Operand::Const(value) => SQL::param(self.params.add(base, value)),
        }
    }

    fn column(&self, name: &str) -> Result<&'a Column> {
        let table: &'a Table = self.table;
        table
            .column(name)
            .ok_or_else(|| TranslateError::UnknownField {
                table: table.name().to_string(),
                field: name.to_string(),
            })
    }
}

fn base_name<'t>(operand: &Operand<'t>) -> &'t str {
    match operand {
        Operand::Column(column) => {
            let column: &'t Column = column;
            column.property_name()
        }
        Operand::Const(_) | Operand::Raw(_) => "p",
    }
}

fn negate(node: Node) -> Node {
    match node {
        Node::Literal(value) => {
            crate::sleet_trace_fold!("not", !value);
            Node::Literal(!value)
        }
        Node::Sql { sql, .. } => Node::sql(SQL::token(Token::NOT).append(sql.parens())),
    }
}

fn conjoin(left: Node, right: Node) -> Node {
    match (left, right) {
        (Node::Literal(false), _) | (_, Node::Literal(false)) => Node::Literal(false),
        (Node::Literal(true), node) | (node, Node::Literal(true)) => node,
        (
            Node::Sql {
                sql: left,
                disjunction: group_left,
            },
            Node::Sql {
                sql: right,
                disjunction: group_right,
            },
        ) => Node::sql(
            group(left, group_left)
                .push(Token::AND)
                .append(group(right, group_right)),
        ),
    }
}

fn disjoin(left: Node, right: Node) -> Node {
    match (left, right) {
        (Node::Literal(true), _) | (_, Node::Literal(true)) => Node::Literal(true),
        (Node::Literal(false), node) | (node, Node::Literal(false)) => node,
        (Node::Sql { sql: left, .. }, Node::Sql { sql: right, .. }) => Node::Sql {
            sql: left.push(Token::OR).append(right),
            disjunction: true,
        },
    }
}

fn group(sql: SQL, needed: bool) -> SQL {
    if needed { sql.parens() } else { sql }
}

fn fold_constants(op: BinaryOp, left: &Value, right: &Value) -> Result<bool> {
    if left.is_null() || right.is_null() {
        let both = left.is_null() && right.is_null();
        return match op {
            BinaryOp::Eq => Ok(both),
            BinaryOp::Ne => Ok(!both),
            _ => Err(TranslateError::NullOrdering(op.as_str())),
        };
    }
    left.compare(right)
        .map(|ordering| op.holds(ordering))
        .ok_or_else(|| TranslateError::IncomparableConstants {
            left: format!("{} {left}", left.kind()),
            right: format!("{} {right}", right.kind()),
        })
}
