//! Expression and parameter AST nodes.

use std::fmt;

use crate::{CharacterLiteral, Identifier, IntegerLiteral, Operator};
use sprig_common::Position;

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub kind: ExprKind,
    pub position: Position,
}

impl Expression {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn error(position: Position) -> Self {
        Self::new(ExprKind::Error, position)
    }

    /// `left op right`, positioned at the left operand.
    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        let position = left.position;
        Self::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            position,
        )
    }

    /// `op operand`, positioned at the operator.
    pub fn unary(op: Operator, operand: Expression) -> Self {
        let position = op.position;
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            position,
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, ExprKind::Error)
    }

    /// Number of error placeholders in this expression. Walks the tree with
    /// an explicit stack, so arbitrarily deep operator chains are fine.
    pub fn error_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            match &expr.kind {
                ExprKind::Binary { left, right, .. } => {
                    pending.push(left.as_ref());
                    pending.push(right.as_ref());
                }
                ExprKind::Unary { operand, .. } => pending.push(operand.as_ref()),
                ExprKind::Error => count += 1,
                ExprKind::Integer(_) | ExprKind::Character(_) | ExprKind::Identifier(_) => {}
            }
        }
        count
    }

    /// Move the boxed subexpressions out of `kind`, leaving a leaf behind.
    fn take_operands(&mut self, pending: &mut Vec<Expression>) {
        match std::mem::replace(&mut self.kind, ExprKind::Error) {
            ExprKind::Binary { left, right, .. } => {
                pending.push(*left);
                pending.push(*right);
            }
            ExprKind::Unary { operand, .. } => pending.push(*operand),
            leaf => self.kind = leaf,
        }
    }
}

/// Dropping a long operator chain recursively would exhaust the stack, so
/// subexpressions are unlinked and dropped one at a time.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_operands(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_operands(&mut pending);
        }
    }
}

/// Fully parenthesized rendering, e.g. `((1 + 2) * 3)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Integer(lit) => f.write_str(&lit.text),
            ExprKind::Character(lit) => f.write_str(&lit.text),
            ExprKind::Identifier(ident) => f.write_str(&ident.text),
            ExprKind::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::Unary { op, operand } => write!(f, "({}{})", op, operand),
            ExprKind::Error => f.write_str("<error>"),
        }
    }
}

/// Expression kind.
///
/// There is no parenthesized variant: `(e)` parses to `e` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Integer(IntegerLiteral),
    Character(CharacterLiteral),
    /// A bare variable or constant reference.
    Identifier(Identifier),
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
    },
    Unary {
        op: Operator,
        operand: Box<Expression>,
    },
    /// Placeholder for an expression that failed to parse.
    Error,
}

/// The single argument of a procedure call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ParamKind,
    pub position: Position,
}

impl Parameter {
    pub fn new(kind: ParamKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn error(position: Position) -> Self {
        Self::new(ParamKind::Error, position)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, ParamKind::Error)
    }

    pub fn error_count(&self) -> usize {
        match &self.kind {
            ParamKind::Value(expr) => expr.error_count(),
            ParamKind::Error => 1,
            ParamKind::Var(_) | ParamKind::Blank => 0,
        }
    }
}

/// Parameter kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// `in expr`, passed by value.
    Value(Expression),
    /// `out name`, passed by reference.
    Var(Identifier),
    /// `()`, no argument.
    Blank,
    /// Placeholder for a parameter that failed to parse.
    Error,
}
