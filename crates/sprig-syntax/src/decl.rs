//! Declaration AST nodes.

use crate::{Expression, Identifier};
use sprig_common::Position;

/// A declaration, as introduced by `let` or `with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub position: Position,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn error(position: Position) -> Self {
        Self::new(DeclarationKind::Error, position)
    }

    /// Combine declarations in source order, unwrapping a lone declaration.
    pub fn sequence(first: Declaration, rest: Vec<Declaration>) -> Self {
        if rest.is_empty() {
            return first;
        }
        let position = first.position;
        let mut declarations = Vec::with_capacity(rest.len() + 1);
        declarations.push(first);
        declarations.extend(rest);
        Self::new(DeclarationKind::Sequence(declarations), position)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, DeclarationKind::Error)
    }

    pub fn error_count(&self) -> usize {
        match &self.kind {
            DeclarationKind::Const { value, .. } => value.error_count(),
            DeclarationKind::Var { .. } => 0,
            DeclarationKind::Sequence(declarations) => {
                declarations.iter().map(Declaration::error_count).sum()
            }
            DeclarationKind::Error => 1,
        }
    }
}

/// Declaration kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `name is expr`
    Const { name: Identifier, value: Expression },
    /// `name : Type`
    Var { name: Identifier, ty: TypeDenoter },
    /// `d1; d2; ...`, always two or more members.
    Sequence(Vec<Declaration>),
    /// Placeholder for a declaration that failed to parse.
    Error,
}

/// A type name. Types are unstructured identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDenoter {
    pub name: Identifier,
}

impl TypeDenoter {
    pub fn new(name: Identifier) -> Self {
        Self { name }
    }
}
