//! Command AST nodes.

use crate::{Declaration, Expression, Identifier, Parameter};
use sprig_common::Position;

/// A command (statement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub position: Position,
}

impl Command {
    pub fn new(kind: CommandKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn empty(position: Position) -> Self {
        Self::new(CommandKind::Empty, position)
    }

    pub fn error(position: Position) -> Self {
        Self::new(CommandKind::Error, position)
    }

    /// Combine commands in source order.
    ///
    /// A lone command is returned as-is; only two or more become a
    /// [`CommandKind::Sequence`], positioned at the first member.
    pub fn sequence(first: Command, rest: Vec<Command>) -> Self {
        if rest.is_empty() {
            return first;
        }
        let position = first.position;
        let mut commands = Vec::with_capacity(rest.len() + 1);
        commands.push(first);
        commands.extend(rest);
        Self::new(CommandKind::Sequence(commands), position)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, CommandKind::Error)
    }

    /// Number of error placeholders in this command and everything below it.
    pub fn error_count(&self) -> usize {
        let own = usize::from(self.is_error());
        let children = match &self.kind {
            CommandKind::Assign { value, .. } => value.error_count(),
            CommandKind::Call { argument, .. } => argument.error_count(),
            CommandKind::Sequence(commands) => commands.iter().map(Command::error_count).sum(),
            CommandKind::If {
                condition,
                then_branch,
                else_branch,
            } => condition.error_count() + then_branch.error_count() + else_branch.error_count(),
            CommandKind::IfUnless {
                condition,
                unless,
                then_branch,
                else_branch,
            } => {
                condition.error_count()
                    + unless.error_count()
                    + then_branch.error_count()
                    + else_branch.error_count()
            }
            CommandKind::While { condition, body } => condition.error_count() + body.error_count(),
            CommandKind::Let { declaration, body } | CommandKind::With { declaration, body } => {
                declaration.error_count() + body.error_count()
            }
            CommandKind::Empty | CommandKind::Error => 0,
        };
        own + children
    }
}

/// Command kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// `x := expr`
    Assign {
        target: Identifier,
        value: Expression,
    },
    /// `proc(param)`
    Call {
        name: Identifier,
        argument: Parameter,
    },
    /// `c1; c2; ...`, always two or more members.
    Sequence(Vec<Command>),
    /// `if (cond) c1 else c2`
    If {
        condition: Expression,
        then_branch: Box<Command>,
        else_branch: Box<Command>,
    },
    /// `if (cond) unless (cond2) c1 else c2`
    IfUnless {
        condition: Expression,
        unless: Expression,
        then_branch: Box<Command>,
        else_branch: Box<Command>,
    },
    /// `while (cond) do c`
    While {
        condition: Expression,
        body: Box<Command>,
    },
    /// `let decls in c`
    Let {
        declaration: Declaration,
        body: Box<Command>,
    },
    /// `with decls do c done`
    With {
        declaration: Declaration,
        body: Box<Command>,
    },
    /// The empty command, e.g. inside `{ }`.
    Empty,
    /// Placeholder for a command that failed to parse.
    Error,
}
