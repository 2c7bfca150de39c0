//! Indented tree dump of a parsed program.
//!
//! One node per line, children indented below their parent:
//!
//! ```text
//! Program
//!   Let
//!     Const x
//!       Integer 1
//!     Assign y
//!       Identifier x
//! ```

use sprig_common::Position;

use crate::{
    Command, CommandKind, Declaration, DeclarationKind, ExprKind, Expression, ParamKind,
    Parameter, PrintConfig, Program,
};

/// Render `program` as an indented tree.
pub fn print_program(program: &Program, config: &PrintConfig) -> String {
    let mut printer = TreePrinter::new(config.clone());
    printer.node("Program", program.position);
    printer.nested(|p| p.command(&program.command));
    printer.finish()
}

struct TreePrinter {
    config: PrintConfig,
    output: String,
    indent_level: usize,
}

impl TreePrinter {
    fn new(config: PrintConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn finish(mut self) -> String {
        if !self.config.trailing_newline && self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    /// Write one node line at the current depth.
    fn node(&mut self, label: &str, position: Position) {
        let indent = " ".repeat(self.config.indent_width * self.indent_level);
        self.output.push_str(&indent);
        self.output.push_str(label);
        if self.config.show_positions {
            self.output.push_str(&format!(" @{}", position));
        }
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent_level += 1;
        f(self);
        self.indent_level -= 1;
    }

    fn command(&mut self, command: &Command) {
        let position = command.position;
        match &command.kind {
            CommandKind::Assign { target, value } => {
                self.node(&format!("Assign {}", target), position);
                self.nested(|p| p.expression(value));
            }
            CommandKind::Call { name, argument } => {
                self.node(&format!("Call {}", name), position);
                self.nested(|p| p.parameter(argument));
            }
            CommandKind::Sequence(commands) => {
                self.node("Sequence", position);
                self.nested(|p| commands.iter().for_each(|c| p.command(c)));
            }
            CommandKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.node("If", position);
                self.nested(|p| {
                    p.expression(condition);
                    p.command(then_branch);
                    p.command(else_branch);
                });
            }
            CommandKind::IfUnless {
                condition,
                unless,
                then_branch,
                else_branch,
            } => {
                self.node("IfUnless", position);
                self.nested(|p| {
                    p.expression(condition);
                    p.expression(unless);
                    p.command(then_branch);
                    p.command(else_branch);
                });
            }
            CommandKind::While { condition, body } => {
                self.node("While", position);
                self.nested(|p| {
                    p.expression(condition);
                    p.command(body);
                });
            }
            CommandKind::Let { declaration, body } => {
                self.node("Let", position);
                self.nested(|p| {
                    p.declaration(declaration);
                    p.command(body);
                });
            }
            CommandKind::With { declaration, body } => {
                self.node("With", position);
                self.nested(|p| {
                    p.declaration(declaration);
                    p.command(body);
                });
            }
            CommandKind::Empty => self.node("Empty", position),
            CommandKind::Error => self.node("Error", position),
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        let position = declaration.position;
        match &declaration.kind {
            DeclarationKind::Const { name, value } => {
                self.node(&format!("Const {}", name), position);
                self.nested(|p| p.expression(value));
            }
            DeclarationKind::Var { name, ty } => {
                self.node(&format!("Var {} : {}", name, ty.name), position);
            }
            DeclarationKind::Sequence(declarations) => {
                self.node("Sequence", position);
                self.nested(|p| declarations.iter().for_each(|d| p.declaration(d)));
            }
            DeclarationKind::Error => self.node("Error", position),
        }
    }

    fn expression(&mut self, expr: &Expression) {
        let position = expr.position;
        match &expr.kind {
            ExprKind::Integer(lit) => self.node(&format!("Integer {}", lit.text), position),
            ExprKind::Character(lit) => self.node(&format!("Character {}", lit.text), position),
            ExprKind::Identifier(ident) => self.node(&format!("Identifier {}", ident), position),
            ExprKind::Binary { left, op, right } => {
                self.node(&format!("Binary {}", op), position);
                self.nested(|p| {
                    p.expression(left);
                    p.expression(right);
                });
            }
            ExprKind::Unary { op, operand } => {
                self.node(&format!("Unary {}", op), position);
                self.nested(|p| p.expression(operand));
            }
            ExprKind::Error => self.node("Error", position),
        }
    }

    fn parameter(&mut self, param: &Parameter) {
        let position = param.position;
        match &param.kind {
            ParamKind::Value(expr) => {
                self.node("Value", position);
                self.nested(|p| p.expression(expr));
            }
            ParamKind::Var(name) => self.node(&format!("Var {}", name), position),
            ParamKind::Blank => self.node("Blank", position),
            ParamKind::Error => self.node("Error", position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identifier, IntegerLiteral};

    fn assign(name: &str, value: &str, column: u32) -> Command {
        let position = Position::new(1, column);
        let value_pos = Position::new(1, column + 5);
        Command::new(
            CommandKind::Assign {
                target: Identifier::new(name, position),
                value: Expression::new(
                    ExprKind::Integer(IntegerLiteral::new(value, value_pos)),
                    value_pos,
                ),
            },
            position,
        )
    }

    #[test]
    fn test_print_sequence() {
        let program = Program::new(
            Command::sequence(assign("x", "1", 1), vec![assign("y", "2", 9)]),
            Position::START,
        );
        let out = print_program(&program, &PrintConfig::default());
        assert_eq!(
            out,
            "Program\n  Sequence\n    Assign x\n      Integer 1\n    Assign y\n      Integer 2\n"
        );
    }

    #[test]
    fn test_print_positions_and_indent() {
        let config = PrintConfig::new()
            .indent_width(1)
            .show_positions(true)
            .trailing_newline(false);
        let program = Program::new(assign("x", "7", 1), Position::START);
        let out = print_program(&program, &config);
        assert_eq!(out, "Program @1:1\n Assign x @1:1\n  Integer 7 @1:6");
    }
}
