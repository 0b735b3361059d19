// Licensed under MIT. See LICENSE for details.

use std::fmt;

use itertools::Itertools;
use log::trace;

use crate::precedence::{precedence, Associativity, Precedence};
use crate::types::{Expression, Operator};

/// Renders `expr` with the fewest parentheses that keep its structure.
pub fn render(expr: &Expression) -> String {
    trace!("rendering {:?} node", precedence(expr));

    let mut printer = Printer::new();
    printer.print(expr);

    trace!("rendered {} bytes", printer.as_str().len());
    printer.into_string()
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Accumulates renderings into a buffer it owns. `print` appends; `clear`
/// resets the buffer between independent formulas.
#[derive(Debug, Default)]
pub struct Printer {
    buf: String,
}

impl Printer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn print(&mut self, expr: &Expression) {
        match *expr {
            Expression::Proposition(ref label) => self.buf.push_str(label.as_str()),
            Expression::Predicate(ref name, ref args) => {
                self.buf.push_str(name.as_str());
                self.buf.push('(');
                self.buf.push_str(&args.iter().join(","));
                self.buf.push(')');
            }
            Expression::Negation(ref operand) => {
                self.buf.push('¬');
                let parens = precedence(operand) < Precedence::Negation;
                self.child(operand, parens);
            }
            Expression::Conjunction(ref lhs, ref rhs) => {
                self.binary(Operator::Conjunction, lhs, rhs)
            }
            Expression::Disjunction(ref lhs, ref rhs) => {
                self.binary(Operator::Disjunction, lhs, rhs)
            }
            Expression::RightImplication(ref lhs, ref rhs) => {
                self.binary(Operator::RightImplication, lhs, rhs)
            }
            Expression::LeftImplication(ref lhs, ref rhs) => {
                self.binary(Operator::LeftImplication, lhs, rhs)
            }
            Expression::BiImplication(ref lhs, ref rhs) => {
                self.binary(Operator::BiImplication, lhs, rhs)
            }
            // Nothing binds looser than a quantifier, its body is never grouped.
            Expression::ForAll(ref var, ref operand) => {
                self.buf.push('∀');
                self.buf.push_str(var.as_str());
                self.buf.push(':');
                self.print(operand);
            }
            Expression::ThereExists(ref var, ref operand) => {
                self.buf.push('∃');
                self.buf.push_str(var.as_str());
                self.buf.push(':');
                self.print(operand);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn binary(&mut self, op: Operator, lhs: &Expression, rhs: &Expression) {
        self.child(lhs, needs_parens(op, lhs, Side::Left));
        self.buf.push(' ');
        self.buf.push_str(op.symbol());
        self.buf.push(' ');
        self.child(rhs, needs_parens(op, rhs, Side::Right));
    }

    fn child(&mut self, expr: &Expression, parens: bool) {
        if parens {
            self.buf.push('(');
            self.print(expr);
            self.buf.push(')');
        } else {
            self.print(expr);
        }
    }
}

// Parentheses are required if:
// - the child binds looser than the parent.
// - both bind equally but are different connectives (→ under ←).
// - both are the same connective and the child sits on the side its
//   associativity doesn't chain on.
fn needs_parens(op: Operator, child: &Expression, side: Side) -> bool {
    let parent = op.precedence();
    let prec = precedence(child);

    if prec != parent {
        return prec < parent;
    }

    if child.operator() != Some(op) {
        return true;
    }

    match (op.associativity(), side) {
        (Associativity::RightAssociative, Side::Left) => true,
        (Associativity::LeftAssociative, Side::Right) => true,
        _ => false,
    }
}
