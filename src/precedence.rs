// Licensed under MIT. See LICENSE for details.

use crate::types::{Expression, Operator};

/// Binding strength of a node, loosest first. Only used to decide whether a
/// node printed as a child needs parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    // Quantifiers.
    Lowest = 0,
    BiImplication = 1,
    // Both directions.
    Implication = 2,
    Disjunction = 3,
    Conjunction = 4,
    Negation = 5,
    // Atoms.
    Highest = 255,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Associative,
    LeftAssociative,
    RightAssociative,
}

/// Depends on the node's variant only, never on its children.
pub fn precedence(expr: &Expression) -> Precedence {
    match *expr {
        Expression::Proposition(_) | Expression::Predicate(..) => Precedence::Highest,
        Expression::Negation(_) => Precedence::Negation,
        Expression::Conjunction(..) => Precedence::Conjunction,
        Expression::Disjunction(..) => Precedence::Disjunction,
        Expression::RightImplication(..) | Expression::LeftImplication(..) => {
            Precedence::Implication
        }
        Expression::BiImplication(..) => Precedence::BiImplication,
        Expression::ForAll(..) | Expression::ThereExists(..) => Precedence::Lowest,
    }
}

impl Operator {
    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Conjunction => Precedence::Conjunction,
            Operator::Disjunction => Precedence::Disjunction,
            Operator::RightImplication | Operator::LeftImplication => Precedence::Implication,
            Operator::BiImplication => Precedence::BiImplication,
        }
    }

    // ∧, ∨ and ↔ chains print ungrouped whichever way they nest.
    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Conjunction | Operator::Disjunction | Operator::BiImplication => {
                Associativity::Associative
            }
            Operator::RightImplication => Associativity::RightAssociative,
            Operator::LeftImplication => Associativity::LeftAssociative,
        }
    }
}
