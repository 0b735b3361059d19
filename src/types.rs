// Licensed under MIT. See LICENSE for details.

use crate::error::{Result, Role};
use crate::ident::Ident;

// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Conjunction,
    Disjunction,
    RightImplication,
    LeftImplication,
    BiImplication,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Conjunction => "∧",
            Operator::Disjunction => "∨",
            Operator::RightImplication => "→",
            Operator::LeftImplication => "←",
            Operator::BiImplication => "↔",
        }
    }
}

// Formula AST. Every node owns its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    // p
    // [no children]
    Proposition(Ident),
    // P(x,y)
    // [no children]
    Predicate(Ident, Vec<Ident>),
    // ¬A
    // [one child]
    Negation(Box<Expression>),
    // A ∧ B
    // [two children]
    Conjunction(Box<Expression>, Box<Expression>),
    // A ∨ B
    // [two children]
    Disjunction(Box<Expression>, Box<Expression>),
    // A → B
    // [two children]
    RightImplication(Box<Expression>, Box<Expression>),
    // A ← B
    // [two children]
    LeftImplication(Box<Expression>, Box<Expression>),
    // A ↔ B
    // [two children]
    BiImplication(Box<Expression>, Box<Expression>),
    // ∀x:A
    // [one child]
    ForAll(Ident, Box<Expression>),
    // ∃x:A
    // [one child]
    ThereExists(Ident, Box<Expression>),
}

impl Expression {
    pub fn prop<S: Into<String>>(label: S) -> Result<Self> {
        Ok(Expression::Proposition(Ident::new(Role::Proposition, label)?))
    }

    /// Builds `name(args...)`. Arguments keep their order and may be empty.
    pub fn pred<S, I, A>(name: S, args: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let name = Ident::new(Role::PredicateName, name)?;
        let args = args
            .into_iter()
            .map(|a| Ident::new(Role::PredicateArgument, a))
            .collect::<Result<Vec<_>>>()?;

        Ok(Expression::Predicate(name, args))
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Negation(Box::new(operand))
    }

    pub fn and(lhs: Expression, rhs: Expression) -> Self {
        Expression::Conjunction(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Expression, rhs: Expression) -> Self {
        Expression::Disjunction(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs → rhs`
    pub fn implies(lhs: Expression, rhs: Expression) -> Self {
        Expression::RightImplication(Box::new(lhs), Box::new(rhs))
    }

    /// `lhs ← rhs`
    pub fn implied_by(lhs: Expression, rhs: Expression) -> Self {
        Expression::LeftImplication(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Expression, rhs: Expression) -> Self {
        Expression::BiImplication(Box::new(lhs), Box::new(rhs))
    }

    pub fn forall<S: Into<String>>(var: S, operand: Expression) -> Result<Self> {
        let var = Ident::new(Role::BoundVariable, var)?;
        Ok(Expression::ForAll(var, Box::new(operand)))
    }

    pub fn exists<S: Into<String>>(var: S, operand: Expression) -> Result<Self> {
        let var = Ident::new(Role::BoundVariable, var)?;
        Ok(Expression::ThereExists(var, Box::new(operand)))
    }

    pub fn is_atom(&self) -> bool {
        match *self {
            Expression::Proposition(_) | Expression::Predicate(..) => true,
            _ => false,
        }
    }

    /// The connective of a binary node, `None` for every other node.
    pub fn operator(&self) -> Option<Operator> {
        match *self {
            Expression::Conjunction(..) => Some(Operator::Conjunction),
            Expression::Disjunction(..) => Some(Operator::Disjunction),
            Expression::RightImplication(..) => Some(Operator::RightImplication),
            Expression::LeftImplication(..) => Some(Operator::LeftImplication),
            Expression::BiImplication(..) => Some(Operator::BiImplication),
            _ => None,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expression> {
        match *self {
            Expression::Proposition(_) | Expression::Predicate(..) => vec![],
            Expression::Negation(ref operand)
            | Expression::ForAll(_, ref operand)
            | Expression::ThereExists(_, ref operand) => vec![&**operand],
            Expression::Conjunction(ref lhs, ref rhs)
            | Expression::Disjunction(ref lhs, ref rhs)
            | Expression::RightImplication(ref lhs, ref rhs)
            | Expression::LeftImplication(ref lhs, ref rhs)
            | Expression::BiImplication(ref lhs, ref rhs) => vec![&**lhs, &**rhs],
        }
    }
}
