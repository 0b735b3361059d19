// Licensed under MIT. See LICENSE for details.

use std::fmt;

use thiserror::Error;

/// What an identifier token is used for, reported in construction errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Proposition,
    PredicateName,
    PredicateArgument,
    BoundVariable,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Role::Proposition => "proposition label",
            Role::PredicateName => "predicate name",
            Role::PredicateArgument => "predicate argument",
            Role::BoundVariable => "bound variable",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("{role} must not be empty")]
    EmptyIdent { role: Role },

    #[error("{role} '{ident}' must not contain whitespace")]
    InvalidIdent { role: Role, ident: String },
}

pub type Result<T> = std::result::Result<T, Error>;
