// Licensed under MIT. See LICENSE for details.

use std::fmt;

use nom::bytes::complete::take_till1;
use nom::combinator::all_consuming;
use nom::IResult;

use crate::error::{Error, Result, Role};

// A run of one or more non-whitespace characters.
fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// A non-empty, whitespace-free name: a proposition label, a predicate name
/// or argument, or a quantified variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    pub fn new<S: Into<String>>(role: Role, text: S) -> Result<Self> {
        let text = text.into();

        if text.is_empty() {
            return Err(Error::EmptyIdent { role });
        }

        if all_consuming(token)(text.as_str()).is_err() {
            return Err(Error::InvalidIdent { role, ident: text });
        }

        Ok(Ident(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
