// Licensed under MIT. See LICENSE for details.

//! Prints propositional and first-order formulas with the minimum number of
//! parentheses that preserves their structure.

pub mod error;
pub mod ident;
pub mod precedence;
pub mod printer;
pub mod types;

pub use crate::error::{Error, Result, Role};
pub use crate::ident::Ident;
pub use crate::precedence::{precedence, Associativity, Precedence};
pub use crate::printer::{render, Printer};
pub use crate::types::{Expression, Operator};
