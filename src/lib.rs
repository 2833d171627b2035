//! # logic-eval: propositional logic in Rust
//!
//! **`logic-eval`** parses propositional-logic expressions from text, represents them as
//! immutable syntax trees, evaluates them against variable assignments and enumerates
//! their truth tables.
//!
//! ## Syntax
//!
//! Expressions are built from variables (`[A-Za-z0-9_]+`, case-sensitive), parentheses and
//! four operators, each with a symbolic and a (case-insensitive) word spelling:
//!
//! | Operator  | Symbols      | Word      | Binding   |
//! |-----------|--------------|-----------|-----------|
//! | negation  | `!`, `~`     | `NOT`     | strongest |
//! | and       | `&`, `&&`    | `AND`     |           |
//! | or        | `\|`, `\|\|` | `OR`      |           |
//! | implies   | `>`, `=>`    | `IMPLIES` | weakest   |
//!
//! Runs of the same binary operator, like `A & B & C`, become a single n-ary chain node.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use logic_eval::types::Variable;
//!
//! // 1. Parse (validates the input first)
//! let e = logic_eval::parse("NOT (A OR B)").unwrap();
//! assert_eq!(e.to_string(), "( NOT ( A OR B ) )");
//!
//! // 2. Evaluate against an assignment
//! let assignment = HashMap::from([(Variable::new("A"), true), (Variable::new("B"), false)]);
//! assert!(!logic_eval::evaluate(&e, &assignment).unwrap());
//!
//! // 3. Enumerate the truth table: A is bit 0, B is bit 1
//! let rows = logic_eval::enumerate_truth_table(&e).unwrap();
//! assert_eq!(rows, vec![true, false, false, false]);
//! ```
//!
//! ## Core Components
//!
//! - **[`validate`]**: character-set and parenthesis-balance check.
//! - **[`lexer`]** and **[`parser`]**: text to [`Expression`].
//! - **[`ast`]**: the [`Expression`] tree and its validated constructors.
//! - **[`eval`]**: evaluation under a [`Valuation`][eval::Valuation].
//! - **[`truth_table`]**: enumeration over all assignments.

use std::collections::BTreeSet;

use log::debug;

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod truth_table;
pub mod types;
pub mod validate;

pub use crate::ast::Expression;
pub use crate::error::{Error, Result};
pub use crate::eval::{evaluate, Assignment};
pub use crate::truth_table::enumerate_truth_table;
pub use crate::validate::{is_valid, validate};

use crate::types::Variable;

/// Validates, tokenizes and parses `text` into an expression.
pub fn parse(text: &str) -> Result<Expression> {
    debug!("parse({:?})", text);
    validate(text)?;
    let tokens = lexer::tokenize(text);
    Ok(parser::parse_tokens(tokens)?)
}

/// Free variables of `expr`, ordered by name.
pub fn free_variables(expr: &Expression) -> BTreeSet<Variable> {
    expr.variables()
}
