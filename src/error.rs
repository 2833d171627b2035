//! Error types for every stage of the pipeline.

use crate::lexer::Token;
use crate::types::{Operator, Variable};

/// Surface-syntax violation found by the [validator][crate::validate].
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ValidationError {
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("unbalanced ')' at offset {offset}")]
    UnbalancedClose { offset: usize },

    #[error("{open} unclosed '(' at end of input")]
    UnclosedParenthesis { open: usize },
}

/// Grammatically invalid token sequence.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: Token, position: usize },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("trailing token '{token}' at position {position}")]
    TrailingTokens { token: Token, position: usize },

    #[error("invalid identifier '{name}' at position {position}")]
    InvalidIdentifier { name: String, position: usize },

    #[error("nesting too deep at position {position}")]
    TooDeep { position: usize },
}

/// Rejected attempt to construct a malformed [`Expression`][crate::ast::Expression].
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum BuildError {
    #[error("operator {0} cannot join a chain")]
    NotChainable(Operator),

    #[error("chain needs at least 2 operands, got {0}")]
    TooFewOperands(usize),

    #[error("chain mixes operators {first} and {other}")]
    MixedOperators { first: Operator, other: Operator },
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    #[error("no value assigned to variable '{0}'")]
    MissingVariable(Variable),
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum TruthTableError {
    #[error("expression has {count} free variables, at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },

    #[error("truth table capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("malformed expression: {0}")]
    Build(#[from] BuildError),

    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    #[error("truth table: {0}")]
    TruthTable(#[from] TruthTableError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
