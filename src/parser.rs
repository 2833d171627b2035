//! Precedence-climbing parser.
//!
//! Grammar, from the weakest binding level to the strongest:
//!
//! ```text
//! implies := or    ( IMPLIES or )*
//! or      := and   ( OR and )*
//! and     := unary ( AND unary )*
//! unary   := NOT unary | atom
//! atom    := IDENT | '(' implies ')'
//! ```
//!
//! A run of two or more operands at one binary level becomes a single [`Chain`] node.
//! Parentheses are never flattened: `(A AND B) AND C` is a chain whose first operand
//! is itself a chain.
//!
//! [`Chain`]: crate::ast::Chain

use log::debug;

use crate::ast::Expression;
use crate::error::ParseError;
use crate::lexer::Token;
use crate::types::{Operator, Variable};

/// Binary levels, weakest first.
const LEVELS: [Operator; 3] = [Operator::Implies, Operator::Or, Operator::And];

/// Default limit on nested groups and NOT prefixes.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Parser that fails with [`ParseError::TooDeep`] once more than `max_depth`
    /// parentheses and NOT prefixes are open at the same time.
    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parses the whole token sequence into one expression.
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        debug!("parse(tokens = {})", self.tokens.len());
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        let expr = self.parse_level(0)?;
        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingTokens {
                token: token.clone(),
                position: self.pos,
            });
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self, position: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            debug!("nesting deeper than {} at position {}", self.max_depth, position);
            return Err(ParseError::TooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn eat_op(&mut self, op: Operator) -> bool {
        if self.peek() == Some(&Token::Op(op)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Parses binary level `level` of [`LEVELS`], falling through to unary past the last one.
    fn parse_level(&mut self, level: usize) -> Result<Expression, ParseError> {
        let Some(&op) = LEVELS.get(level) else {
            return self.parse_unary();
        };

        let first = self.parse_level(level + 1)?;
        if !self.eat_op(op) {
            return Ok(first);
        }

        let mut operands = vec![first];
        loop {
            operands.push(self.parse_level(level + 1)?);
            if !self.eat_op(op) {
                break;
            }
        }
        debug!("chain {} with {} operands", op, operands.len());
        Ok(Expression::chain_unchecked(op, operands))
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let position = self.pos;
        if self.eat_op(Operator::Not) {
            self.enter(position)?;
            let child = self.parse_unary()?;
            self.leave();
            return Ok(Expression::not(child));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Expression, ParseError> {
        let position = self.pos;
        match self.next() {
            None => Err(ParseError::UnexpectedEnd { expected: "operand" }),
            Some(Token::Ident(name)) => match Variable::try_new(name) {
                Some(var) => Ok(Expression::Leaf(var)),
                None => Err(ParseError::InvalidIdentifier {
                    name: self.tokens[position].to_string(),
                    position,
                }),
            },
            Some(Token::LParen) => {
                self.enter(position)?;
                let inner = self.parse_level(0)?;
                self.leave();
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(ParseError::UnexpectedToken {
                        token,
                        position: self.pos - 1,
                    }),
                    None => Err(ParseError::UnexpectedEnd { expected: "')'" }),
                }
            }
            Some(token) => Err(ParseError::UnexpectedToken { token, position }),
        }
    }
}

/// Parses a token sequence produced by [`tokenize`][crate::lexer::tokenize].
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    Parser::new(tokens).parse()
}
