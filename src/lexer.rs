//! Tokenizer for validated expression text.

use std::fmt;

use crate::types::{is_symbol_char, is_word_char, Operator};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    Op(Operator),
    /// Identifier candidate; the parser decides whether it is a valid variable name.
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Op(op) => write!(f, "{}", op),
            Token::Ident(name) => f.write_str(name),
        }
    }
}

/// Symbolic spellings, longest first so that greedy matching prefers `&&` over `&`.
const SYMBOLS: [(&str, Operator); 8] = [
    ("&&", Operator::And),
    ("||", Operator::Or),
    ("=>", Operator::Implies),
    ("!", Operator::Not),
    ("~", Operator::Not),
    ("&", Operator::And),
    ("|", Operator::Or),
    (">", Operator::Implies),
];

/// Splits `text` into tokens.
///
/// Tokens are delimited by whitespace, parentheses, and boundaries between word runs
/// (`[A-Za-z0-9_]+`) and symbol runs. Word runs spelling an operator (case-insensitive)
/// become [`Token::Op`], other word runs become [`Token::Ident`]. Symbol runs are split
/// greedily into operator spellings; an unrecognized remainder becomes an identifier
/// candidate. Characters outside these classes are expected to have been rejected by
/// [`validate`][crate::validate::validate] and are emitted as identifier candidates.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '(' {
            tokens.push(Token::LParen);
            i += 1;
            continue;
        }
        if c == ')' {
            tokens.push(Token::RParen);
            i += 1;
            continue;
        }

        let start = i;
        if is_word_char(c) {
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            tokens.push(match Operator::from_spelling(&word) {
                Some(op) => Token::Op(op),
                None => Token::Ident(word),
            });
        } else if is_symbol_char(c) {
            while i < chars.len() && is_symbol_char(chars[i]) {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            split_symbols(&run, &mut tokens);
        } else {
            while i < chars.len() && !is_delimiter(chars[i]) {
                i += 1;
            }
            tokens.push(Token::Ident(chars[start..i].iter().collect()));
        }
    }

    tokens
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || is_word_char(c) || is_symbol_char(c)
}

fn split_symbols(mut run: &str, tokens: &mut Vec<Token>) {
    while !run.is_empty() {
        match SYMBOLS.iter().find(|(s, _)| run.starts_with(s)) {
            Some((s, op)) => {
                tokens.push(Token::Op(*op));
                run = &run[s.len()..];
            }
            None => {
                tokens.push(Token::Ident(run.to_string()));
                return;
            }
        }
    }
}
