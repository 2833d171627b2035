//! Operators and variables: the atoms every expression is built from.
//!
//! [`Operator`] is a closed set with a fixed arity class, and [`Variable`] is a
//! named proposition whose identity is its name.
use std::fmt;

/// Arity class of an [`Operator`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Arity {
    /// Prefix operator with exactly one operand.
    Unary,
    /// Associative binary operator that may join a run of two or more operands.
    Chainable,
}

/// A propositional connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Not, Operator::And, Operator::Or, Operator::Implies];

    pub fn arity(self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            Operator::And | Operator::Or | Operator::Implies => Arity::Chainable,
        }
    }

    pub fn is_chainable(self) -> bool {
        self.arity() == Arity::Chainable
    }

    /// Binding strength, higher binds tighter.
    ///
    /// `IMPLIES < OR < AND < NOT`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Implies => 1,
            Operator::Or => 2,
            Operator::And => 3,
            Operator::Not => 4,
        }
    }

    /// Reduces two operands of a chainable operator.
    ///
    /// Implication is `!lhs || rhs`.
    ///
    /// # Panics
    ///
    /// Panics if called on [`Operator::Not`], which never joins a chain.
    pub fn reduce(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Operator::And => lhs && rhs,
            Operator::Or => lhs || rhs,
            Operator::Implies => !lhs || rhs,
            Operator::Not => panic!("NOT is a unary operator and cannot reduce two operands"),
        }
    }

    /// Applies a unary operator.
    ///
    /// # Panics
    ///
    /// Panics if called on a chainable operator.
    pub fn apply_unary(self, value: bool) -> bool {
        match self {
            Operator::Not => !value,
            _ => panic!("{} is not a unary operator", self),
        }
    }

    /// Canonical symbolic spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Implies => ">",
        }
    }

    /// Canonical word spelling.
    pub fn word(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Implies => "IMPLIES",
        }
    }

    /// Maps any recognized spelling to its operator.
    ///
    /// Words are matched case-insensitively.
    pub fn from_spelling(s: &str) -> Option<Self> {
        match s {
            "!" | "~" => return Some(Operator::Not),
            "&" | "&&" => return Some(Operator::And),
            "|" | "||" => return Some(Operator::Or),
            ">" | "=>" => return Some(Operator::Implies),
            _ => {}
        }
        Operator::ALL
            .into_iter()
            .find(|op| op.word().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A named propositional variable.
///
/// Two variables are the same entity iff their names are equal (case-sensitive).
///
/// # Invariants
///
/// - The name is non-empty
/// - The name consists of ASCII alphanumerics and `_`
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Variable(String);

impl Variable {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid variable name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(Self::is_valid_name(&name), "Invalid variable name: {:?}", name);
        Variable(name)
    }

    /// Creates a new variable, or returns `None` if `name` is not a valid variable name.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::is_valid_name(&name).then_some(Variable(name))
    }

    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(is_word_char)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Variable> for String {
    fn from(var: Variable) -> Self {
        var.0
    }
}

/// Characters allowed inside identifiers and operator words.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters allowed inside symbolic operator spellings.
///
/// Includes a few characters (`<`, `^`, `=`) that only form operators in combination,
/// or not at all; those are rejected by the parser rather than the validator.
pub(crate) fn is_symbol_char(c: char) -> bool {
    matches!(c, '!' | '~' | '&' | '|' | '>' | '<' | '^' | '=')
}
