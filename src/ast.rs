//! Expression trees.
//!
//! An [`Expression`] is one of three node kinds:
//!
//! - [`Expression::Leaf`]: a single [`Variable`],
//! - [`Expression::Unary`]: `NOT` applied to one child,
//! - [`Expression::Chain`]: a left-to-right run of two or more operands joined by the *same*
//!   chainable operator, so `A AND B AND C` is one node rather than nested binary nodes.
//!
//! Node invariants are enforced by the constructors: the payloads of [`Unary`] and [`Chain`]
//! are private, so a malformed node cannot be built from outside this module.
//! Expressions are immutable once constructed.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::error::BuildError;
use crate::types::{Operator, Variable};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expression {
    Leaf(Variable),
    Unary(Unary),
    Chain(Chain),
}

/// `NOT child`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Unary {
    child: Box<Expression>,
}

impl Unary {
    pub fn operator(&self) -> Operator {
        Operator::Not
    }

    pub fn child(&self) -> &Expression {
        &self.child
    }
}

/// Run of `operands` joined by a single chainable `operator`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Chain {
    operator: Operator,
    operands: Vec<Expression>,
}

impl Chain {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Operands in left-to-right order, at least two.
    pub fn operands(&self) -> &[Expression] {
        &self.operands
    }
}

impl Expression {
    /// Creates a leaf for the variable named `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid variable name, see [`Variable::new`].
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Leaf(Variable::new(name))
    }

    pub fn not(child: Self) -> Self {
        Expression::Unary(Unary {
            child: Box::new(child),
        })
    }

    pub fn binary(lhs: Self, operator: Operator, rhs: Self) -> Result<Self, BuildError> {
        Self::chain(operator, vec![lhs, rhs])
    }

    /// Creates a chain node, checking the operator class and the operand count.
    pub fn chain(operator: Operator, operands: Vec<Self>) -> Result<Self, BuildError> {
        if !operator.is_chainable() {
            return Err(BuildError::NotChainable(operator));
        }
        if operands.len() < 2 {
            return Err(BuildError::TooFewOperands(operands.len()));
        }
        Ok(Expression::Chain(Chain { operator, operands }))
    }

    /// Chain constructor for callers that guarantee the invariants themselves.
    pub(crate) fn chain_unchecked(operator: Operator, operands: Vec<Self>) -> Self {
        debug_assert!(operator.is_chainable());
        debug_assert!(operands.len() >= 2);
        Expression::Chain(Chain { operator, operands })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Leaf(_))
    }

    /// The operator at the root, `None` for leaves.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Leaf(_) => None,
            Expression::Unary(unary) => Some(unary.operator()),
            Expression::Chain(chain) => Some(chain.operator()),
        }
    }

    /// Direct subexpressions: none for a leaf, the child for a unary node,
    /// all operands for a chain.
    pub fn operands(&self) -> &[Expression] {
        match self {
            Expression::Leaf(_) => &[],
            Expression::Unary(unary) => std::slice::from_ref(&*unary.child),
            Expression::Chain(chain) => chain.operands(),
        }
    }

    /// A single operator with at most two operands.
    pub fn is_simple(&self) -> bool {
        match self {
            Expression::Leaf(_) => false,
            Expression::Unary(_) => true,
            Expression::Chain(chain) => chain.operands.len() == 2,
        }
    }

    /// Free variables, ordered by name.
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Expression::Leaf(var) => {
                if !vars.contains(var) {
                    vars.insert(var.clone());
                }
            }
            Expression::Unary(unary) => unary.child.collect_variables(vars),
            Expression::Chain(chain) => {
                for operand in &chain.operands {
                    operand.collect_variables(vars);
                }
            }
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.operands().iter().map(Expression::size).sum::<usize>()
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        self.operands()
            .iter()
            .map(|e| 1 + e.depth())
            .max()
            .unwrap_or(0)
    }
}

impl From<Variable> for Expression {
    fn from(var: Variable) -> Self {
        Expression::Leaf(var)
    }
}

/// Prints the fully parenthesized form, e.g. `( NOT ( A OR B ) )`.
///
/// The output parses back into an equal expression.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Leaf(var) => write!(f, "{}", var),
            Expression::Unary(unary) => write!(f, "( {} {} )", unary.operator(), unary.child),
            Expression::Chain(chain) => {
                write!(f, "( {}", chain.operands[0])?;
                for operand in &chain.operands[1..] {
                    write!(f, " {} {}", chain.operator, operand)?;
                }
                write!(f, " )")
            }
        }
    }
}

/// Assembles a chain operand by operand, checking it once in [`build`][ChainBuilder::build].
///
/// ```
/// use logic_eval::ast::{ChainBuilder, Expression};
/// use logic_eval::types::Operator;
///
/// let e = ChainBuilder::new(Expression::var("A"))
///     .push(Operator::And, Expression::var("B"))
///     .push(Operator::And, Expression::var("C"))
///     .build()
///     .unwrap();
/// assert_eq!(e.to_string(), "( A AND B AND C )");
/// ```
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    operands: Vec<Expression>,
    operators: Vec<Operator>,
}

impl ChainBuilder {
    pub fn new(first: Expression) -> Self {
        Self {
            operands: vec![first],
            operators: Vec::new(),
        }
    }

    pub fn push(mut self, operator: Operator, operand: Expression) -> Self {
        self.operators.push(operator);
        self.operands.push(operand);
        self
    }

    pub fn build(self) -> Result<Expression, BuildError> {
        let Some(&first) = self.operators.first() else {
            return Err(BuildError::TooFewOperands(self.operands.len()));
        };
        if let Some(&other) = self.operators.iter().find(|&&op| op != first) {
            return Err(BuildError::MixedOperators { first, other });
        }
        debug!("build chain: {} x {}", first, self.operands.len());
        Expression::chain(first, self.operands)
    }
}
