//! Truth-table enumeration.
//!
//! The free variables of an expression are fixed in lexicographic order `[v₀, v₁, ..., vₙ₋₁]`,
//! and the expression is evaluated once for each of the `2ⁿ` assignments in binary-counting
//! order.
//!
//! # Variable Ordering
//!
//! For row index `i`, variable `vⱼ` has value `(i >> j) & 1`, so `v₀` is the least
//! significant bit. For `n = 2` with variables `A`, `B`:
//!
//! - Row 0 (binary 00): A=0, B=0
//! - Row 1 (binary 01): A=1, B=0
//! - Row 2 (binary 10): A=0, B=1
//! - Row 3 (binary 11): A=1, B=1

use std::fmt;

use log::{debug, trace, warn};

use crate::ast::Expression;
use crate::error::{Result, TruthTableError};
use crate::eval::Valuation;
use crate::types::Variable;

/// Default limit on free variables, `2³⁰` rows.
pub const DEFAULT_MAX_VARIABLES: usize = 30;

/// Bounded collector for truth-table rows.
///
/// Values pushed once the declared capacity is reached are dropped without growing the
/// container; [`dropped`][Values::dropped] counts them. Use [`try_push`][Values::try_push]
/// to turn an overflow into an error instead.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Values {
    values: Vec<bool>,
    capacity: usize,
    dropped: usize,
}

impl Values {
    /// Collector that keeps at most `capacity` values.
    ///
    /// The capacity is a logical bound; storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_reserved(capacity, 0)
    }

    /// Like [`with_capacity`][Values::with_capacity], but preallocates room for
    /// `min(capacity, expected)` values.
    pub fn with_reserved(capacity: usize, expected: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity.min(expected)),
            capacity,
            dropped: 0,
        }
    }

    /// Appends `value` if there is room left, returns whether it was stored.
    pub fn push(&mut self, value: bool) -> bool {
        if self.values.len() < self.capacity {
            self.values.push(value);
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    pub fn try_push(&mut self, value: bool) -> Result<(), TruthTableError> {
        if self.push(value) {
            Ok(())
        } else {
            Err(TruthTableError::CapacityExceeded {
                capacity: self.capacity,
            })
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values ignored because the collector was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.values
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

/// What to do when a row does not fit into the declared capacity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum OverflowPolicy {
    /// Silently drop the row.
    #[default]
    Truncate,
    /// Fail with [`TruthTableError::CapacityExceeded`].
    Error,
}

/// Configuration options for truth-table enumeration.
///
/// Use `TruthTableConfig::default()` for standard settings.
///
/// ```
/// use logic_eval::truth_table::{OverflowPolicy, TruthTable, TruthTableConfig};
///
/// let e = logic_eval::parse("A & B").unwrap();
/// let config = TruthTableConfig {
///     row_limit: Some(2),
///     ..TruthTableConfig::default()
/// };
/// let table = TruthTable::build_with_config(&e, &config).unwrap();
/// assert_eq!(table.values().as_slice(), &[false, false]);
/// assert_eq!(table.values().dropped(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTableConfig {
    /// Maximum number of free variables (default: 30)
    pub max_variables: usize,
    /// Declared row capacity; `None` means exactly `2ⁿ` (default: None)
    pub row_limit: Option<usize>,
    /// Behaviour on rows past the capacity (default: truncate)
    pub overflow: OverflowPolicy,
}

impl Default for TruthTableConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            row_limit: None,
            overflow: OverflowPolicy::Truncate,
        }
    }
}

/// Valuation of row `row` over the ordered `vars`.
struct RowValuation<'a> {
    vars: &'a [Variable],
    row: usize,
}

impl Valuation for RowValuation<'_> {
    fn value(&self, var: &Variable) -> Option<bool> {
        let j = self.vars.binary_search(var).ok()?;
        Some((self.row >> j) & 1 == 1)
    }
}

/// Truth table of an expression together with its variable order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Variable>,
    values: Values,
}

impl TruthTable {
    pub fn build(expr: &Expression) -> Result<Self> {
        Self::build_with_config(expr, &TruthTableConfig::default())
    }

    pub fn build_with_config(expr: &Expression, config: &TruthTableConfig) -> Result<Self> {
        let variables: Vec<Variable> = expr.variables().into_iter().collect();
        let n = variables.len();
        let max = config.max_variables.min(usize::BITS as usize - 1);
        if n > max {
            return Err(TruthTableError::TooManyVariables { count: n, max }.into());
        }

        let rows = 1usize << n;
        let capacity = config.row_limit.unwrap_or(rows);
        debug!("truth table: {} variables, {} rows, capacity {}", n, rows, capacity);

        let mut values = Values::with_reserved(capacity, rows);
        for row in 0..rows {
            let value = expr.eval(&RowValuation {
                vars: &variables,
                row,
            })?;
            trace!("row {} => {}", row, value);
            match config.overflow {
                OverflowPolicy::Truncate => {
                    values.push(value);
                }
                OverflowPolicy::Error => values.try_push(value)?,
            }
        }
        if values.dropped() > 0 {
            warn!("truth table truncated: dropped {} of {} rows", values.dropped(), rows);
        }

        Ok(Self { variables, values })
    }

    /// Variables in enumeration order; index `j` is bit `j` of the row index.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<bool> {
        self.values.as_slice().get(index).copied()
    }

    /// The assignment enumerated at row `index`.
    pub fn assignment(&self, index: usize) -> impl Iterator<Item = (&Variable, bool)> + '_ {
        self.variables
            .iter()
            .enumerate()
            .map(move |(j, var)| (var, (index >> j) & 1 == 1))
    }

    pub fn into_values(self) -> Vec<bool> {
        self.values.into_vec()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| =")?;
        for (i, value) in self.values.as_slice().iter().enumerate() {
            for (var, bit) in self.assignment(i) {
                let width = var.name().len();
                write!(f, "{:<width$} ", bit as u8, width = width)?;
            }
            writeln!(f, "| {}", *value as u8)?;
        }
        Ok(())
    }
}

/// Evaluates `expr` over every assignment of its free variables.
///
/// Fails with [`TruthTableError::TooManyVariables`] past [`DEFAULT_MAX_VARIABLES`];
/// use [`TruthTable::build_with_config`] to raise the limit.
pub fn enumerate_truth_table(expr: &Expression) -> Result<Vec<bool>> {
    TruthTable::build(expr).map(TruthTable::into_values)
}
