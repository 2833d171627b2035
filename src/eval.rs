use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::debug;

use crate::ast::Expression;
use crate::error::EvalError;
use crate::types::Variable;

/// Variable → truth value mapping used for a single evaluation.
pub type Assignment = HashMap<Variable, bool>;

/// Source of variable values during evaluation.
pub trait Valuation {
    fn value(&self, var: &Variable) -> Option<bool>;
}

impl<S: BuildHasher> Valuation for HashMap<Variable, bool, S> {
    fn value(&self, var: &Variable) -> Option<bool> {
        self.get(var).copied()
    }
}

impl Valuation for BTreeMap<Variable, bool> {
    fn value(&self, var: &Variable) -> Option<bool> {
        self.get(var).copied()
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    fn value(&self, var: &Variable) -> Option<bool> {
        (**self).value(var)
    }
}

impl Expression {
    /// Evaluates the expression under `valuation`.
    ///
    /// Chains fold left to right with their operator, so `A > B > C` is `(A > B) > C`.
    /// Every operand is evaluated, hence a variable missing from `valuation` is reported
    /// even where a short-circuit would have skipped it.
    pub fn eval(&self, valuation: &impl Valuation) -> Result<bool, EvalError> {
        match self {
            Expression::Leaf(var) => valuation.value(var).ok_or_else(|| {
                debug!("eval: no value for {}", var);
                EvalError::MissingVariable(var.clone())
            }),
            Expression::Unary(unary) => {
                let value = unary.child().eval(valuation)?;
                Ok(unary.operator().apply_unary(value))
            }
            Expression::Chain(chain) => {
                let op = chain.operator();
                let operands = chain.operands();
                let mut acc = operands[0].eval(valuation)?;
                for operand in &operands[1..] {
                    acc = op.reduce(acc, operand.eval(valuation)?);
                }
                Ok(acc)
            }
        }
    }
}

/// Evaluates `expr` under `valuation`.
pub fn evaluate(expr: &Expression, valuation: &impl Valuation) -> Result<bool, EvalError> {
    expr.eval(valuation)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Operator;

    fn assignment(pairs: &[(&str, bool)]) -> Assignment {
        pairs.iter().map(|&(name, value)| (Variable::new(name), value)).collect()
    }

    fn a_or_b() -> Expression {
        Expression::binary(Expression::var("A"), Operator::Or, Expression::var("B")).unwrap()
    }

    #[test]
    fn test_eval_var() {
        let e = Expression::var("A");
        assert!(e.eval(&assignment(&[("A", true)])).unwrap());
        assert!(!e.eval(&assignment(&[("A", false)])).unwrap());
    }

    #[test]
    fn test_eval_or() {
        let values = assignment(&[("A", true), ("B", false)]);
        assert!(evaluate(&a_or_b(), &values).unwrap());
    }

    #[test]
    fn test_eval_not_or() {
        let values = assignment(&[("A", true), ("B", false)]);
        assert!(!evaluate(&Expression::not(a_or_b()), &values).unwrap());
    }

    #[test]
    fn test_eval_implies() {
        let e = Expression::binary(Expression::var("A"), Operator::Implies, Expression::var("B"))
            .unwrap();
        for a in [false, true] {
            for b in [false, true] {
                let res = e.eval(&assignment(&[("A", a), ("B", b)])).unwrap();
                assert_eq!(res, !(a && !b), "A={} B={}", a, b);
            }
        }
    }

    #[test]
    fn test_eval_implies_chain_folds_left() {
        let e = Expression::chain(
            Operator::Implies,
            vec![Expression::var("A"), Expression::var("B"), Expression::var("C")],
        )
        .unwrap();
        // (F > F) > F = T > F = F, whereas F > (F > F) would be T.
        let values = assignment(&[("A", false), ("B", false), ("C", false)]);
        assert!(!e.eval(&values).unwrap());
    }

    #[test]
    fn test_eval_long_and_chain() {
        let names = ["A", "B", "C", "D", "E"];
        let e = Expression::chain(Operator::And, names.iter().map(|&n| Expression::var(n)).collect())
            .unwrap();
        let all: Assignment = names.iter().map(|&n| (Variable::new(n), true)).collect();
        assert!(e.eval(&all).unwrap());
        let mut one_false = all.clone();
        one_false.insert(Variable::new("D"), false);
        assert!(!e.eval(&one_false).unwrap());
    }

    #[test]
    fn test_eval_missing_variable() {
        let values = assignment(&[("A", true)]);
        let res = a_or_b().eval(&values);
        assert_eq!(res, Err(EvalError::MissingVariable(Variable::new("B"))));
    }

    #[test]
    fn test_eval_retry_after_missing_variable() {
        let e = a_or_b();
        assert!(e.eval(&assignment(&[("B", false)])).is_err());
        assert!(e.eval(&assignment(&[("A", false), ("B", true)])).unwrap());
    }

    #[test]
    fn test_eval_btree_valuation() {
        let values: BTreeMap<Variable, bool> =
            [(Variable::new("A"), false), (Variable::new("B"), false)].into_iter().collect();
        assert!(!a_or_b().eval(&values).unwrap());
    }
}
