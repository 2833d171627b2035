use std::collections::HashMap;

use test_log::test;

use logic_eval::ast::{ChainBuilder, Expression};
use logic_eval::error::{Error, EvalError, ParseError, ValidationError};
use logic_eval::truth_table::TruthTable;
use logic_eval::types::{Operator, Variable};
use logic_eval::{enumerate_truth_table, evaluate, free_variables, is_valid, parse, Assignment};

fn assignment(pairs: &[(&str, bool)]) -> Assignment {
    pairs.iter().map(|&(name, value)| (Variable::new(name), value)).collect()
}

#[test]
fn test_validator_cases() {
    assert!(is_valid("(A | B) & (C & D)"));
    assert!(!is_valid("(A | B) & (C & D"));
    assert!(!is_valid("(A | B)) & (C & D"));
    assert!(!is_valid("(A | B) & (C & D))"));
    assert!(!is_valid("(A | B) & (@C & D)"));
}

#[test]
fn test_free_variables_of_manual_chain() {
    let names = ["A", "B", "C", "D", "E"];
    let mut builder = ChainBuilder::new(Expression::var(names[0]));
    for name in &names[1..] {
        builder = builder.push(Operator::And, Expression::var(*name));
    }
    let e = builder.build().unwrap();
    let vars: Vec<Variable> = free_variables(&e).into_iter().collect();
    let expected: Vec<Variable> = names.iter().map(|&n| Variable::new(n)).collect();
    assert_eq!(vars, expected);
}

#[test]
fn test_row_count_is_power_of_two() {
    for (text, k) in [
        ("A", 1),
        ("A | B", 2),
        ("A & (B | !A) > C", 3),
        ("(p & q) | (r & s) | (p & t)", 5),
    ] {
        let e = parse(text).unwrap();
        assert_eq!(free_variables(&e).len(), k);
        assert_eq!(enumerate_truth_table(&e).unwrap().len(), 1 << k, "{}", text);
    }
}

#[test]
fn test_evaluate_or_and_not_or() {
    let values = assignment(&[("A", true), ("B", false)]);
    let e = parse("A OR B").unwrap();
    assert!(evaluate(&e, &values).unwrap());
    let e = parse("NOT(A OR B)").unwrap();
    assert!(!evaluate(&e, &values).unwrap());
}

#[test]
fn test_implies_truth_table() {
    let e = parse("A IMPLIES B").unwrap();
    let table = TruthTable::build(&e).unwrap();
    for row in 0..table.len() {
        let values: HashMap<&str, bool> = table.assignment(row).map(|(v, b)| (v.name(), b)).collect();
        let expected = !(values["A"] && !values["B"]);
        assert_eq!(table.row(row), Some(expected));
    }
}

#[test]
fn test_round_trip() {
    let a = Expression::var("A");
    let b = Expression::var("B");
    let c = Expression::var("C");
    let built = Expression::binary(
        Expression::binary(a.clone(), Operator::Or, b.clone()).unwrap(),
        Operator::Implies,
        Expression::not(Expression::chain(Operator::And, vec![a, b, c]).unwrap()),
    )
    .unwrap();

    assert_eq!(parse("(A | B) > !(A & B & C)").unwrap(), built);
    assert_eq!(parse("(A OR B) implies not (A and B and C)").unwrap(), built);
    assert_eq!(parse(&built.to_string()).unwrap(), built);
}

#[test]
fn test_missing_variable() {
    let e = parse("A & B").unwrap();
    let res = evaluate(&e, &assignment(&[("A", true)]));
    assert_eq!(res, Err(EvalError::MissingVariable(Variable::new("B"))));
}

#[test]
fn test_pipeline_errors() {
    assert!(matches!(
        parse("A & -B"),
        Err(Error::Validation(ValidationError::InvalidCharacter { ch: '-', .. }))
    ));
    assert!(matches!(
        parse("A & & B"),
        Err(Error::Parse(ParseError::UnexpectedToken { .. }))
    ));
    assert!(matches!(parse("A B"), Err(Error::Parse(ParseError::TrailingTokens { .. }))));
    assert!(matches!(parse(""), Err(Error::Parse(ParseError::Empty))));
}

#[test]
fn test_deeply_nested_input() {
    let parens = format!("{}A{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(is_valid(&parens));
    assert!(matches!(parse(&parens), Err(Error::Parse(ParseError::TooDeep { .. }))));

    let nots = format!("{}A", "NOT ".repeat(10_000));
    assert!(matches!(parse(&nots), Err(Error::Parse(ParseError::TooDeep { .. }))));

    let e = parse(&format!("{}A", "~".repeat(100))).unwrap();
    assert_eq!(e.depth(), 100);
}

#[test]
fn test_shared_across_threads() {
    let e = parse("(A | B) & !C").unwrap();
    let expected = enumerate_truth_table(&e).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| enumerate_truth_table(&e).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
