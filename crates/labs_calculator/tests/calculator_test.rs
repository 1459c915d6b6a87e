//! End-to-end keypad behaviour.

use labs_calculator::{
    Calculator, Command, HISTORY_CAPACITY, HistoryEntry, Operator, evaluate, format_number,
};
use labs_store::{HISTORY_KEY, KeyValueStore, MemoryStore, SharedStore};
use std::sync::Arc;

fn press(calc: &mut Calculator, keys: &str) {
    for key in keys.chars() {
        let command = Command::from_key(key).expect("mapped key");
        calc.apply(command);
    }
}

fn display_for(input: &str) -> String {
    evaluate(input)
        .map(format_number)
        .unwrap_or_else(|_| "Error".to_string())
}

#[test]
fn test_documented_evaluations() {
    assert_eq!(display_for("2 + 2"), "4");
    assert_eq!(display_for("7 / 0"), "Error");
    assert_eq!(display_for("3 × 4 − 5"), "7");
}

#[test]
fn test_keypad_matches_evaluator() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    press(&mut calc, "2+2=");
    assert_eq!(calc.display_text(), "4");

    calc.clear_all();
    press(&mut calc, "7/0=");
    assert_eq!(calc.display_text(), "Error");

    calc.clear_all();
    press(&mut calc, "3×4−5=");
    assert_eq!(calc.display_text(), "7");
}

#[test]
fn test_history_keeps_fifty_newest_first() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    for i in 1..=60 {
        press(&mut calc, &format!("{}+0=", i));
    }

    let history = calc.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    let results: Vec<&str> = history.iter().map(|e| e.result().as_str()).collect();
    let expected: Vec<String> = (11..=60).rev().map(|i| i.to_string()).collect();
    assert_eq!(results, expected);
}

#[test]
fn test_operator_chain_collapses() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    press(&mut calc, "7+");
    calc.input_operator(Operator::Subtract);

    assert_eq!(calc.expression_text(), "7 −");
    assert_eq!(calc.expression().terms().len(), 1);
    assert_eq!(calc.expression().last_operator(), Some(Operator::Subtract));

    press(&mut calc, "2=");
    assert_eq!(calc.display_text(), "5");
}

#[test]
fn test_single_decimal_point() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    press(&mut calc, "1..5.2");
    assert_eq!(calc.display_text(), "1.52");
    press(&mut calc, "*2=");
    assert_eq!(calc.display_text(), "3.04");
}

#[test]
fn test_error_blocks_arithmetic_until_cleared() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    press(&mut calc, "5/0=");
    assert!(calc.is_error());

    press(&mut calc, "3.+n=p");
    assert_eq!(calc.display_text(), "Error");
    assert_eq!(calc.expression_text(), "5 ÷");

    calc.clear_all();
    assert!(!calc.is_error());
    press(&mut calc, "3+1=");
    assert_eq!(calc.display_text(), "4");
}

#[test]
fn test_failed_evaluation_is_not_logged() {
    let mut calc = Calculator::new(Arc::new(MemoryStore::new()));
    press(&mut calc, "0/0=");
    assert!(calc.is_error());
    assert!(calc.history().is_empty());
}

#[test]
fn test_history_persists_across_instances() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    {
        let mut calc = Calculator::new(store.clone());
        press(&mut calc, "6*7=");
        press(&mut calc, "1+1=");
    }

    let calc = Calculator::new(store.clone());
    let history = calc.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].expression(), "1 + 1");
    assert_eq!(history[1].expression(), "6 × 7");
    assert_eq!(history[1].result(), "42");

    let raw = store.get(HISTORY_KEY).unwrap().unwrap();
    let stored: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_slice(), history);
}

#[test]
fn test_clear_history_removes_stored_entry() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut calc = Calculator::new(store.clone());
    press(&mut calc, "1+2=");
    assert!(store.get(HISTORY_KEY).unwrap().is_some());

    calc.apply(Command::ClearHistory);
    assert!(calc.history().is_empty());
    assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
    assert_eq!(calc.display_text(), "3");
}

#[test]
fn test_corrupt_history_loads_empty() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    store
        .set(HISTORY_KEY, "[{\"id\": \"oops\"".to_string())
        .unwrap();

    let mut calc = Calculator::new(store.clone());
    assert!(calc.history().is_empty());

    press(&mut calc, "2+2=");
    assert_eq!(calc.history().len(), 1);
    assert_eq!(*calc.history()[0].id(), 1);
}
