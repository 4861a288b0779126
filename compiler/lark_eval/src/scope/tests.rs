use super::*;
use pretty_assertions::assert_eq;

#[test]
fn lookup_prefers_most_recent_binding() {
    let mut stack = ScopeStack::new();
    stack.push("x", Value::Int(1), 0);
    stack.push("y", Value::Int(2), 0);
    stack.push("x", Value::Int(3), 1);

    let binding = stack.lookup("x").unwrap_or_else(|| panic!("x bound"));
    assert_eq!(binding.value, Value::Int(3));
    assert_eq!(binding.level, 1);
}

#[test]
fn truncate_restores_earlier_view() {
    let mut stack = ScopeStack::new();
    stack.push("a", Value::Bool(true), 0);
    let mark = stack.len();
    stack.push("b", Value::Bool(false), 1);
    stack.push("a", Value::Bool(false), 1);
    assert_eq!(stack.names(), vec!["a", "b"]);

    stack.truncate(mark);
    assert_eq!(stack.names(), vec!["a"]);
    assert_eq!(
        stack.lookup("a").map(|b| b.value.clone()),
        Some(Value::Bool(true))
    );
}

#[test]
fn empty_stack() {
    let stack = ScopeStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.lookup("anything"), None);
    assert!(stack.names().is_empty());
}
