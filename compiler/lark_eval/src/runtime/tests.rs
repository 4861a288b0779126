use super::*;
use pretty_assertions::assert_eq;

#[test]
fn starts_with_every_builtin() {
    let runtime = Runtime::new();
    for builtin in Builtin::ALL {
        let def = runtime
            .function(builtin.name())
            .unwrap_or_else(|| panic!("{} missing", builtin.name()));
        assert_eq!(def.level, 0);
        assert_eq!(def.arity(), builtin.params().len());
    }
    assert!(runtime.scope().is_empty());
    assert_eq!(runtime.level(), 0);
}

#[test]
fn later_definition_replaces_earlier() {
    let mut runtime = Runtime::new();
    runtime.define_function("f", Rc::new(FunctionDef::new(vec![], vec![], 1)));
    runtime.define_function(
        "f",
        Rc::new(FunctionDef::new(vec!["x".to_owned()], vec![], 1)),
    );
    assert_eq!(runtime.function("f").map(FunctionDef::arity), Some(1));
}

#[test]
fn concrete_values_resolve_to_themselves() {
    let runtime = Runtime::new();
    for value in [Value::Int(7), Value::str("s"), Value::Bool(true)] {
        assert_eq!(runtime.resolve(&value), Ok(value.clone()));
    }
}

#[test]
fn references_follow_chains() {
    let mut runtime = Runtime::new();
    runtime.assign("a", Value::Int(1));
    runtime.assign("b", Value::var("a"));
    runtime.assign("c", Value::var("b"));
    assert_eq!(runtime.resolve(&Value::var("c")), Ok(Value::Int(1)));
    assert_eq!(runtime.show(&Value::var("c")), Ok("1".to_owned()));
}

#[test]
fn references_are_looked_up_at_use_time() {
    let mut runtime = Runtime::new();
    runtime.assign("y", Value::var("x"));
    runtime.assign("x", Value::Int(1));
    assert_eq!(runtime.resolve(&Value::var("y")), Ok(Value::Int(1)));
    runtime.assign("x", Value::Int(2));
    assert_eq!(runtime.resolve(&Value::var("y")), Ok(Value::Int(2)));
}

#[test]
fn reference_cycles_are_errors() {
    let mut runtime = Runtime::new();
    runtime.assign("x", Value::Int(1));
    runtime.assign("x", Value::var("x"));
    assert_eq!(
        runtime.resolve(&Value::var("x")),
        Err(EvalError::CyclicReference("x".to_owned()))
    );

    let mut mutual = Runtime::new();
    mutual.assign("a", Value::var("b"));
    mutual.assign("b", Value::var("a"));
    assert_eq!(
        mutual.resolve(&Value::var("a")).map_err(|e| e.to_string()),
        Err("a refers back to itself".to_owned())
    );
}

#[test]
fn undefined_variable() {
    let runtime = Runtime::new();
    assert_eq!(
        runtime.resolve(&Value::var("ghost")).map_err(|e| e.to_string()),
        Err("ghost is not defined".to_owned())
    );
}

#[test]
fn bindings_above_active_level_are_unreachable() {
    let mut runtime = Runtime::new();
    runtime.with_scope(|scoped| {
        scoped.enter_call(2);
        scoped.assign("deep", Value::Int(1));
        scoped.with_scope(|inner| {
            inner.enter_call(1);
            assert_eq!(
                inner.resolve(&Value::var("deep")),
                Err(EvalError::Unreachable("deep".to_owned()))
            );
        });
        assert_eq!(scoped.resolve(&Value::var("deep")), Ok(Value::Int(1)));
    });
}

#[test]
fn lower_level_bindings_stay_visible() {
    let mut runtime = Runtime::new();
    runtime.assign("top", Value::str("t"));
    runtime.with_scope(|scoped| {
        scoped.enter_call(3);
        assert_eq!(scoped.resolve(&Value::var("top")), Ok(Value::str("t")));
    });
}
