use std::panic::{catch_unwind, AssertUnwindSafe};

use lark_ir::Value;

use crate::Runtime;

#[test]
fn guard_truncates_on_normal_exit() {
    let mut runtime = Runtime::new();
    runtime.assign("kept", Value::Int(1));
    {
        let mut scoped = runtime.scoped();
        scoped.assign("dropped", Value::Int(2));
        assert_eq!(scoped.scope().len(), 2);
    }
    assert_eq!(runtime.scope().names(), vec!["kept"]);
}

#[test]
fn guard_restores_level() {
    let mut runtime = Runtime::new();
    runtime.with_scope(|scoped| {
        scoped.enter_call(4);
        assert_eq!(scoped.level(), 4);
    });
    assert_eq!(runtime.level(), 0);
}

#[test]
fn guard_truncates_on_error() {
    let mut runtime = Runtime::new();
    let result: Result<(), &str> = runtime.with_scope(|scoped| {
        scoped.assign("temp", Value::Bool(true));
        Err("failed")
    });
    assert_eq!(result, Err("failed"));
    assert!(runtime.scope().is_empty());
}

#[test]
fn guard_truncates_on_panic() {
    let mut runtime = Runtime::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        runtime.with_scope(|outer| {
            outer.assign("a", Value::Int(1));
            outer.with_scope(|inner| {
                inner.enter_call(2);
                inner.assign("b", Value::Int(2));
                panic!("boom");
            });
        });
    }));
    assert!(result.is_err());
    assert!(runtime.scope().is_empty());
    assert_eq!(runtime.level(), 0);
}
