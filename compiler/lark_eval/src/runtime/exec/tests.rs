use std::rc::Rc;

use lark_ir::{FunctionDef, Instr, Value};
use pretty_assertions::assert_eq;

use crate::{EvalConfig, EvalError, PrintHandler, Runtime};

fn buffered() -> (Runtime, crate::SharedPrintHandler) {
    let print = PrintHandler::buffer();
    (Runtime::new().with_print_handler(print.clone()), print)
}

fn int(i: i64) -> Instr {
    Instr::literal(i)
}

#[test]
fn sequence_yields_last_value() {
    let mut runtime = Runtime::new();
    assert_eq!(runtime.exec(&[]), Ok(None));
    assert_eq!(
        runtime.exec(&[int(1), Instr::literal("two")]),
        Ok(Some(Value::str("two")))
    );
}

#[test]
fn sequence_stops_at_first_error() {
    let (mut runtime, print) = buffered();
    let program = [
        Instr::call("print", vec![int(1)]),
        Instr::call("missing", vec![]),
        Instr::call("print", vec![int(2)]),
    ];
    assert_eq!(
        runtime.exec(&program),
        Err(EvalError::UndefinedFunction("missing".to_owned()))
    );
    assert_eq!(print.output(), "1\n");
}

#[test]
fn assignment_shadows_without_overwriting() {
    let mut runtime = Runtime::new();
    runtime
        .exec(&[Instr::assign("x", int(1)), Instr::assign("x", int(2))])
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(runtime.scope().len(), 2);
    assert_eq!(runtime.resolve(&Value::var("x")), Ok(Value::Int(2)));
}

#[test]
fn call_binds_params_at_callee_level_and_pops_them() {
    let mut runtime = Runtime::new();
    let body = vec![Instr::assign("local", Instr::var("p")), Instr::var("local")];
    runtime.define_function(
        "f",
        Rc::new(FunctionDef::new(vec!["p".to_owned()], body, 1)),
    );
    runtime.assign("outer", Value::Int(0));

    let result = runtime.eval(&Instr::call("f", vec![Instr::literal("arg")]));
    assert_eq!(result, Ok(Some(Value::str("arg"))));
    assert_eq!(runtime.scope().names(), vec!["outer"]);
    assert_eq!(runtime.level(), 0);
}

#[test]
fn arity_is_checked_before_arguments_run() {
    let (mut runtime, print) = buffered();
    let call = Instr::call(
        "plus",
        vec![Instr::call("print", vec![int(1)])],
    );
    assert_eq!(
        runtime.eval(&call).map_err(|e| e.to_string()),
        Err("arg count mismatch 1 != 2".to_owned())
    );
    assert_eq!(print.output(), "");
}

#[test]
fn argument_without_value_is_an_error() {
    let mut runtime = Runtime::new();
    let call = Instr::call("print", vec![Instr::call("print", vec![int(1)])]);
    assert_eq!(
        runtime.eval(&call),
        Err(EvalError::NoValue("argument 1 of print".to_owned()))
    );
}

#[test]
fn condition_must_be_bool() {
    let mut runtime = Runtime::new();
    let instr = Instr::if_else(int(1), vec![int(2)], vec![]);
    assert_eq!(runtime.eval(&instr), Err(EvalError::NonBoolCondition));
}

#[test]
fn missing_else_yields_no_value() {
    let mut runtime = Runtime::new();
    let instr = Instr::if_else(Instr::literal(false), vec![int(2)], vec![]);
    assert_eq!(runtime.eval(&instr), Ok(None));
}

#[test]
fn branch_bindings_are_popped_even_on_error() {
    let mut runtime = Runtime::new();
    let instr = Instr::if_else(
        Instr::literal(true),
        vec![Instr::assign("tmp", int(1)), Instr::var("nope")],
        vec![],
    );
    assert_eq!(
        runtime.eval(&instr),
        Err(EvalError::UndefinedVariable("nope".to_owned()))
    );
    assert!(runtime.scope().is_empty());
}

#[test]
fn not_requires_bool() {
    let mut runtime = Runtime::new();
    assert_eq!(
        runtime.eval(&Instr::not(Instr::literal(true))),
        Ok(Some(Value::Bool(false)))
    );
    assert_eq!(
        runtime.eval(&Instr::not(Instr::literal("yes"))),
        Err(EvalError::ExpectedBool)
    );
}

#[test]
fn boolean_operands_resolve_variables() {
    let mut runtime = Runtime::new();
    runtime.assign("t", Value::Bool(true));
    assert_eq!(
        runtime.eval(&Instr::And(vec![Instr::var("t"), Instr::not(Instr::literal(false))])),
        Ok(Some(Value::Bool(true)))
    );
}

#[test]
fn or_short_circuits() {
    let mut runtime = Runtime::new();
    let instr = Instr::Or(vec![Instr::literal(true), Instr::var("undefined")]);
    assert_eq!(runtime.eval(&instr), Ok(Some(Value::Bool(true))));

    let instr = Instr::Or(vec![Instr::literal(false), Instr::literal(false)]);
    assert_eq!(runtime.eval(&instr), Ok(Some(Value::Bool(false))));
}

#[test]
fn and_evaluates_every_operand() {
    let mut runtime = Runtime::new();
    let instr = Instr::And(vec![Instr::literal(false), int(3)]);
    assert_eq!(runtime.eval(&instr), Err(EvalError::ExpectedBool));
}

#[test]
fn call_depth_limit() {
    let mut runtime = Runtime::new().with_config(EvalConfig::default().with_max_call_depth(5));
    let body = vec![Instr::call("loop", vec![])];
    runtime.define_function("loop", Rc::new(FunctionDef::new(vec![], body, 1)));
    assert_eq!(
        runtime.eval(&Instr::call("loop", vec![])),
        Err(EvalError::CallDepthExceeded(5))
    );
    assert!(runtime.scope().is_empty());
}
