//! Integration tests for positional arguments and value types

mod common;

use comandante::error::CoercionResult;
use comandante::{Coercion, Command, Handler, HelpSettings, InvalidValue, Signature, SyntaxError, Value, ValueType};
use common::invoke;

/// An application with a single `test` command returning its arguments
fn app(signature: Signature) -> Handler<Vec<Value>> {
    let test = Command::new("test", |_, invocation| Ok(invocation.arguments().to_vec()))
        .with_signature(signature);
    Handler::new("app")
        .with_settings(HelpSettings::plain(70))
        .with_command(test)
        .unwrap()
}

fn arguments(signature: Signature, argv: &str) -> Vec<Value> {
    let (result, _) = invoke(&app(signature), argv);
    result.unwrap().unwrap()
}

fn syntax_error(signature: Signature, argv: &str) -> SyntaxError {
    let (result, _) = invoke(&app(signature), argv);
    result.unwrap_err().as_syntax().cloned().unwrap()
}

/// Hexadecimal integers, e.g. `0xff`
struct Hex;

impl Coercion for Hex {
    fn name(&self) -> String {
        "hex".to_string()
    }

    fn coerce(&self, raw: &str) -> CoercionResult<Value> {
        let digits = raw.trim_start_matches("0x");
        i64::from_str_radix(digits, 16)
            .map(Value::Int)
            .map_err(|_| InvalidValue::new(self.name(), raw))
    }
}

#[test]
fn test_string_arguments() {
    let signature = Signature::new()
        .required("first", ValueType::String)
        .required("second", ValueType::String);
    assert_eq!(
        arguments(signature, "test hello world"),
        vec![Value::from("hello"), Value::from("world")]
    );
}

#[test]
fn test_argument_types() {
    let signature = Signature::new()
        .required("count", ValueType::Integer)
        .required("ratio", ValueType::Float)
        .required("enabled", ValueType::Boolean);
    assert_eq!(
        arguments(signature, "test 42 0.5 TRUE"),
        vec![Value::Int(42), Value::Float(0.5), Value::Bool(true)]
    );
}

#[test]
fn test_boolean_argument_accepts_its_name() {
    let signature = Signature::new().required("force", ValueType::Boolean);
    assert_eq!(arguments(signature, "test force"), vec![Value::Bool(true)]);
}

#[test]
fn test_optional_argument_default() {
    let signature = || {
        Signature::new()
            .required("a", ValueType::Integer)
            .optional("b", ValueType::String, "dflt")
    };
    assert_eq!(arguments(signature(), "test 5"), vec![Value::Int(5), Value::from("dflt")]);
    assert_eq!(arguments(signature(), "test 5 x"), vec![Value::Int(5), Value::from("x")]);
}

#[test]
fn test_missing_required_argument() {
    let signature = Signature::new().required("a", ValueType::Integer);
    assert!(matches!(
        syntax_error(signature, "test"),
        SyntaxError::ArgumentMissing(argument) if argument.name() == "a"
    ));
}

#[test]
fn test_too_many_arguments() {
    let signature = Signature::new().required("a", ValueType::Integer);
    assert!(matches!(
        syntax_error(signature, "test 1 2"),
        SyntaxError::TooManyArguments { unexpected } if unexpected == "2"
    ));
}

#[test]
fn test_invalid_argument_value() {
    let signature = Signature::new().required("a", ValueType::Integer);
    assert!(matches!(
        syntax_error(signature, "test x"),
        SyntaxError::InvalidArgumentValue { name, expected, value }
            if name == "a" && expected == "int" && value == "x"
    ));
}

#[test]
fn test_variadic_arguments() {
    let signature = || Signature::new().required("a", ValueType::String).variadic("rest", ValueType::Integer);
    assert_eq!(
        arguments(signature(), "test x 1 2 3"),
        vec![Value::from("x"), Value::from(vec![1, 2, 3])]
    );
    assert_eq!(arguments(signature(), "test x"), vec![Value::from("x"), Value::List(vec![])]);
}

#[test]
fn test_negative_number_after_separator() {
    let signature = Signature::new().required("offset", ValueType::Integer);
    assert_eq!(arguments(signature, "test -- -5"), vec![Value::Int(-5)]);
}

#[test]
fn test_lone_dash_is_an_argument() {
    let signature = Signature::new().required("path", ValueType::String);
    assert_eq!(arguments(signature, "test -"), vec![Value::from("-")]);
}

#[test]
fn test_choice_argument() {
    let signature = || Signature::new().required("mode", ValueType::choice(["first", "second"]));
    assert_eq!(arguments(signature(), "test second"), vec![Value::from("second")]);
    assert!(matches!(
        syntax_error(signature(), "test unknown"),
        SyntaxError::InvalidArgumentValue { expected, .. } if expected == "first|second"
    ));
}

#[test]
fn test_listof_argument() {
    let signature = || Signature::new().required("ids", ValueType::list_of(ValueType::Integer));
    assert_eq!(
        arguments(signature(), "test 0,1,2,3,4"),
        vec![Value::from(vec![0, 1, 2, 3, 4])]
    );
    assert!(matches!(
        syntax_error(signature(), "test a,b,c"),
        SyntaxError::InvalidArgumentValue { expected, .. } if expected == "listof(int)"
    ));
}

#[test]
fn test_custom_type() {
    let signature = || Signature::new().required("color", ValueType::custom(Hex));
    assert_eq!(arguments(signature(), "test 0xff"), vec![Value::Int(255)]);
    assert!(matches!(
        syntax_error(signature(), "test zz"),
        SyntaxError::InvalidArgumentValue { expected, .. } if expected == "hex"
    ));
}

#[test]
fn test_syntax_error_prints_command_help() {
    let app = app(Signature::new().required("a", ValueType::Integer));
    let (result, out) = invoke(&app, "test");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Required argument is not specified: 'a'");
    assert!(out.starts_with("Required argument is not specified: 'a'\n"));
    assert!(out.contains("SYNOPSIS\n    app test <a>"));
}
