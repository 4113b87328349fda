//! Integration tests for command-line options

mod common;

use comandante::{CliOption, Handler, Signature, SyntaxError, Value, ValueType};
use common::{invoke, invoke_command, options_command, App};
use std::collections::BTreeMap;

fn app() -> App {
    let some = || CliOption::new("some", "s", ValueType::Integer, 0).unwrap();
    let flag = || CliOption::flag("flag", "f").unwrap();
    let test = options_command("test")
        .with_option(some())
        .unwrap()
        .with_option(flag())
        .unwrap();
    let lenient = options_command("lenient")
        .with_signature(Signature::new().accept_arbitrary_options())
        .with_option(flag())
        .unwrap();

    Handler::new("app")
        .with_settings(comandante::HelpSettings::plain(70))
        .with_command(test)
        .unwrap()
        .with_command(lenient)
        .unwrap()
}

fn specified(argv: &str) -> BTreeMap<String, Value> {
    let (result, _) = invoke(&app(), argv);
    result
        .unwrap()
        .unwrap()
        .specified()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn syntax_error(argv: &str) -> SyntaxError {
    let app = app();
    let command = app.command("test").unwrap();
    let (result, _) = invoke_command(&command, argv);
    result.unwrap_err().as_syntax().cloned().unwrap()
}

#[test]
fn test_empty_options() {
    assert!(specified("test").is_empty());
}

#[test]
fn test_option_value() {
    assert_eq!(specified("test --some 42"), BTreeMap::from([("some".to_string(), Value::Int(42))]));
}

#[test]
fn test_boolean_option() {
    assert_eq!(specified("test --flag"), BTreeMap::from([("flag".to_string(), Value::Bool(true))]));
}

#[test]
fn test_short_option_value() {
    assert_eq!(specified("test -s 42"), BTreeMap::from([("some".to_string(), Value::Int(42))]));
}

#[test]
fn test_mixed_syntax() {
    assert_eq!(
        specified("test -f --some 42"),
        BTreeMap::from([
            ("flag".to_string(), Value::Bool(true)),
            ("some".to_string(), Value::Int(42)),
        ])
    );
}

#[test]
fn test_inline_values() {
    assert_eq!(specified("test --some=42"), BTreeMap::from([("some".to_string(), Value::Int(42))]));
    assert_eq!(specified("test --flag=false"), BTreeMap::from([("flag".to_string(), Value::Bool(false))]));
}

#[test]
fn test_negative_option_value() {
    assert_eq!(specified("test --some -5"), BTreeMap::from([("some".to_string(), Value::Int(-5))]));
}

#[test]
fn test_merge_options_default_only() {
    let app = app();
    let (result, _) = invoke(&app, "test");
    let default = app.command("test").unwrap().command().default_options();
    assert_eq!(result.unwrap().unwrap(), default);
}

#[test]
fn test_merge_options_some_specified() {
    let (result, _) = invoke(&app(), "test --some 42");
    let options = result.unwrap().unwrap();
    assert_eq!(options.get("some"), Some(&Value::Int(42)));
    assert_eq!(options.get("flag"), Some(&Value::Bool(false)));
    assert!(options.is_specified("some"));
    assert!(!options.is_specified("flag"));
}

#[test]
fn test_unknown_are_not_specified() {
    let (result, _) = invoke(&app(), "test");
    let options = result.unwrap().unwrap();
    assert!(!options.is_specified("unknown"));
    assert_eq!(options.get("unknown"), None);
}

#[test]
fn test_default_options() {
    let app = app();
    let default = app.command("test").unwrap().command().default_options();
    assert_eq!(default.get("flag"), Some(&Value::Bool(false)));
    assert_eq!(default.get("some"), Some(&Value::Int(0)));
    assert!(default.specified().is_empty());
}

#[test]
fn test_unknown_long_option() {
    assert!(matches!(
        syntax_error("--unknown"),
        SyntaxError::UnknownOption { option } if option == "--unknown"
    ));
}

#[test]
fn test_unknown_short_option() {
    assert!(matches!(syntax_error("-u"), SyntaxError::UnknownOption { .. }));
}

#[test]
fn test_short_option_is_not_split_on_equals() {
    assert!(matches!(
        syntax_error("-s=5"),
        SyntaxError::UnknownOption { option } if option == "-s=5"
    ));
}

#[test]
fn test_invalid_option_value() {
    assert!(matches!(
        syntax_error("--some invalid-value"),
        SyntaxError::InvalidOptionValue { name, expected, .. } if name == "some" && expected == "int"
    ));
    assert!(matches!(syntax_error("--flag=maybe"), SyntaxError::InvalidOptionValue { .. }));
}

#[test]
fn test_missing_option_value() {
    assert!(matches!(
        syntax_error("--some"),
        SyntaxError::MissingOptionValue { name } if name == "some"
    ));
}

#[test]
fn test_duplicate_option() {
    assert!(matches!(
        syntax_error("-f --flag"),
        SyntaxError::DuplicateOption { name } if name == "flag"
    ));
}

#[test]
fn test_option_after_separator_is_an_argument() {
    assert!(matches!(
        syntax_error("-- --flag"),
        SyntaxError::TooManyArguments { unexpected } if unexpected == "--flag"
    ));
}

#[test]
fn test_error_output() {
    let app = app();
    let command = app.command("test").unwrap();
    let (result, out) = invoke_command(&command, "--unknown");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("--unknown"));
    assert!(out.starts_with(&format!("{}\n", err)));
}

#[test]
fn test_help_on_option_error() {
    let app = app();
    let command = app.command("test").unwrap();
    let (_, out) = invoke_command(&command, "--unknown");
    assert!(out.contains(&command.full_doc()));
}

#[test]
fn test_arbitrary_options_are_collected() {
    let (result, _) = invoke(&app(), "lenient --anything -x -f");
    let options = result.unwrap().unwrap();
    assert_eq!(options.extra(), ["--anything", "-x"]);
    assert_eq!(options.get("flag"), Some(&Value::Bool(true)));
}
