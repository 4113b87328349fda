//! Demonstration application

use crate::dispatch::Handler;
use crate::error::{CliError, DeclarationResult};
use crate::model::{CliOption, Command, Invocation, Signature, Value, ValueType};
use anyhow::{bail, Context as _};
use tracing_subscriber::EnvFilter;

const FEET_PER_METER: f64 = 3.280_839_895;

/// Upper bound of `greet --times`
const MAX_REPETITIONS: i64 = 100;

/// Build the demonstration command tree
///
/// Every command returns the text to print.
pub fn build_app() -> DeclarationResult<Handler<String>> {
    let convert = Handler::new("convert")
        .with_brief("Unit conversions")
        .with_description("Conversions between common units. Results are rounded to --precision digits.")
        .with_option(
            CliOption::new("precision", "p", ValueType::Integer, 2)?
                .with_description("Digits after the decimal point"),
        )?
        .with_command(temp_command()?)?
        .with_command(length_command()?)?;

    Handler::new("comandante")
        .with_brief("Hierarchical command-line demo")
        .with_description(
            "A small application declared with the comandante library.\n\n\
             Use 'help <command>' for the documentation of a command.",
        )
        .with_option(CliOption::flag("verbose", "v")?.with_description("Explain what is computed"))?
        .with_command(greet_command()?)?
        .with_command(sum_command())?
        .with_handler(convert)
}

fn greet_command() -> DeclarationResult<Command<String>> {
    Command::new("greet", greet)
        .with_brief("Greet someone")
        .with_signature(
            Signature::new()
                .required("name", ValueType::String)
                .optional("greeting", ValueType::String, "Hello"),
        )
        .with_option(CliOption::flag("shout", "s")?.with_description("Print in upper case"))?
        .with_option(
            CliOption::new("times", "n", ValueType::Integer, 1)?
                .with_description("Number of repetitions"),
        )
}

fn sum_command() -> Command<String> {
    Command::new("sum", sum)
        .with_brief("Add numbers")
        .with_description("Prints the sum of all given numbers; 0 when none are given.")
        .with_signature(Signature::new().variadic("numbers", ValueType::Float))
}

fn temp_command() -> DeclarationResult<Command<String>> {
    Command::new("temp", temp)
        .with_brief("Convert a temperature")
        .with_signature(Signature::new().required("value", ValueType::Float))
        .with_option(
            CliOption::new("to", "t", ValueType::choice(["c", "f"]), "c")?
                .with_description("Target scale: c converts from Fahrenheit, f from Celsius"),
        )
}

fn length_command() -> DeclarationResult<Command<String>> {
    Command::new("length", length)
        .with_brief("Convert a length")
        .with_signature(Signature::new().required("value", ValueType::Float))
        .with_option(
            CliOption::new("to", "t", ValueType::choice(["m", "ft"]), "m")?
                .with_description("Target unit: m converts from feet, ft from meters"),
        )
}

fn greet(_: &Handler<String>, invocation: &Invocation) -> anyhow::Result<String> {
    let name = string_argument(invocation, "name")?;
    let greeting = string_argument(invocation, "greeting")?;
    let times = int_option(invocation, "times")?;
    if !(0..=MAX_REPETITIONS).contains(&times) {
        bail!("--times must be between 0 and {}, got {}", MAX_REPETITIONS, times);
    }

    let mut line = format!("{}, {}!", greeting, name);
    if flag(invocation, "shout") {
        line = line.to_uppercase();
    }

    let mut lines = Vec::new();
    if flag(invocation, "verbose") {
        lines.push(format!("greeting {} {} time(s)", name, times));
    }
    lines.extend(std::iter::repeat(line).take(times as usize));
    Ok(lines.join("\n"))
}

fn sum(_: &Handler<String>, invocation: &Invocation) -> anyhow::Result<String> {
    let numbers: Vec<f64> = invocation
        .argument("numbers")
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_float)
        .collect();
    let total = numbers.iter().fold(0.0, |acc, x| acc + x);

    if flag(invocation, "verbose") {
        let terms: Vec<String> = numbers.iter().map(f64::to_string).collect();
        return Ok(format!("{} = {}", terms.join(" + "), total));
    }
    Ok(total.to_string())
}

fn temp(_: &Handler<String>, invocation: &Invocation) -> anyhow::Result<String> {
    let value = float_argument(invocation, "value")?;
    let (result, unit) = match invocation.option("to").and_then(Value::as_str) {
        Some("f") => (value * 9.0 / 5.0 + 32.0, "F"),
        _ => ((value - 32.0) * 5.0 / 9.0, "C"),
    };
    conversion(invocation, value, result, unit)
}

fn length(_: &Handler<String>, invocation: &Invocation) -> anyhow::Result<String> {
    let value = float_argument(invocation, "value")?;
    let (result, unit) = match invocation.option("to").and_then(Value::as_str) {
        Some("ft") => (value * FEET_PER_METER, "ft"),
        _ => (value / FEET_PER_METER, "m"),
    };
    conversion(invocation, value, result, unit)
}

/// Format a converted value with the inherited precision
fn conversion(invocation: &Invocation, input: f64, result: f64, unit: &str) -> anyhow::Result<String> {
    let precision = int_option(invocation, "precision")?;
    let precision = usize::try_from(precision)
        .with_context(|| format!("--precision must not be negative, got {}", precision))?;

    let formatted = format!("{:.*} {}", precision, result, unit);
    if flag(invocation, "verbose") {
        return Ok(format!("{} -> {}", input, formatted));
    }
    Ok(formatted)
}

fn string_argument<'a>(invocation: &'a Invocation, name: &str) -> anyhow::Result<&'a str> {
    invocation
        .argument(name)
        .and_then(Value::as_str)
        .with_context(|| format!("argument '{}' is not a string", name))
}

fn float_argument(invocation: &Invocation, name: &str) -> anyhow::Result<f64> {
    invocation
        .argument(name)
        .and_then(Value::as_float)
        .with_context(|| format!("argument '{}' is not a number", name))
}

fn int_option(invocation: &Invocation, name: &str) -> anyhow::Result<i64> {
    invocation
        .option(name)
        .and_then(Value::as_int)
        .with_context(|| format!("option '--{}' is not an integer", name))
}

fn flag(invocation: &Invocation, name: &str) -> bool {
    invocation.option(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Already installed when embedded in another process
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Run the demonstration application with the process arguments
pub fn run() -> Result<(), CliError> {
    init_tracing();

    let app = build_app().context("invalid command declarations")?;
    if let Some(output) = app.invoke(std::env::args().skip(1))? {
        if !output.is_empty() {
            println!("{}", output);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::HelpSettings;

    fn invoke(argv: &[&str]) -> (Result<Option<String>, CliError>, String) {
        let app = build_app().unwrap().with_settings(HelpSettings::plain(70));
        let mut out = Vec::new();
        let result = app.invoke_with(&mut out, argv.iter().copied());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_greet_defaults() {
        let (result, _) = invoke(&["greet", "Ada"]);
        assert_eq!(result.unwrap(), Some("Hello, Ada!".to_string()));
    }

    #[test]
    fn test_greet_options() {
        let (result, _) = invoke(&["greet", "-s", "--times", "2", "Ada", "Hi"]);
        assert_eq!(result.unwrap(), Some("HI, ADA!\nHI, ADA!".to_string()));
    }

    #[test]
    fn test_greet_negative_times_fails_in_body() {
        let (result, out) = invoke(&["greet", "-n", "-1", "Ada"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Command(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_greet_rejects_excessive_times() {
        let (result, out) = invoke(&["greet", "-n", "10000000000", "Ada"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Command(_)));
        assert!(err.to_string().contains("between 0 and 100"));
        assert!(out.is_empty());
        let (result, _) = invoke(&["greet", "-n", "100", "Ada"]);
        assert_eq!(result.unwrap().unwrap().lines().count(), 100);
    }

    #[test]
    fn test_sum_variadic() {
        let (result, _) = invoke(&["sum", "1", "2.5", "3"]);
        assert_eq!(result.unwrap(), Some("6.5".to_string()));
        let (result, _) = invoke(&["sum"]);
        assert_eq!(result.unwrap(), Some("0".to_string()));
    }

    #[test]
    fn test_sum_verbose_uses_global_option() {
        let (result, _) = invoke(&["sum", "-v", "1", "2"]);
        assert_eq!(result.unwrap(), Some("1 + 2 = 3".to_string()));
    }

    #[test]
    fn test_convert_inherits_precision() {
        let (result, _) = invoke(&["convert", "temp", "212"]);
        assert_eq!(result.unwrap(), Some("100.00 C".to_string()));
        let (result, _) = invoke(&["convert", "temp", "-p", "0", "--to", "f", "100"]);
        assert_eq!(result.unwrap(), Some("212 F".to_string()));
        let (result, _) = invoke(&["convert", "length", "-t", "ft", "-p", "1", "10"]);
        assert_eq!(result.unwrap(), Some("32.8 ft".to_string()));
    }

    #[test]
    fn test_convert_rejects_unknown_unit() {
        let (result, out) = invoke(&["convert", "temp", "--to", "k", "1"]);
        assert!(matches!(
            result.unwrap_err().as_syntax(),
            Some(crate::error::SyntaxError::InvalidOptionValue { .. })
        ));
        assert!(out.starts_with("Invalid value for option '--to' of type 'c|f': 'k'\n"));
        assert!(out.contains("comandante convert temp [OPTIONS] <value>"));
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let (result, out) = invoke(&[]);
        assert_eq!(result.unwrap(), None);
        assert!(out.contains("COMMANDS"));
        assert!(out.contains("convert"));
        assert!(out.contains("greet"));
    }
}
