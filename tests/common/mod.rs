//! Common test utilities

use comandante::{BoundCommand, CliOption, Command, Handler, HelpSettings, ParsedOptions, Result, ValueType};

/// Applications whose commands return the options they received
pub type App = Handler<ParsedOptions>;

/// A command returning its parsed options
pub fn options_command(name: &str) -> Command<ParsedOptions> {
    Command::new(name, |_, invocation| Ok(invocation.options().clone()))
}

/// Sample application
///
/// `app` has a global `-g` flag, a `command` with a local `-l` integer and a
/// `subcommand` handler with its own `command`.
pub fn sample_app() -> App {
    let subcommand = Handler::new("subcommand")
        .with_brief("Nested commands")
        .with_command(options_command("command").with_brief("Nested command"))
        .unwrap();
    let command = options_command("command")
        .with_brief("Command with a local option")
        .with_option(CliOption::new("local", "l", ValueType::Integer, 0).unwrap())
        .unwrap();

    Handler::new("app")
        .with_brief("Sample application")
        .with_settings(HelpSettings::plain(70))
        .with_option(CliOption::flag("global", "g").unwrap())
        .unwrap()
        .with_command(command)
        .unwrap()
        .with_handler(subcommand)
        .unwrap()
}

/// Invoke with whitespace-separated arguments, capturing the output
pub fn invoke<T>(handler: &Handler<T>, argv: &str) -> (Result<Option<T>>, String) {
    let mut out = Vec::new();
    let result = handler.invoke_with(&mut out, argv.split_whitespace());
    (result, String::from_utf8(out).unwrap())
}

/// Invoke a command directly, capturing the output
pub fn invoke_command<T>(command: &BoundCommand<'_, T>, argv: &str) -> (Result<Option<T>>, String) {
    let mut out = Vec::new();
    let result = command.invoke_with(&mut out, argv.split_whitespace());
    (result, String::from_utf8(out).unwrap())
}
