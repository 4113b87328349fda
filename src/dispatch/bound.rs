//! Commands bound to the handler that owns them

use crate::dispatch::{Console, Handler};
use crate::error::{CliError, Result};
use crate::help::HelpWriter;
use crate::model::{Action, Command, Invocation};
use std::io::{self, Write};
use tracing::debug;

/// A command paired with its owning handler
///
/// The command body runs with that handler as its receiver. A command
/// only knows its owning handler, so a direct invocation names it
/// `handler command` unless the enclosing path is given with
/// [`BoundCommand::within`].
pub struct BoundCommand<'a, T> {
    command: &'a Command<T>,
    handler: &'a Handler<T>,
    context: Vec<String>,
}

impl<'a, T> BoundCommand<'a, T> {
    pub fn new(command: &'a Command<T>, handler: &'a Handler<T>) -> Self {
        BoundCommand {
            command,
            handler,
            context: vec![handler.name().to_string()],
        }
    }

    /// Use `path` (root handler down to the owning handler) as the
    /// invocation path of direct invocations
    pub fn within<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn command(&self) -> &'a Command<T> {
        self.command
    }

    pub fn handler(&self) -> &'a Handler<T> {
        self.handler
    }

    pub fn name(&self) -> &'a str {
        self.command.name()
    }

    /// Documentation as printed on a syntax error of a direct invocation
    pub fn full_doc(&self) -> String {
        HelpWriter::new(self.handler.settings()).document(self.command, &self.full_name())
    }

    /// Invoke with raw command-line arguments, printing to stdout
    pub fn invoke<I, S>(&self, argv: I) -> Result<Option<T>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.invoke_with(&mut out, argv)
    }

    /// Invoke with raw command-line arguments, printing to `out`
    pub fn invoke_with<I, S>(&self, out: &mut dyn Write, argv: I) -> Result<Option<T>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let mut console = Console::new(out, self.handler.settings());
        let result = self.run(&mut console, &argv, self.full_name());
        console.flush()?;
        result
    }

    /// Parse `argv` and run the command body
    ///
    /// The body only runs once parsing fully succeeded. A syntax error is
    /// printed with the command's help and returned.
    pub(crate) fn run(
        &self,
        console: &mut Console<'_>,
        argv: &[String],
        full_name: Vec<String>,
    ) -> Result<Option<T>> {
        let (options, arguments) = match self.command.parser().parse(argv) {
            Ok(parsed) => parsed,
            Err(error) => {
                debug!(command = self.command.name(), %error, "syntax error");
                console.print_error(&error)?;
                console.print_help(self.command, &full_name)?;
                return Err(error.into());
            }
        };

        match &self.command.action {
            Action::Run(body) => {
                let invocation = Invocation::new(full_name, arguments, options);
                body(self.handler, &invocation)
                    .map(Some)
                    .map_err(CliError::Command)
            }
            Action::Help => {
                let names: Vec<String> = arguments
                    .values()
                    .flat_map(|v| v.as_list().unwrap_or_default())
                    .map(ToString::to_string)
                    .collect();
                let context = full_name[..full_name.len().saturating_sub(1)].to_vec();
                self.handler.show_help(console, context, &names)?;
                Ok(None)
            }
        }
    }

    /// Invocation path of a direct invocation
    pub fn full_name(&self) -> Vec<String> {
        let mut full_name = self.context.clone();
        full_name.push(self.command.name().to_string());
        full_name
    }
}
