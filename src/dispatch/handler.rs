//! Handlers: named containers of commands, sub-handlers and inherited options

use crate::dispatch::{BoundCommand, Console};
use crate::error::{DeclarationError, DeclarationResult, Result, SyntaxError};
use crate::help::{Documentable, HelpSettings, HelpWriter};
use crate::model::{CliOption, Command, OptionSet};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// A child of a handler
pub enum Entry<T> {
    Command(Command<T>),
    Handler(Handler<T>),
}

impl<T> Entry<T> {
    pub fn name(&self) -> &str {
        match self {
            Entry::Command(command) => command.name(),
            Entry::Handler(handler) => handler.name(),
        }
    }

    pub fn as_command(&self) -> Option<&Command<T>> {
        match self {
            Entry::Command(command) => Some(command),
            Entry::Handler(_) => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler<T>> {
        match self {
            Entry::Handler(handler) => Some(handler),
            Entry::Command(_) => None,
        }
    }

    fn as_documentable(&self) -> &dyn Documentable {
        match self {
            Entry::Command(command) => command,
            Entry::Handler(handler) => handler,
        }
    }

    fn check_option(&self, option: &CliOption) -> DeclarationResult<()> {
        match self {
            Entry::Command(command) => command.check_option(option),
            Entry::Handler(handler) => handler.check_subtree(option),
        }
    }

    fn inherit_option(&mut self, option: &CliOption) -> DeclarationResult<()> {
        match self {
            Entry::Command(command) => command.declare_option(option.clone()),
            Entry::Handler(handler) => handler.inherit_option(option),
        }
    }
}

/// A named container of commands and nested handlers
///
/// Options declared on a handler are inherited by every command and
/// handler beneath it, including children added later. Every handler
/// carries a built-in `help` command.
pub struct Handler<T = ()> {
    name: String,
    brief: String,
    description: String,
    options: OptionSet,
    entries: BTreeMap<String, Entry<T>>,
    settings: Option<HelpSettings>,
}

impl<T> Handler<T> {
    pub fn new(name: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        let help = Command::help();
        entries.insert(help.name().to_string(), Entry::Command(help));
        Handler {
            name: name.into(),
            brief: String::new(),
            description: String::new(),
            options: OptionSet::new(),
            entries,
            settings: None,
        }
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Help layout used when this handler is invoked
    pub fn with_settings(mut self, settings: HelpSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Builder form of [`Handler::declare_option`]
    pub fn with_option(mut self, option: CliOption) -> DeclarationResult<Self> {
        self.declare_option(option)?;
        Ok(self)
    }

    /// Builder form of [`Handler::declare_command`]
    pub fn with_command(mut self, command: Command<T>) -> DeclarationResult<Self> {
        self.declare_command(command)?;
        Ok(self)
    }

    /// Builder form of [`Handler::declare_handler`]
    pub fn with_handler(mut self, handler: Handler<T>) -> DeclarationResult<Self> {
        self.declare_handler(handler)?;
        Ok(self)
    }

    /// Declare an option on this handler and everything beneath it
    ///
    /// The whole subtree is checked before anything is changed, so a
    /// conflict anywhere leaves the tree untouched.
    pub fn declare_option(&mut self, option: CliOption) -> DeclarationResult<()> {
        self.check_subtree(&option)?;
        debug!(handler = %self.name, option = option.name(), "declaring option");
        self.inherit_option(&option)
    }

    /// Add a command; it inherits every option of this handler
    pub fn declare_command(&mut self, command: Command<T>) -> DeclarationResult<()> {
        self.declare_entry(Entry::Command(command))
    }

    /// Add a nested handler; it and its children inherit every option of
    /// this handler
    pub fn declare_handler(&mut self, handler: Handler<T>) -> DeclarationResult<()> {
        self.declare_entry(Entry::Handler(handler))
    }

    fn declare_entry(&mut self, mut entry: Entry<T>) -> DeclarationResult<()> {
        if self.entries.contains_key(entry.name()) {
            return Err(DeclarationError::DuplicateCommand {
                name: entry.name().to_string(),
                scope: self.name.clone(),
            });
        }
        for option in &self.options {
            entry.check_option(option)?;
        }
        for option in &self.options {
            entry.inherit_option(option)?;
        }
        debug!(handler = %self.name, entry = entry.name(), "declaring entry");
        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    fn check_subtree(&self, option: &CliOption) -> DeclarationResult<()> {
        self.options.check(option, &self.name)?;
        self.entries
            .values()
            .try_for_each(|entry| entry.check_option(option))
    }

    fn inherit_option(&mut self, option: &CliOption) -> DeclarationResult<()> {
        self.options.declare(option.clone(), &self.name)?;
        self.entries
            .values_mut()
            .try_for_each(|entry| entry.inherit_option(option))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brief(&self) -> &str {
        &self.brief
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Own and inherited options
    pub fn declared_options(&self) -> &OptionSet {
        &self.options
    }

    /// Children sorted by name
    pub fn entries(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.values()
    }

    pub fn entry(&self, name: &str) -> Option<&Entry<T>> {
        self.entries.get(name)
    }

    /// A command of this handler, bound to it
    pub fn command(&self, name: &str) -> Option<BoundCommand<'_, T>> {
        self.entries
            .get(name)
            .and_then(Entry::as_command)
            .map(|command| BoundCommand::new(command, self))
    }

    pub fn handler(&self, name: &str) -> Option<&Handler<T>> {
        self.entries.get(name).and_then(Entry::as_handler)
    }

    /// Mutable access to a command, e.g. to declare a local option later
    pub fn command_mut(&mut self, name: &str) -> Option<&mut Command<T>> {
        match self.entries.get_mut(name) {
            Some(Entry::Command(command)) => Some(command),
            _ => None,
        }
    }

    /// Mutable access to a nested handler
    pub fn handler_mut(&mut self, name: &str) -> Option<&mut Handler<T>> {
        match self.entries.get_mut(name) {
            Some(Entry::Handler(handler)) => Some(handler),
            _ => None,
        }
    }

    pub fn settings(&self) -> HelpSettings {
        self.settings.clone().unwrap_or_default()
    }

    /// Composer using this handler's help settings
    pub fn help_writer(&self) -> HelpWriter {
        HelpWriter::new(self.settings())
    }

    /// Documentation as printed by `help` on this handler
    pub fn full_doc(&self) -> String {
        self.help_writer().document(self, &[self.name.clone()])
    }

    /// Dispatch raw command-line arguments, printing to stdout
    ///
    /// Returns the command's result, or `None` when help was printed
    /// instead of running a command.
    pub fn invoke<I, S>(&self, argv: I) -> Result<Option<T>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.invoke_with(&mut out, argv)
    }

    /// Dispatch raw command-line arguments, printing to `out`
    pub fn invoke_with<I, S>(&self, out: &mut dyn Write, argv: I) -> Result<Option<T>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let mut console = Console::new(out, self.settings());
        let result = self.dispatch(&mut console, &argv, vec![self.name.clone()]);
        console.flush()?;
        result
    }

    fn dispatch(&self, console: &mut Console<'_>, argv: &[String], mut full_name: Vec<String>) -> Result<Option<T>> {
        let Some((name, rest)) = argv.split_first() else {
            debug!(handler = %self.name, "no command given, printing help");
            console.print_help(self, &full_name)?;
            return Ok(None);
        };

        match self.entries.get(name) {
            Some(Entry::Handler(handler)) => {
                debug!(handler = %self.name, entry = %name, "entering handler");
                full_name.push(name.clone());
                handler.dispatch(console, rest, full_name)
            }
            Some(Entry::Command(command)) => {
                debug!(handler = %self.name, entry = %name, "running command");
                full_name.push(name.clone());
                BoundCommand::new(command, self).run(console, rest, full_name)
            }
            None => {
                let error = SyntaxError::UnknownCommand {
                    name: name.clone(),
                    context: full_name.iter().skip(1).cloned().collect(),
                };
                debug!(%error, "dispatch failed");
                console.print_error(&error)?;
                console.print_help(self, &full_name)?;
                Err(error.into())
            }
        }
    }

    /// Print the help of the element reached by walking `names` down from
    /// this handler
    ///
    /// An unknown name prints a notice and the help of the deepest element
    /// reached so far.
    pub(crate) fn show_help(&self, console: &mut Console<'_>, mut full_name: Vec<String>, names: &[String]) -> io::Result<()> {
        let mut element: &dyn Documentable = self;
        for name in names {
            match element.find_command(name) {
                Some(child) => {
                    full_name.push(name.clone());
                    element = child;
                }
                None => {
                    console.print_line(&format!("Unknown command: {}", names.join(" ")))?;
                    break;
                }
            }
        }
        console.print_help(element, &full_name)
    }
}

impl<T> Documentable for Handler<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn brief(&self) -> &str {
        &self.brief
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn declared_options(&self) -> &OptionSet {
        &self.options
    }

    fn declared_commands(&self) -> Vec<&dyn Documentable> {
        self.entries.values().map(Entry::as_documentable).collect()
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("options", &self.options.names())
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
