//! Commands: invocable leaves of the handler tree

use crate::dispatch::Handler;
use crate::error::DeclarationResult;
use crate::help::Documentable;
use crate::model::{CliOption, OptionSet, Signature, Value, ValueType};
use crate::parser::{ParsedArguments, ParsedOptions, Parser};
use std::fmt;
use std::sync::Arc;

/// Body of a command
///
/// Receives the handler that owns the command and the parsed invocation.
pub type CommandFn<T> = dyn Fn(&Handler<T>, &Invocation) -> anyhow::Result<T> + Send + Sync;

/// What runs when a command is dispatched
pub(crate) enum Action<T> {
    Run(Arc<CommandFn<T>>),
    /// Built-in help pseudo-command of every handler
    Help,
}

/// A single invocable command with a typed signature and its own options
///
/// The option set holds both options declared on the command and copies
/// of the options inherited from enclosing handlers.
pub struct Command<T = ()> {
    name: String,
    brief: String,
    description: String,
    signature: Signature,
    options: OptionSet,
    pub(crate) action: Action<T>,
}

impl<T> Command<T> {
    /// Create a command running `body`
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Handler<T>, &Invocation) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self::with_action(name.into(), Action::Run(Arc::new(body)))
    }

    pub(crate) fn help() -> Self {
        Self::with_action("help".to_string(), Action::Help)
            .with_signature(Signature::new().variadic("command", ValueType::String))
            .with_brief("Display help information")
            .with_description(
                "With no command given, the synopsis and a list of commands are printed. \
                 Otherwise the help of the named (sub)command is printed.",
            )
    }

    fn with_action(name: String, action: Action<T>) -> Self {
        Command {
            name,
            brief: String::new(),
            description: String::new(),
            signature: Signature::new(),
            options: OptionSet::new(),
            action,
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

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    /// Builder form of [`Command::declare_option`]
    pub fn with_option(mut self, option: CliOption) -> DeclarationResult<Self> {
        self.declare_option(option)?;
        Ok(self)
    }

    /// Declare an option local to this command
    pub fn declare_option(&mut self, option: CliOption) -> DeclarationResult<()> {
        let scope = self.name.clone();
        self.options.declare(option, &scope)
    }

    pub(crate) fn check_option(&self, option: &CliOption) -> DeclarationResult<()> {
        self.options.check(option, &self.name)
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

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Effective options: own and inherited
    pub fn declared_options(&self) -> &OptionSet {
        &self.options
    }

    /// Option values the command receives when no option is given
    pub fn default_options(&self) -> ParsedOptions {
        ParsedOptions::defaults(&self.options)
    }

    /// A parser over this command's options and signature
    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.options, &self.signature)
    }

    pub fn is_help(&self) -> bool {
        matches!(self.action, Action::Help)
    }
}

impl<T> Documentable for Command<T> {
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
        Vec::new()
    }

    fn signature(&self) -> Option<&Signature> {
        Some(&self.signature)
    }
}

impl<T> fmt::Debug for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("options", &self.options.names())
            .finish()
    }
}

/// Parsed input of one command invocation
#[derive(Debug, Clone)]
pub struct Invocation {
    path: Vec<String>,
    arguments: ParsedArguments,
    options: ParsedOptions,
}

impl Invocation {
    pub fn new(path: Vec<String>, arguments: ParsedArguments, options: ParsedOptions) -> Self {
        Invocation {
            path,
            arguments,
            options,
        }
    }

    /// Command names from the root handler down to the invoked command
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn arguments(&self) -> &ParsedArguments {
        &self.arguments
    }

    pub fn options(&self) -> &ParsedOptions {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}
