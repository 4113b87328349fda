//! Error types for Comandante

use crate::model::Argument;
use std::io;
use thiserror::Error;

/// Result type alias for invocations
pub type Result<T> = std::result::Result<T, CliError>;

/// Main error type returned by `invoke`
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong command-line syntax (already reported to the output sink)
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Failure raised by a command body
    #[error(transparent)]
    Command(#[from] anyhow::Error),

    /// I/O errors while writing help or error messages
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Check if the error is a command-line syntax error
    pub fn is_syntax(&self) -> bool {
        matches!(self, CliError::Syntax(_))
    }

    /// Get the syntax error, if that is what this is
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            CliError::Syntax(e) => Some(e),
            _ => None,
        }
    }

    /// Process exit code conventionally associated with the error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Syntax(_) => 2,
            _ => 1,
        }
    }
}

/// Wrong command-line syntax
///
/// These are user-input errors: recoverable, reported once at the dispatch
/// boundary together with the relevant help.
#[derive(Error, Debug, Clone)]
pub enum SyntaxError {
    #[error("Required argument is not specified: '{}'", .0.name())]
    ArgumentMissing(Argument),

    #[error("Too many arguments: unexpected '{unexpected}'")]
    TooManyArguments { unexpected: String },

    #[error("Invalid value for argument '{name}' of type '{expected}': '{value}'")]
    InvalidArgumentValue {
        name: String,
        expected: String,
        value: String,
    },

    #[error("Invalid value for option '--{name}' of type '{expected}': '{value}'")]
    InvalidOptionValue {
        name: String,
        expected: String,
        value: String,
    },

    #[error("Option '--{name}' is missing argument value")]
    MissingOptionValue { name: String },

    #[error("Unknown option: '{option}'")]
    UnknownOption { option: String },

    #[error("Duplicated option: '--{name}'")]
    DuplicateOption { name: String },

    #[error("Unknown command: '{}'", display_path(.context, .name))]
    UnknownCommand { name: String, context: Vec<String> },
}

fn display_path(context: &[String], name: &str) -> String {
    context
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Errors in the declared command-line model
///
/// Programming errors: raised while building handlers and commands,
/// never produced by parsing user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("Not a valid option name: '{0}'")]
    InvalidOptionName(String),

    #[error("Not a valid option short name: '{0}'")]
    InvalidShortName(String),

    #[error("Duplicate option '--{name}' for '{scope}'")]
    DuplicateOption { name: String, scope: String },

    #[error("Duplicate option '-{short}' for '{scope}'")]
    DuplicateShortOption { short: String, scope: String },

    #[error("Duplicate command name '{name}' for '{scope}'")]
    DuplicateCommand { name: String, scope: String },
}

/// A raw string that could not be coerced to the requested type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {expected} value: '{value}'")]
pub struct InvalidValue {
    pub expected: String,
    pub value: String,
}

impl InvalidValue {
    pub fn new(expected: impl Into<String>, value: impl Into<String>) -> Self {
        InvalidValue {
            expected: expected.into(),
            value: value.into(),
        }
    }
}

/// Specialized result type for parsing
pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;

/// Specialized result type for declarations
pub type DeclarationResult<T> = std::result::Result<T, DeclarationError>;

/// Specialized result type for value coercion
pub type CoercionResult<T> = std::result::Result<T, InvalidValue>;
