//! Comandante - Declarative hierarchical command-line interfaces
//!
//! Applications declare a tree of handlers and commands. Each command has a
//! typed signature and its own options; options declared on a handler are
//! inherited by everything beneath it. Raw arguments are dispatched down the
//! tree, parsed, coerced and handed to the command body, with contextual help
//! printed on syntax errors.

// Public modules
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use dispatch::{BoundCommand, Entry, Handler};
pub use error::{CliError, DeclarationError, DeclarationResult, InvalidValue, Result, SyntaxError};
pub use help::{HelpSettings, HelpWriter};
pub use model::{Argument, CliOption, Coercion, Command, Invocation, Signature, Value, ValueType};
pub use parser::{ParsedArguments, ParsedOptions};

/// Current version of Comandante
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
