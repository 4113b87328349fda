//! Command-line domain model
//!
//! Declarations of commands, options, arguments and value types. These are
//! built once while handlers are constructed and read by the parser and
//! the dispatcher afterwards.

pub mod command;
pub mod option;
pub mod signature;
pub mod value;

// Re-export main types
pub use command::*;
pub use option::*;
pub use signature::*;
pub use value::*;
