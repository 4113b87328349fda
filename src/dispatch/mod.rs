//! Command tree and dispatch
//!
//! A [`Handler`] routes the first raw argument to a command or a nested
//! handler, parses the rest against the command's options and signature,
//! and runs the command body. Syntax errors are reported with the help of
//! the element they occurred in.

pub mod bound;
pub mod console;
pub mod handler;

// Re-export main types
pub use bound::*;
pub use console::*;
pub use handler::*;
