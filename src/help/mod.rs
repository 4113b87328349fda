//! Help generation
//!
//! Handlers and commands expose a [`Documentable`] surface; the
//! [`HelpWriter`] turns it into NAME / SYNOPSIS / COMMANDS / DESCRIPTION /
//! OPTIONS sections laid out for the terminal width.

pub mod documentable;
pub mod terminal;
pub mod writer;

// Re-export main types
pub use documentable::*;
pub use terminal::*;
pub use writer::*;
