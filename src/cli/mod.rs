//! Demonstration command-line application
//!
//! A calculator-style tool declared with the library: a global
//! `--verbose` flag, `greet`, `sum` and a `convert` handler whose
//! `--precision` option is inherited by its commands.

pub mod app;

// Re-export main types
pub use app::*;
