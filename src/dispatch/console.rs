//! Output sink of one invocation
//!
//! Error messages and contextual help are user-facing output, written to
//! the invocation's writer (stdout unless the caller supplies another).

use crate::help::{Documentable, HelpSettings, HelpWriter};
use std::fmt::Display;
use std::io::{self, Write};

pub struct Console<'w> {
    out: &'w mut dyn Write,
    writer: HelpWriter,
}

impl<'w> Console<'w> {
    pub fn new(out: &'w mut dyn Write, settings: HelpSettings) -> Self {
        Console {
            out,
            writer: HelpWriter::new(settings),
        }
    }

    /// Print a single line
    pub fn print_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Print an error message
    pub fn print_error(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{}", error)
    }

    /// Print the documentation of a handler or command
    pub fn print_help(&mut self, element: &dyn Documentable, full_name: &[String]) -> io::Result<()> {
        let doc = self.writer.document(element, full_name);
        writeln!(self.out, "{}", doc)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
