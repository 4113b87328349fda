//! Command-line argument parsing
//!
//! The parser interprets the arguments of one command according to its
//! declared options and signature. Input has the shape
//! `[options] [arguments] [variadic...]`: all options precede all
//! positional arguments, and tokens after the first positional one are
//! never re-scanned for options.

pub mod cursor;
pub mod parsed;

pub use cursor::*;
pub use parsed::*;

use crate::error::{SyntaxError, SyntaxResult};
use crate::model::{CliOption, OptionSet, Signature, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// Parser for the arguments of a single command
///
/// The parser itself only borrows the model; the token cursor is created
/// fresh by every `parse` call.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    options: &'a OptionSet,
    signature: &'a Signature,
}

/// Outcome of reading one option token
enum ParsedOption {
    Known(String, Value),
    Unknown(String),
}

impl<'a> Parser<'a> {
    pub fn new(options: &'a OptionSet, signature: &'a Signature) -> Self {
        Parser { options, signature }
    }

    /// Parse command-line arguments into option and argument values
    ///
    /// Stops at the first error.
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> SyntaxResult<(ParsedOptions, ParsedArguments)> {
        let mut cursor = TokenCursor::new(argv);
        let options = self.parse_options(&mut cursor)?;
        let arguments = self.parse_arguments(&mut cursor)?;
        Ok((options, arguments))
    }

    fn parse_options(&self, cursor: &mut TokenCursor) -> SyntaxResult<ParsedOptions> {
        let mut specified = BTreeMap::new();
        let mut extra = Vec::new();

        while let Some(token) = cursor.next_option() {
            match self.parse_option(&token, cursor)? {
                ParsedOption::Known(name, value) => {
                    if specified.contains_key(&name) {
                        return Err(SyntaxError::DuplicateOption { name });
                    }
                    trace!(option = %name, value = %value, "parsed option");
                    specified.insert(name, value);
                }
                ParsedOption::Unknown(raw) => {
                    trace!(token = %raw, "collected unrecognized option");
                    extra.push(raw);
                }
            }
        }

        Ok(ParsedOptions::merge(self.options, specified, extra))
    }

    fn parse_option(&self, token: &str, cursor: &mut TokenCursor) -> SyntaxResult<ParsedOption> {
        // Only the long form splits on '='
        let (flag, inline) = match token.split_once('=') {
            Some((flag, value)) if token.starts_with("--") => (flag, Some(value)),
            _ => (token, None),
        };

        let option = match self.lookup(flag) {
            Some(option) => option,
            None if self.signature.accepts_arbitrary_options() => {
                return Ok(ParsedOption::Unknown(token.to_string()));
            }
            None => {
                return Err(SyntaxError::UnknownOption {
                    option: flag.to_string(),
                })
            }
        };

        let value = if option.is_flag() {
            match inline {
                None => Value::Bool(true),
                Some(raw) => coerce_option(option, raw)?,
            }
        } else {
            if let Some(raw) = inline {
                cursor.unread(raw);
            }
            let raw = cursor.pop().ok_or_else(|| SyntaxError::MissingOptionValue {
                name: option.name().to_string(),
            })?;
            coerce_option(option, &raw)?
        };

        Ok(ParsedOption::Known(option.name().to_string(), value))
    }

    fn lookup(&self, flag: &str) -> Option<&'a CliOption> {
        match flag.strip_prefix("--") {
            Some(long) => self.options.get(long),
            None => self.options.by_short(flag.strip_prefix('-').unwrap_or(flag)),
        }
    }

    fn parse_arguments(&self, cursor: &mut TokenCursor) -> SyntaxResult<ParsedArguments> {
        let mut arguments = ParsedArguments::default();

        for argument in self.signature.arguments() {
            let value = match cursor.pop() {
                Some(raw) => argument.coerce(&raw).map_err(|e| {
                    SyntaxError::InvalidArgumentValue {
                        name: argument.name().to_string(),
                        expected: e.expected,
                        value: raw.clone(),
                    }
                })?,
                None => match argument.default_value() {
                    Some(default) => default.clone(),
                    None => return Err(SyntaxError::ArgumentMissing(argument.clone())),
                },
            };
            trace!(argument = argument.name(), value = %value, "filled argument");
            arguments.push(argument.name(), value);
        }

        match self.signature.variadic_argument() {
            Some(rest) => {
                let values = cursor
                    .drain()
                    .into_iter()
                    .map(|raw| {
                        rest.coerce(&raw).map_err(|e| SyntaxError::InvalidArgumentValue {
                            name: rest.name().to_string(),
                            expected: e.expected,
                            value: raw.clone(),
                        })
                    })
                    .collect::<SyntaxResult<Vec<_>>>()?;
                arguments.push(rest.name(), Value::List(values));
            }
            None => {
                if let Some(unexpected) = cursor.pop() {
                    return Err(SyntaxError::TooManyArguments { unexpected });
                }
            }
        }

        Ok(arguments)
    }
}

fn coerce_option(option: &CliOption, raw: &str) -> SyntaxResult<Value> {
    option
        .value_type()
        .coerce(raw)
        .map_err(|e| SyntaxError::InvalidOptionValue {
            name: option.name().to_string(),
            expected: e.expected,
            value: raw.to_string(),
        })
}
