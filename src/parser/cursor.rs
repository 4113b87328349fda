//! Token cursor over the remaining command-line arguments

use std::collections::VecDeque;

/// Marker ending the options phase
const END_OF_OPTIONS: &str = "--";

/// Classification of the next token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Option,
    EndOfOptions,
    Positional,
    Exhausted,
}

/// Remaining tokens of one invocation
///
/// Supports pop-front and push-front, so a value split out of
/// `--name=value` can be put back and read like a separate token.
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    tokens: VecDeque<String>,
}

impl TokenCursor {
    pub fn new<S: AsRef<str>>(argv: &[S]) -> Self {
        TokenCursor {
            tokens: argv.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    pub fn unread(&mut self, token: impl Into<String>) {
        self.tokens.push_front(token.into());
    }

    pub fn peek(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Pop the next token if it is an option
    ///
    /// Returns `None` at the first positional token. `--` is consumed and
    /// also ends the options phase; a lone `-` counts as positional.
    pub fn next_option(&mut self) -> Option<String> {
        match self.classify() {
            Next::Option => self.pop(),
            Next::EndOfOptions => {
                self.pop();
                None
            }
            Next::Positional | Next::Exhausted => None,
        }
    }

    /// Take all remaining tokens
    pub fn drain(&mut self) -> Vec<String> {
        self.tokens.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn classify(&self) -> Next {
        match self.peek() {
            None => Next::Exhausted,
            Some(END_OF_OPTIONS) => Next::EndOfOptions,
            Some(token) if token.len() > 1 && token.starts_with('-') => Next::Option,
            Some(_) => Next::Positional,
        }
    }
}
