//! Terminal viewport detection

use terminal_size::{terminal_size, Width};

/// Properties of the terminal help is printed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub width: usize,
}

impl TerminalInfo {
    pub const MAX_WIDTH: usize = 70;
    pub const MIN_WIDTH: usize = 30;

    pub fn new(width: usize) -> Self {
        TerminalInfo { width }
    }

    /// Detect the width of the attached terminal
    ///
    /// Clamped to `MIN_WIDTH..=MAX_WIDTH`; `MAX_WIDTH` without a terminal.
    pub fn detect() -> Self {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w).clamp(Self::MIN_WIDTH, Self::MAX_WIDTH))
            .unwrap_or(Self::MAX_WIDTH);
        TerminalInfo { width }
    }
}

impl Default for TerminalInfo {
    fn default() -> Self {
        Self::detect()
    }
}
