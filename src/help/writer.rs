//! Help text composition for handlers and commands

use crate::help::{Documentable, TerminalInfo};
use crate::model::{Argument, CliOption, Signature};
use colored::Colorize;

/// Layout settings of help output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSettings {
    /// Maximum line width
    pub width: usize,
    /// Spaces per indentation level
    pub indent: usize,
    /// Bold section headings
    pub styled: bool,
}

impl HelpSettings {
    pub fn from_terminal(terminal: TerminalInfo) -> Self {
        HelpSettings {
            width: terminal.width,
            indent: 4,
            styled: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Unstyled output of a fixed width
    pub fn plain(width: usize) -> Self {
        HelpSettings {
            width,
            indent: 4,
            styled: false,
        }
    }
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self::from_terminal(TerminalInfo::detect())
    }
}

/// Text with its own first-line and continuation indents
struct Paragraph {
    text: String,
    initial_indent: String,
    subsequent_indent: String,
}

impl Paragraph {
    fn new(text: impl Into<String>, indent: &str) -> Self {
        Self::hanging(text, indent, indent)
    }

    fn hanging(text: impl Into<String>, initial: &str, subsequent: &str) -> Self {
        Paragraph {
            text: text.into(),
            initial_indent: initial.to_string(),
            subsequent_indent: subsequent.to_string(),
        }
    }
}

/// Documentation composer
#[derive(Debug, Clone, Default)]
pub struct HelpWriter {
    settings: HelpSettings,
}

impl HelpWriter {
    pub fn new(settings: HelpSettings) -> Self {
        HelpWriter { settings }
    }

    pub fn settings(&self) -> &HelpSettings {
        &self.settings
    }

    /// Full documentation of a handler or command
    ///
    /// `full_name` is the invocation path used in the NAME and SYNOPSIS
    /// sections; the element's own name is used when it is empty.
    pub fn document(&self, element: &dyn Documentable, full_name: &[String]) -> String {
        let name = if full_name.is_empty() {
            element.name().to_string()
        } else {
            full_name.join(" ")
        };

        let sections = [
            self.name_section(element, &name),
            match element.signature() {
                Some(signature) => Some(self.synopsis_section(element, signature, &name)),
                None => self.commands_section(element),
            },
            self.description_section(element),
            self.options_section(element),
        ];

        sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n")
    }

    fn name_section(&self, element: &dyn Documentable, name: &str) -> Option<String> {
        if element.brief().is_empty() {
            return None;
        }
        let text = format!("{} - {}", name, element.brief());
        Some(self.section("name", vec![Paragraph::new(text, &self.indent(1))], "\n"))
    }

    fn synopsis_section(&self, element: &dyn Documentable, signature: &Signature, name: &str) -> String {
        let mut synopsis = vec![name.to_string()];
        if !element.declared_options().is_empty() {
            synopsis.push("[OPTIONS]".to_string());
        }
        synopsis.extend(signature.arguments().map(argument_pattern));
        if let Some(rest) = signature.variadic_argument() {
            synopsis.push(format!("[{} ... ]", rest.name()));
        }
        let text = synopsis.join(" ");
        self.section("synopsis", vec![Paragraph::new(text, &self.indent(1))], "\n")
    }

    fn commands_section(&self, element: &dyn Documentable) -> Option<String> {
        let commands = element.declared_commands();
        let column = commands.iter().map(|c| c.name().len()).max()?;

        let indent = self.indent(1);
        let gap = " ".repeat(self.settings.indent);
        let paragraphs = commands
            .iter()
            .map(|command| {
                let entry = format!("{}{:<width$}{}", indent, command.name(), gap, width = column);
                let subsequent = " ".repeat(entry.len());
                Paragraph::hanging(command.brief(), &entry, &subsequent)
            })
            .collect();
        Some(self.section("commands", paragraphs, "\n"))
    }

    fn description_section(&self, element: &dyn Documentable) -> Option<String> {
        let indent = self.indent(1);
        let paragraphs: Vec<Paragraph> = paragraphs(element.description())
            .into_iter()
            .map(|text| Paragraph::new(text, &indent))
            .collect();
        if paragraphs.is_empty() {
            return None;
        }
        Some(self.section("description", paragraphs, "\n\n"))
    }

    fn options_section(&self, element: &dyn Documentable) -> Option<String> {
        let options = element.declared_options();
        if options.is_empty() {
            return None;
        }
        let paragraphs = options.iter().map(|o| self.summarize_option(o)).collect();
        Some(self.section("options", paragraphs, "\n\n"))
    }

    fn summarize_option(&self, option: &CliOption) -> Paragraph {
        let mut lines = vec![option_pattern(option)];
        lines.extend(paragraphs(option.description()));
        if !option.is_flag() {
            lines.push(format!("(default: {})", option.default_value()));
        }
        Paragraph::hanging(lines.join("\n"), &self.indent(1), &self.indent(2))
    }

    fn section(&self, heading: &str, paragraphs: Vec<Paragraph>, delimiter: &str) -> String {
        let heading = heading.to_uppercase();
        let heading = if self.settings.styled {
            heading.bold().to_string()
        } else {
            heading
        };
        let body: Vec<String> = paragraphs.iter().map(|p| self.wrap(p)).collect();
        format!("{}\n{}", heading, body.join(delimiter))
    }

    /// Wrap each line of a paragraph; only the first uses the initial indent
    fn wrap(&self, paragraph: &Paragraph) -> String {
        let mut lines = Vec::new();
        for (i, line) in paragraph.text.split('\n').enumerate() {
            let first = if i == 0 {
                &paragraph.initial_indent
            } else {
                &paragraph.subsequent_indent
            };
            if line.trim().is_empty() {
                lines.push(first.trim_end().to_string());
                continue;
            }
            let options = textwrap::Options::new(self.settings.width)
                .initial_indent(first)
                .subsequent_indent(&paragraph.subsequent_indent);
            lines.extend(textwrap::wrap(line, options).into_iter().map(|l| l.into_owned()));
        }
        lines.join("\n")
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.settings.indent * level)
    }
}

/// Blank-line separated paragraphs, each collapsed to a single line
fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

fn argument_pattern(argument: &Argument) -> String {
    if argument.is_required() {
        format!("<{}>", argument.name())
    } else {
        format!("[{}]", argument.name())
    }
}

fn option_pattern(option: &CliOption) -> String {
    if option.is_flag() {
        format!("-{}, --{}", option.short(), option.name())
    } else {
        let type_name = option.value_type().name();
        format!(
            "-{short} <{ty}>, --{long} <{ty}>",
            short = option.short(),
            long = option.name(),
            ty = type_name
        )
    }
}
