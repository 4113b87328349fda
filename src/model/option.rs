//! Option descriptors and option sets

use crate::error::{DeclarationError, DeclarationResult};
use crate::model::{Value, ValueType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Valid option name: starts with a letter, followed by word characters
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]\w+$").unwrap());

/// Valid short name: letter or digit, optionally followed by word characters
static SHORT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]\w*$").unwrap());

/// A named, typed, defaulted flag
///
/// With name `long` and short name `s` the option is written as
/// `--long [value]`, `--long=value` or `-s [value]`. Boolean options take
/// no value: their presence alone means `true`.
///
/// Every option has a default. A parameter that must always be supplied
/// should be a positional argument instead.
#[derive(Debug, Clone)]
pub struct CliOption {
    name: String,
    short: String,
    value_type: ValueType,
    default: Value,
    description: String,
}

impl CliOption {
    /// Create an option, validating its names
    pub fn new(
        name: impl Into<String>,
        short: impl Into<String>,
        value_type: ValueType,
        default: impl Into<Value>,
    ) -> DeclarationResult<Self> {
        let name = name.into();
        let short = short.into();
        if !Self::is_valid_name(&name) {
            return Err(DeclarationError::InvalidOptionName(name));
        }
        if !SHORT_PATTERN.is_match(&short) {
            return Err(DeclarationError::InvalidShortName(short));
        }
        Ok(CliOption {
            name,
            short,
            value_type,
            default: default.into(),
            description: String::new(),
        })
    }

    /// Create a boolean option defaulting to `false`
    pub fn flag(name: impl Into<String>, short: impl Into<String>) -> DeclarationResult<Self> {
        Self::new(name, short, ValueType::Boolean, false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_valid_name(name: &str) -> bool {
        NAME_PATTERN.is_match(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_flag(&self) -> bool {
        self.value_type.is_boolean()
    }
}

/// The options of one scope (a command or a handler), in declaration order
///
/// Long names and short names are each unique within the set.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<CliOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `option` could be added without a name collision
    pub fn check(&self, option: &CliOption, scope: &str) -> DeclarationResult<()> {
        if self.get(option.name()).is_some() {
            return Err(DeclarationError::DuplicateOption {
                name: option.name().to_string(),
                scope: scope.to_string(),
            });
        }
        if self.by_short(option.short()).is_some() {
            return Err(DeclarationError::DuplicateShortOption {
                short: option.short().to_string(),
                scope: scope.to_string(),
            });
        }
        Ok(())
    }

    /// Add an option, failing on a name or short-name collision
    pub fn declare(&mut self, option: CliOption, scope: &str) -> DeclarationResult<()> {
        self.check(&option, scope)?;
        self.options.push(option);
        Ok(())
    }

    /// Look up an option by long name
    pub fn get(&self, name: &str) -> Option<&CliOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Look up an option by short name
    pub fn by_short(&self, short: &str) -> Option<&CliOption> {
        self.options.iter().find(|o| o.short == short)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CliOption> {
        self.options.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.options.iter().map(CliOption::name).collect()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a CliOption;
    type IntoIter = std::slice::Iter<'a, CliOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
