//! Parse results: option values and argument values

use crate::model::{OptionSet, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

/// Read-only option values of one invocation
///
/// Holds a value for every declared option (explicit or default) and
/// remembers which ones were given on the command line, so "left at the
/// default" can be told apart from "explicitly set to the default value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOptions {
    values: BTreeMap<String, Value>,
    specified: BTreeSet<String>,
    extra: Vec<String>,
}

impl ParsedOptions {
    /// Options with every declared option at its default
    pub fn defaults(options: &OptionSet) -> Self {
        Self::merge(options, BTreeMap::new(), Vec::new())
    }

    /// Overlay explicitly specified values on the declared defaults
    pub fn merge(
        options: &OptionSet,
        specified: BTreeMap<String, Value>,
        extra: Vec<String>,
    ) -> Self {
        let mut values: BTreeMap<String, Value> = options
            .iter()
            .map(|o| (o.name().to_string(), o.default_value().clone()))
            .collect();
        let names = specified.keys().cloned().collect();
        values.extend(specified);
        ParsedOptions {
            values,
            specified: names,
            extra,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Check if the option was given explicitly; unknown names are not
    pub fn is_specified(&self, name: &str) -> bool {
        self.specified.contains(name)
    }

    /// Only the explicitly specified options
    pub fn specified(&self) -> BTreeMap<&str, &Value> {
        self.specified
            .iter()
            .filter_map(|name| self.values.get_key_value(name))
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }

    /// Unrecognized option tokens, kept verbatim
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered argument values of one invocation
///
/// One entry per fixed slot, plus a `Value::List` for the variadic slot
/// when the signature has one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArguments {
    entries: Vec<(String, Value)>,
}

impl ParsedArguments {
    pub(crate) fn push(&mut self, name: &str, value: Value) {
        self.entries.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn at(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|(_, v)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<usize> for ParsedArguments {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.entries[index].1
    }
}
