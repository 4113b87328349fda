//! Typed values and string coercion
//!
//! `ValueType` is the coercion registry: every type tag maps to exactly one
//! string-to-value parser, applied to option values and positional tokens.

use crate::error::{CoercionResult, InvalidValue};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A coerced command-line value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// A user-defined type tag
pub trait Coercion: Send + Sync {
    /// Name shown in help and error messages
    fn name(&self) -> String;

    /// Parse a raw command-line string
    fn coerce(&self, raw: &str) -> CoercionResult<Value>;
}

/// Type tag of an option or argument
#[derive(Clone)]
pub enum ValueType {
    String,
    Integer,
    Float,
    /// Flags: options of this type never consume a value token
    Boolean,
    /// One of a fixed set of strings
    Choice(Vec<String>),
    /// Comma separated values of the inner type
    List(Box<ValueType>),
    Custom(Arc<dyn Coercion>),
}

impl ValueType {
    pub fn choice<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueType::Choice(allowed.into_iter().map(Into::into).collect())
    }

    pub fn list_of(inner: ValueType) -> Self {
        ValueType::List(Box::new(inner))
    }

    pub fn custom(coercion: impl Coercion + 'static) -> Self {
        ValueType::Custom(Arc::new(coercion))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, ValueType::Boolean)
    }

    /// Display name of the type
    pub fn name(&self) -> String {
        match self {
            ValueType::String => "str".to_string(),
            ValueType::Integer => "int".to_string(),
            ValueType::Float => "float".to_string(),
            ValueType::Boolean => "bool".to_string(),
            ValueType::Choice(allowed) => allowed.join("|"),
            ValueType::List(inner) => format!("listof({})", inner.name()),
            ValueType::Custom(coercion) => coercion.name(),
        }
    }

    /// Coerce a raw string to a value of this type
    pub fn coerce(&self, raw: &str) -> CoercionResult<Value> {
        let invalid = || InvalidValue::new(self.name(), raw);
        match self {
            ValueType::String => Ok(Value::Str(raw.to_string())),
            ValueType::Integer => raw.parse().map(Value::Int).map_err(|_| invalid()),
            ValueType::Float => raw.parse().map(Value::Float).map_err(|_| invalid()),
            ValueType::Boolean => {
                if raw.eq_ignore_ascii_case("true") {
                    Ok(Value::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Ok(Value::Bool(false))
                } else {
                    Err(invalid())
                }
            }
            ValueType::Choice(allowed) => {
                if allowed.iter().any(|a| a == raw) {
                    Ok(Value::Str(raw.to_string()))
                } else {
                    Err(invalid())
                }
            }
            ValueType::List(inner) => raw
                .split(',')
                .map(|item| inner.coerce(item).map_err(|_| invalid()))
                .collect::<CoercionResult<Vec<_>>>()
                .map(Value::List),
            ValueType::Custom(coercion) => coercion.coerce(raw),
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueType({})", self.name())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ValueType {
    type Err = InvalidValue;

    /// Parse a built-in type name: `str`, `int`, `float`, `bool`,
    /// `listof(<type>)` or `a|b|c` for choices
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "str" | "string" => Ok(ValueType::String),
            "int" | "integer" => Ok(ValueType::Integer),
            "float" => Ok(ValueType::Float),
            "bool" | "boolean" => Ok(ValueType::Boolean),
            _ => {
                if let Some(inner) = s.strip_prefix("listof(").and_then(|r| r.strip_suffix(')')) {
                    return Ok(ValueType::list_of(inner.parse()?));
                }
                if s.contains('|') && s.split('|').all(|c| !c.is_empty()) {
                    return Ok(ValueType::choice(s.split('|')));
                }
                Err(InvalidValue::new("type name", s))
            }
        }
    }
}
