//! Positional arguments and command signatures

use crate::error::CoercionResult;
use crate::model::{Value, ValueType};

/// A positional command parameter
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    value_type: ValueType,
    default: Option<Value>,
}

impl Argument {
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Argument {
            name: name.into(),
            value_type,
            default: None,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        value_type: ValueType,
        default: impl Into<Value>,
    ) -> Self {
        Argument {
            name: name.into(),
            value_type,
            default: Some(default.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// An argument is required iff it has no default
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Coerce a positional token
    ///
    /// A boolean argument also accepts its own name as `true`.
    pub fn coerce(&self, raw: &str) -> CoercionResult<Value> {
        if self.value_type.is_boolean() && raw == self.name {
            return Ok(Value::Bool(true));
        }
        self.value_type.coerce(raw)
    }
}

/// Ordered arguments of a command
///
/// Required arguments always precede optional ones, and the variadic
/// argument, if any, comes last. The builder keeps each kind in its own
/// list, so that order holds whatever order the slots are declared in.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    required: Vec<Argument>,
    optional: Vec<Argument>,
    variadic: Option<Argument>,
    accepts_arbitrary_options: bool,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.required.push(Argument::required(name, value_type));
        self
    }

    pub fn optional(
        mut self,
        name: impl Into<String>,
        value_type: ValueType,
        default: impl Into<Value>,
    ) -> Self {
        self.optional
            .push(Argument::optional(name, value_type, default));
        self
    }

    /// Set the trailing slot consuming all remaining tokens
    pub fn variadic(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.variadic = Some(Argument::required(name, value_type));
        self
    }

    /// Collect unrecognized option tokens instead of rejecting them
    pub fn accept_arbitrary_options(mut self) -> Self {
        self.accepts_arbitrary_options = true;
        self
    }

    pub fn required_arguments(&self) -> &[Argument] {
        &self.required
    }

    pub fn optional_arguments(&self) -> &[Argument] {
        &self.optional
    }

    /// Fixed arguments: required, then optional
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.required.iter().chain(self.optional.iter())
    }

    pub fn variadic_argument(&self) -> Option<&Argument> {
        self.variadic.as_ref()
    }

    pub fn accepts_arbitrary_options(&self) -> bool {
        self.accepts_arbitrary_options
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty() && self.variadic.is_none()
    }
}
