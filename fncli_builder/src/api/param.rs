use std::collections::HashMap;
use thiserror::Error;

use crate::constant::*;
use crate::model::{Annotation, Value};

/// A parameter descriptor could not be constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// The parameter name is empty.
    #[error("Parameter name is required.")]
    MissingName,

    /// The parameter name cannot be used on the command line (ex: it contains whitespace or '=').
    #[error("Parameter name '{0}' is not a valid identifier.")]
    InvalidName(String),
}

/// Describes one formal parameter of a command.
///
/// A parameter is *required* exactly when it has no default.
/// The presence of a default is what matters, not its truthiness: a default of `0`, `""` or [`Value::None`] still makes the parameter optional.
///
/// ### Example
/// ```
/// # use fncli_builder as fncli;
/// use fncli::{Annotation, CommandParam, Value};
///
/// let count = CommandParam::new("count", 1)
///     .unwrap()
///     .with_annotation(Annotation::Int)
///     .with_default(0);
///
/// assert!(count.has_default());
/// assert_eq!(count.default_value(), Some(&Value::Int(0)));
/// assert_eq!(count.short_usage(), "[--count=<int>]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommandParam {
    name: String,
    index: usize,
    documentation: Option<String>,
    annotation: Option<Annotation>,
    default_value: Option<Value>,
}

impl CommandParam {
    /// Create a required, un-annotated parameter at position `index`.
    pub fn new(name: impl Into<String>, index: usize) -> Result<Self, ParamError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ParamError::MissingName);
        }

        if !is_identifier(&name) {
            return Err(ParamError::InvalidName(name));
        }

        Ok(Self {
            name,
            index,
            documentation: None,
            annotation: None,
            default_value: None,
        })
    }

    /// Document this parameter.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation.replace(documentation.into());
        self
    }

    /// Declare the type used to coerce this parameter's token.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation.replace(annotation);
        self
    }

    /// Make this parameter optional, with the given default.
    pub fn with_default(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value.replace(default_value.into());
        self
    }

    /// Make this parameter optional if `defaults` contains its name.
    ///
    /// ### Example
    /// ```
    /// # use fncli_builder as fncli;
    /// use fncli::{CommandParam, Value};
    /// use std::collections::HashMap;
    ///
    /// let defaults = HashMap::from([("flag".to_string(), Value::None)]);
    ///
    /// assert!(CommandParam::new("flag", 0).unwrap().with_defaults(&defaults).has_default());
    /// assert!(!CommandParam::new("other", 1).unwrap().with_defaults(&defaults).has_default());
    /// ```
    pub fn with_defaults<S: std::hash::BuildHasher>(
        mut self,
        defaults: &HashMap<String, Value, S>,
    ) -> Self {
        if let Some(default_value) = defaults.get(&self.name) {
            self.default_value.replace(default_value.clone());
        }

        self
    }

    pub(crate) fn document_if_absent(&mut self, documentation: &str) {
        if self.documentation.is_none() {
            self.documentation.replace(documentation.to_string());
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The zero-based position of this parameter.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The parameter documentation, or a placeholder when undocumented.
    pub fn documentation(&self) -> &str {
        self.documentation.as_deref().unwrap_or(NO_DOCUMENTATION)
    }

    /// The declared annotation, if any.
    pub fn annotation(&self) -> Option<Annotation> {
        self.annotation
    }

    /// The name of the declared annotation, if any.
    pub fn annotation_name(&self) -> Option<&'static str> {
        self.annotation.as_ref().map(Annotation::name)
    }

    /// The default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Whether this parameter is optional.
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Whether this parameter must be given.
    pub fn is_required(&self) -> bool {
        !self.has_default()
    }

    /// The usage fragment for this parameter alone.
    ///
    /// * required: `<name>`
    /// * optional `bool`: `[--name]`
    /// * optional, un-annotated: `[--name=<na>]`
    /// * optional, otherwise: `[--name=<type>]`
    pub fn short_usage(&self) -> String {
        if self.is_required() {
            return format!("<{}>", self.name);
        }

        match self.annotation {
            Some(Annotation::Bool) => format!("[{FLAG_PREFIX}{}]", self.name),
            Some(annotation) => format!("[{FLAG_PREFIX}{}=<{annotation}>]", self.name),
            None => {
                let placeholder: String = self.name.chars().take(2).collect();
                format!("[{FLAG_PREFIX}{}=<{placeholder}>]", self.name)
            }
        }
    }
}

impl std::fmt::Display for CommandParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":param {}:", self.name)?;

        if let Some(annotation) = &self.annotation {
            write!(f, " ({annotation})")?;
        }

        write!(f, " {}", self.documentation())?;

        if let Some(default_value) = &self.default_value {
            write!(f, " Default is {default_value}.")?;
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    match name.chars().next() {
        Some(first) if first == '-' || first.is_ascii_digit() => false,
        Some(_) => !name.chars().any(|c| c.is_whitespace() || c == '='),
        None => false,
    }
}
