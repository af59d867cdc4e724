use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::api::{Arguments, CommandParam, CommandReturn, FunctionDocs};
use crate::constant::*;
use crate::matcher::TokenMatcher;
use crate::model::InvalidValue;
use crate::parser::{coerce, validate, ArgumentError, ConfigError, Printer};

#[cfg(feature = "unit_test")]
use crate::parser::DispatchError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A command handler failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandError(String);

impl CommandError {
    /// Create a command error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<InvalidValue> for CommandError {
    fn from(error: InvalidValue) -> Self {
        Self(error.to_string())
    }
}

/// Behaviour to run a command against its resolved arguments.
///
/// Implemented for any `Fn(&Arguments) -> Result<Option<String>, CommandError>`.
/// The `Some` output is printed by the dispatcher.
pub trait Handler: Send + Sync {
    /// Run the command.
    fn call(&self, arguments: &Arguments) -> Result<Option<String>, CommandError>;
}

impl<F> Handler for F
where
    F: Fn(&Arguments) -> Result<Option<String>, CommandError> + Send + Sync,
{
    fn call(&self, arguments: &Arguments) -> Result<Option<String>, CommandError> {
        self(arguments)
    }
}

/// Describes a command: its parameters, documentation and handler.
///
/// ### Example
/// ```
/// # use fncli_builder as fncli;
/// use fncli::{Annotation, CommandMethod, CommandParam, Value};
///
/// let command = CommandMethod::new("greet", |arguments| {
///     let name: String = arguments.require("name")?;
///     let times: i64 = arguments.require("times")?;
///     Ok(Some(vec![format!("Hello {name}!"); times as usize].join("\n")))
/// })
/// .with_param(CommandParam::new("name", 0).unwrap())
/// .with_param(
///     CommandParam::new("times", 1)
///         .unwrap()
///         .with_annotation(Annotation::Int)
///         .with_default(1),
/// );
///
/// let arguments = command.parse_arguments(&["world", "--times", "2"]).unwrap();
/// assert_eq!(arguments.get("times"), Some(&Value::Int(2)));
/// command.validate_arguments(&arguments).unwrap();
/// assert_eq!(
///     command.call(&arguments).unwrap(),
///     Some("Hello world!\nHello world!".to_string())
/// );
/// ```
pub struct CommandMethod {
    name: String,
    documentation: Option<String>,
    // Ordered by index.
    params: Vec<CommandParam>,
    param_docs: HashMap<String, String>,
    return_value: CommandReturn,
    handler: Box<dyn Handler>,
}

impl std::fmt::Debug for CommandMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMethod")
            .field("name", &self.name)
            .field("documentation", &self.documentation)
            .field("params", &self.params)
            .field("return_value", &self.return_value)
            .finish_non_exhaustive()
    }
}

impl CommandMethod {
    /// Create a command with no parameters that runs the `handler` closure.
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Option<String>, CommandError> + Send + Sync + 'static,
    {
        Self::from_handler(name, handler)
    }

    /// Create a command with no parameters that runs the `handler`.
    pub fn from_handler(name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            params: Vec::default(),
            param_docs: HashMap::default(),
            return_value: CommandReturn::default(),
            handler: Box::new(handler),
        }
    }

    /// Document this command.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation.replace(documentation.into());
        self
    }

    /// Document this command, its parameters and its return value from a docstring.
    /// See [`FunctionDocs`] for the recognized format.
    ///
    /// Documentation set explicitly (ex: via [`CommandParam::with_documentation`]) takes precedence.
    pub fn with_docstring(mut self, docstring: &str) -> Self {
        let docs = FunctionDocs::parse(docstring);

        if self.documentation.is_none() {
            if let Some(summary) = docs.summary() {
                self.documentation.replace(summary.to_string());
            }
        }

        for (name, documentation) in docs.params() {
            if let Some(param) = self.params.iter_mut().find(|p| p.name() == name) {
                param.document_if_absent(documentation);
            }

            self.param_docs
                .insert(name.to_string(), documentation.to_string());
        }

        if let Some(returns) = docs.returns() {
            if self.return_value.documentation().is_none() {
                self.return_value = self.return_value.clone().with_documentation(returns);
            }
        }

        self
    }

    /// Add a parameter to this command.
    pub fn with_param(mut self, mut param: CommandParam) -> Self {
        if let Some(documentation) = self.param_docs.get(param.name()) {
            param.document_if_absent(documentation);
        }

        let position = self
            .params
            .partition_point(|existing| existing.index() <= param.index());
        self.params.insert(position, param);
        self
    }

    /// Describe the return value of this command.
    pub fn with_returns(mut self, mut return_value: CommandReturn) -> Self {
        if return_value.documentation().is_none() {
            if let Some(documentation) = self.return_value.documentation() {
                return_value = return_value.with_documentation(documentation);
            }
        }

        self.return_value = return_value;
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command documentation, or a placeholder when undocumented.
    pub fn documentation(&self) -> &str {
        self.documentation.as_deref().unwrap_or(NO_DOCUMENTATION)
    }

    /// All the parameters, ordered by index.
    pub fn params(&self) -> &[CommandParam] {
        &self.params
    }

    /// The parameter called `name`, if any.
    pub fn find_param(&self, name: &str) -> Option<&CommandParam> {
        self.params.iter().find(|param| param.name() == name)
    }

    /// The parameters without a default, ordered by index.
    pub fn required_params(&self) -> Vec<&CommandParam> {
        self.params.iter().filter(|p| p.is_required()).collect()
    }

    /// The parameters with a default, ordered by index.
    pub fn optional_params(&self) -> Vec<&CommandParam> {
        self.params.iter().filter(|p| p.has_default()).collect()
    }

    /// The description of the return value.
    pub fn return_value(&self) -> &CommandReturn {
        &self.return_value
    }

    /// The usage fragment of all the parameters, in index order.
    /// Each parameter's fragment is followed by a space.
    pub fn short_params(&self) -> String {
        self.params
            .iter()
            .map(|param| format!("{} ", param.short_usage()))
            .collect()
    }

    /// The length of the longest parameter flag (ex: `--name`), including the implicit `--help`.
    pub fn longest_param_name_length(&self) -> usize {
        self.params
            .iter()
            .map(|param| FLAG_PREFIX.len() + param.name().chars().count())
            .fold(FLAG_PREFIX.len() + HELP_NAME.len(), std::cmp::max)
    }

    /// Resolve the `tokens` (everything after the command name) into coerced arguments.
    ///
    /// This does not check for required parameters; see [`CommandMethod::validate_arguments`].
    pub fn parse_arguments(&self, tokens: &[&str]) -> Result<Arguments, ArgumentError> {
        let names: Vec<&str> = self.params.iter().map(CommandParam::name).collect();
        let raw_arguments = TokenMatcher::new(names).match_tokens(tokens)?;
        coerce(&self.params, raw_arguments)
    }

    /// Check that every required parameter is amongst the `arguments`.
    pub fn validate_arguments(&self, arguments: &Arguments) -> Result<(), ArgumentError> {
        validate(&self.name, &self.params, arguments)
    }

    /// Run the handler against the `arguments`.
    /// Parameters which were not given are filled in with their defaults first.
    pub fn call(&self, arguments: &Arguments) -> Result<Option<String>, CommandError> {
        let mut complete = arguments.clone();

        for param in &self.params {
            match param.default_value() {
                Some(default_value) if !complete.contains(param.name()) => {
                    complete.insert(param.name(), default_value.clone());
                }
                _ => {}
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Calling '{}' with {complete:?}.", self.name);
        }

        self.handler.call(&complete)
    }

    /// The usage line of this command, as invoked through `program`.
    pub fn usage(&self, program: &str) -> String {
        Printer::terminal().command_usage(program, self)
    }

    /// The help message of this command, as invoked through `program`.
    pub fn help(&self, program: &str) -> String {
        Printer::terminal().command_help(program, self)
    }

    /// The reference documentation of this command, in markdown.
    pub fn markdown(&self) -> String {
        Printer::terminal().command_markdown(self)
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();

        for (position, param) in self.params.iter().enumerate() {
            if !names.insert(param.name()) {
                return Err(ConfigError(format!(
                    "command '{}' contains duplicate parameter '{}'.",
                    self.name,
                    param.name()
                )));
            }

            if param.name() == HELP_NAME || param.name() == VERSION_NAME {
                return Err(ConfigError(format!(
                    "command '{}' contains reserved parameter '{}'.",
                    self.name,
                    param.name()
                )));
            }

            if param.index() != position {
                return Err(ConfigError(format!(
                    "command '{}' parameter '{}' has index {}, expected {position}.",
                    self.name,
                    param.name(),
                    param.index()
                )));
            }
        }

        Ok(())
    }

    /// Resolve, validate and run the command against the `tokens`, all in one.
    #[cfg(feature = "unit_test")]
    pub fn invoke(&self, tokens: &[&str]) -> Result<Option<String>, DispatchError> {
        let arguments = self.parse_arguments(tokens)?;
        self.validate_arguments(&arguments)?;
        Ok(self.call(&arguments)?)
    }
}
