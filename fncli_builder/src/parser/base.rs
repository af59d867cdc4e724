use thiserror::Error;

use crate::api::{Arguments, CommandError, CommandParam};
use crate::matcher::{MatchError, RawArguments};
use crate::model::{InvalidConversion, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser configuration is invalid (ex: a repeated parameter name).
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The tokens given to a command could not be resolved into its arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    /// A positional token has no parameter to bind to.
    #[error(transparent)]
    Unexpected(#[from] MatchError),

    /// A token could not be coerced into its parameter's annotation.
    #[error("{source}")]
    Conversion {
        /// The index of the offending token.
        index: usize,
        /// The underlying conversion failure.
        source: InvalidConversion,
    },

    /// A required parameter was not given.
    #[error("Command '{command}' is missing required parameter '{name}'.")]
    MissingParameter {
        /// The command name.
        command: String,
        /// The parameter name.
        name: String,
    },
}

impl ArgumentError {
    /// The index of the token which caused this error, if any.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            ArgumentError::Unexpected(MatchError::UnexpectedArgument { index, .. }) => {
                Some(*index)
            }
            ArgumentError::Conversion { index, .. } => Some(*index),
            ArgumentError::MissingParameter { .. } => None,
        }
    }
}

/// A command could not be dispatched to completion.
#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    /// The command name is not amongst the module's commands.
    #[error("Unrecognized command '{0}'.")]
    UnrecognizedCommand(String),

    /// Version information was requested from a module without a version.
    #[error("No version information found for module {0}.")]
    MissingVersion(String),

    /// The command's arguments could not be resolved.
    #[error("Parse error: {0}")]
    Argument(#[from] ArgumentError),

    /// The command's handler failed.
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Coerce each raw value for a declared & annotated parameter.
/// Values for undeclared names (ex: `help`) and un-annotated parameters stay as strings.
pub(crate) fn coerce(
    params: &[CommandParam],
    raw_arguments: RawArguments,
) -> Result<Arguments, ArgumentError> {
    let mut entries: Vec<_> = raw_arguments.into_iter().collect();
    // Report the left-most conversion failure.
    entries.sort_by_key(|(_, (offset, _))| *offset);
    let mut arguments = Arguments::default();

    for (name, (offset, token)) in entries {
        let annotation = params
            .iter()
            .find(|param| param.name() == name)
            .and_then(CommandParam::annotation);
        let value = match annotation {
            Some(annotation) => annotation
                .coerce(&name, &token)
                .map_err(|source| ArgumentError::Conversion {
                    index: offset,
                    source,
                })?,
            None => Value::Str(token),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resolved '{name}' to {value:?}.");
        }

        arguments.insert(name, value);
    }

    Ok(arguments)
}

/// Check that every required parameter (in index order) is present in the `arguments`.
pub(crate) fn validate(
    command: &str,
    params: &[CommandParam],
    arguments: &Arguments,
) -> Result<(), ArgumentError> {
    let mut required: Vec<&CommandParam> = params.iter().filter(|p| p.is_required()).collect();
    required.sort_by_key(|param| param.index());

    for param in required {
        if !arguments.contains(param.name()) {
            return Err(ArgumentError::MissingParameter {
                command: command.to_string(),
                name: param.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Points at the offending token in the input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// The context for the token at `index` amongst `tokens`.
    pub(crate) fn new(index: usize, tokens: &[&str]) -> Self {
        let offset = tokens
            .iter()
            .take(index)
            .map(|token| token.chars().count() + 1)
            .sum();

        Self {
            offset,
            tokens: tokens.iter().map(|token| token.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.tokens.join(" "))?;
        write!(f, "{:>width$}", "^", width = self.offset + 1)
    }
}
