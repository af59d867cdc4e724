use std::collections::HashMap;
use thiserror::Error;

/// The raw value matched to a parameter, alongside the index of the token it came from.
pub(crate) type OffsetValue = (usize, String);

/// The raw (un-coerced) name -> value matches of a token list.
pub(crate) type RawArguments = HashMap<String, OffsetValue>;

/// A positional token could not be matched to any declared parameter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// More positional tokens were given than the command declares parameters.
    #[error("Unexpected argument '{token}' at position {index}.")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
        /// The index of the offending token.
        index: usize,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParamPair {
    pub name: String,
    pub value: String,
    // The index of the token that named the pair.
    pub offset: usize,
    // The number of tokens the pair took up (1 or 2).
    pub consumed: usize,
}

impl ParamPair {
    pub(crate) fn flag(
        name: impl Into<String>,
        value: impl Into<String>,
        offset: usize,
        consumed: usize,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            offset,
            consumed,
        }
    }

    pub(crate) fn positional(name: impl Into<String>, value: impl Into<String>, offset: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            offset,
            consumed: 1,
        }
    }
}
