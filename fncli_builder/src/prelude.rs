//! Traits which, typically, may be imported without concern: `use fncli::prelude::*`.

/// Behaviour to run a command against its resolved arguments.
// Needs to be imported in order to implement a custom `Handler`.
pub use crate::api::Handler;

/// Behaviour to extract a typed Rust value from a resolved `Value`.
// Needs to be imported in order to call `from_value` directly.
pub use crate::model::FromValue;
