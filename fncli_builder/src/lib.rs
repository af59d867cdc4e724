//! Builder module for `fncli`.
//! See [documentation root](https://docs.rs/fncli/latest/fncli/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use matcher::MatchError;
pub use model::*;
pub use parser::{ArgumentError, ConfigError, DispatchError, ModuleParser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
