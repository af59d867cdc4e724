mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ArgumentError, ConfigError, DispatchError};
pub(crate) use base::{coerce, validate, ErrorContext};
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use middleware::ModuleParser;
pub(crate) use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;
