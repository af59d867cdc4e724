mod core;
mod model;

pub(crate) use self::core::*;
pub use model::MatchError;
pub(crate) use model::RawArguments;
