mod arguments;
mod docs;
mod method;
mod module;
mod param;
mod returns;

pub use arguments::*;
pub use docs::*;
pub use method::*;
pub use module::*;
pub use param::*;
pub use returns::*;
