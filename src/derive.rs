//! Derive Api for `fncli` configuration.
//!
//! ### Getting Started
//! Use the derive Api by annotating a plain function `f` with `#[command]`.
//! This leaves `f` untouched, and generates a sibling function `f_command() -> CommandMethod` which describes `f` as a command.
//! Add the command to a [`CommandModule`](crate::CommandModule) the same way as with the builder Api.
//!
//! ```no_run
#![doc = include_str!("../demos/calculator.rs")]
//! ```
//!
//! ### Command Configuration
//! The command is named after the function, unless renamed via `#[command(name = "..")]`.
//! The function's doc comment is read as a docstring (see [`FunctionDocs`](crate::FunctionDocs)):
//! its summary documents the command, and its `:param name:` and `:return:` tags document the parameters and return value.
//!
//! ### Parameter Configuration
//! Every function parameter becomes a command parameter, at the same position.
//! The parameter type decides the annotation:
//! ```console
//! Type                                | Annotation
//! --------------------------------------------------
//! String, &str                        | Annotation::Str
//! i8 .. i64, isize, u8 .. u64, usize  | Annotation::Int
//! f32, f64                            | Annotation::Float
//! bool                                | Annotation::Bool
//! Option<T>                           | (as T)
//! ```
//!
//! Integer tokens are read as `i64`, so a token above `i64::MAX` is rejected even for a `u64` or `usize` parameter.
//!
//! Parameters are required unless they have a default.
//! Declare a default via `#[default(..)]`, which takes any expression convertible into a [`Value`](crate::Value):
//! ```
//! # use fncli::command;
//! #[command]
//! fn repeat(word: &str, #[default(2)] times: usize) -> String {
//!     word.repeat(times)
//! }
//!
//! let command = repeat_command();
//! assert!(command.params()[0].is_required());
//! assert!(!command.params()[1].is_required());
//! ```
//!
//! `Option<T>` parameters default to `None`.
//!
//! ### Return Configuration
//! * `()`: the command prints nothing.
//! * `T: Display`: the command prints the value.
//! * `Result<T, E: Display>`: the command prints the `Ok` value (if not `()`), or fails with the `Err` message.
pub use fncli_derive::command;
