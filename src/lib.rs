//! `fncli` turns plain functions into a command line program.
//!
//! Each function becomes a *command*, and each of its parameters becomes a command *parameter*.
//! A command line program is then a named set of commands (a [`CommandModule`]), which dispatches its first token to the command of the same name.
//! `fncli` prioritizes the following design concerns:
//! * *Functions first*:
//! The command is the function; its signature, defaults and doc comment describe the Cli.
//! There is no separate argument struct to keep in sync.
//! * *Lenient, predictable matching*:
//! Every parameter may be given by name (`--name value` or `--name=value`), or positionally, where the token at position `i` binds to the `i`-th parameter.
//! The last occurrence wins.
//! A flag without a value reads as `True`.
//! * *Self-describing*:
//! Usage, help and markdown reference documentation are generated from the same description used to parse.
//!
//! # Usage
//! This page includes a few demos on using `fncli`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/calculator.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! The calculator generates the following Cli program:
//! ```console
//! $ calculator --help
//! A tiny calculator.
//!
//! Usage:
//!   calculator add <a> [--b=<int>]
//!   calculator div <numerator> <denominator>
//!   calculator round <value> [--up]
//!   calculator --help
//!   calculator --version
//!
//! Options:
//!   --help         Show this screen.
//!   --version      Show version information.
//!   --b            The right operand. Default is 1.
//!   --up           Round towards positive infinity instead. Default is false.
//!
//! $ calculator add 1 --b 2
//! 3
//!
//! $ calculator div 10 --denominator=4
//! 2.5
//!
//! $ calculator add x
//! Parse error: Cannot convert 'x' to int for parameter 'a'.
//! add x
//!     ^
//!
//! $ calculator div 1
//! Parse error: Command 'div' is missing required parameter 'denominator'.
//! ```
//!
//! # Builder Api
//! Configure `fncli` by starting with a [`CommandModule`] and adding [`CommandMethod`]s to it.
//! Each `CommandMethod` wraps a handler `Fn(&Arguments) -> Result<Option<String>, CommandError>`, and is described by its [`CommandParam`]s.
//!
//! A `CommandParam` has a name, a position (its *index*), and optionally:
//! * An [`Annotation`], which coerces the matched token (ex: `Annotation::Int` turns `"3"` into `Value::Int(3)`).
//! Tokens of unannotated parameters are kept as strings.
//! * A default [`Value`], which makes the parameter optional.
//! * Documentation, displayed in the help message.
//!
//! Documentation may also be read from a docstring via [`CommandMethod::with_docstring`] (see [`FunctionDocs`]).
//!
//! ### Dispatch
//! Running the parser (via [`ModuleParser::parse`]) goes through these phases:
//! 1. Match the tokens following the command name to the command's parameters, by position or by `--name`.
//! 2. Coerce the matched tokens by their annotations.
//! 3. Check every required parameter was given.
//! 4. Fill in the defaults, and call the handler.
//!
//! Any handler output is printed.
//! Errors are printed along with the offending token, when there is one.
//!
//! # Derive Api
//! See [derive](./derive/index.html) for the `#[command]` attribute, which generates the `CommandMethod` from a function.
pub mod derive;

pub use derive::command;
pub use fncli_builder::*;
