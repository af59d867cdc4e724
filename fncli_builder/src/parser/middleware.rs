use std::env;

use crate::api::{CommandMethod, CommandModule};
use crate::constant::*;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via `CommandModule::build`.
pub struct ModuleParser {
    module: CommandModule,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ModuleParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleParser")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

impl ModuleParser {
    pub(crate) fn new(
        module: CommandModule,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            module,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// The first token names the command, and the remaining tokens are resolved into its arguments.
    /// Dispatch happens in three phases:
    /// 1. Resolution pairs the tokens with the command's parameters, and coerces them by their annotations.
    /// 2. Validation checks that every required parameter was given.
    /// 3. The command's handler is called, and its output (if any) is printed.
    ///
    /// If at any point the dispatcher encounters an error (ex: an unknown command, an inconvertible token, a missing parameter, a failing handler), it will return with `Err(1)`.
    ///
    /// If no tokens are given at all, the module help message is displayed and it will return with `Err(1)`.
    ///
    /// If `--help` is given in place of a command, the module help message is displayed and it will return with `Err(0)`.
    /// If `--help` is given after a command, the command help message is displayed and it will return with `Err(0)`.
    /// This skips the validation and handler phases.
    ///
    /// If `--version` is given in place of a command, the module version is displayed and it will return with `Err(0)`.
    /// When the module has no version, it will return with `Err(1)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let ModuleParser {
            module,
            printer,
            user_interface,
        } = self;

        let Some((command_name, remaining)) = tokens.split_first() else {
            user_interface.print(printer.module_help(&module));
            return Err(1);
        };

        if *command_name == format!("{FLAG_PREFIX}{HELP_NAME}") {
            user_interface.print(printer.module_help(&module));
            return Err(0);
        }

        if *command_name == format!("{FLAG_PREFIX}{VERSION_NAME}") {
            return match module.version() {
                Some(version) => {
                    user_interface.print(format!("{} v{version}", module.name()));
                    Err(0)
                }
                None => {
                    user_interface.print_error(DispatchError::MissingVersion(
                        module.name().to_string(),
                    ));
                    Err(1)
                }
            };
        }

        match module.find_command(command_name) {
            Some(command) => dispatch(
                command,
                module.name(),
                tokens,
                remaining,
                &printer,
                &*user_interface,
            ),
            None => {
                user_interface.print_error(DispatchError::UnrecognizedCommand(
                    command_name.to_string(),
                ));
                user_interface.print_error_context(ErrorContext::new(0, tokens));
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// The parser will process the input tokens based off the `CommandModule` configuration.
    /// See [`ModuleParser::parse_tokens`] for the details.
    ///
    /// If at any point the dispatcher encounters an error (ex: an unknown command, an inconvertible token, a missing parameter, a failing handler), it will exit with error code `1` (via `std::process::exit`).
    ///
    /// If the help switch (`--help`) or the version switch (`--version`) is encountered, the parser will display the respective message and exit with error code `0`.
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}

fn dispatch(
    command: &CommandMethod,
    program: &str,
    tokens: &[&str],
    remaining: &[&str],
    printer: &Printer,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<(), i32> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Dispatching '{}' with {remaining:?}.", command.name());
    }

    let arguments = match command.parse_arguments(remaining) {
        Ok(arguments) => arguments,
        Err(error) => {
            // The command name precedes the remaining tokens.
            let index = error.token_index().map(|index| index + 1);
            user_interface.print_error(DispatchError::Argument(error));

            if let Some(index) = index {
                user_interface.print_error_context(ErrorContext::new(index, tokens));
            }

            return Err(1);
        }
    };

    if arguments.contains(HELP_NAME) {
        user_interface.print(printer.command_help(program, command));
        return Err(0);
    }

    if let Err(error) = command.validate_arguments(&arguments) {
        user_interface.print_error(DispatchError::Argument(error));
        return Err(1);
    }

    match command.call(&arguments) {
        Ok(Some(output)) => {
            user_interface.print(output);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(error) => {
            user_interface.print_error(DispatchError::Command(error));
            Err(1)
        }
    }
}
