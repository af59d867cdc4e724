use std::collections::HashSet;

use crate::api::CommandMethod;
use crate::constant::*;
use crate::parser::{ConfigError, ConsoleInterface, ModuleParser, Printer, UserInterface};

/// A named set of commands: the function table behind a command line program.
///
/// ### Example
/// ```
/// # use fncli_builder as fncli;
/// use fncli::{CommandMethod, CommandModule, CommandParam};
///
/// let parser = CommandModule::new("program")
///     .with_documentation("An example program.")
///     .with_version("1.2.3")
///     .with_command(
///         CommandMethod::new("shout", |arguments| {
///             let word: String = arguments.require("word")?;
///             Ok(Some(word.to_uppercase()))
///         })
///         .with_param(CommandParam::new("word", 0).unwrap()),
///     )
///     .build();
///
/// parser.parse_tokens(vec!["shout", "hello"].as_slice()).unwrap();
/// ```
#[derive(Debug)]
pub struct CommandModule {
    name: String,
    documentation: Option<String>,
    version: Option<String>,
    commands: Vec<CommandMethod>,
    deferred_error: Option<ConfigError>,
}

impl CommandModule {
    /// Create an empty module called `name` (typically the program name).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            version: None,
            commands: Vec::default(),
            deferred_error: None,
        }
    }

    /// Document this module.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation.replace(documentation.into());
        self
    }

    /// Set the version reported by `--version`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version.replace(version.into());
        self
    }

    /// Add a command to this module.
    /// Commands are listed in the order they are added.
    pub fn with_command(mut self, command: CommandMethod) -> Self {
        if self.find_command(command.name()).is_some() {
            self.deferred_error.replace(ConfigError(format!(
                "module '{}' contains duplicate command '{}'.",
                self.name,
                command.name()
            )));
        }

        self.commands.push(command);
        self
    }

    /// The module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module documentation, or a placeholder when undocumented.
    pub fn documentation(&self) -> &str {
        self.documentation.as_deref().unwrap_or(NO_DOCUMENTATION)
    }

    /// The module version, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether this module has a version.
    pub fn has_version(&self) -> bool {
        self.version.is_some()
    }

    /// The commands, in the order they were added.
    pub fn commands(&self) -> impl Iterator<Item = &CommandMethod> {
        self.commands.iter()
    }

    /// The command called `name`, if any.
    pub fn find_command(&self, name: &str) -> Option<&CommandMethod> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// The length of the longest flag across all commands, including the implicit `--help` and `--version`.
    pub fn longest_param_name_length(&self) -> usize {
        let minimum = if self.has_version() {
            FLAG_PREFIX.len() + VERSION_NAME.len()
        } else {
            FLAG_PREFIX.len() + HELP_NAME.len()
        };

        self.commands
            .iter()
            .map(CommandMethod::longest_param_name_length)
            .fold(minimum, std::cmp::max)
    }

    /// The usage message of this module.
    pub fn usage(&self) -> String {
        Printer::terminal().module_usage(self).join("\n")
    }

    /// The help message of this module.
    pub fn help(&self) -> String {
        Printer::terminal().module_help(self)
    }

    /// The reference documentation of this module and its commands, in markdown.
    pub fn markdown(&self) -> String {
        Printer::terminal().module_markdown(self)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError("module name is required.".to_string()));
        }

        let mut names = HashSet::new();

        for command in &self.commands {
            let name = command.name();

            if name.is_empty() || name.starts_with(FLAG_PREFIX) || name.contains(char::is_whitespace) {
                return Err(ConfigError(format!(
                    "module '{}' contains invalid command name '{name}'.",
                    self.name
                )));
            }

            if !names.insert(name) {
                return Err(ConfigError(format!(
                    "module '{}' contains duplicate command '{name}'.",
                    self.name
                )));
            }

            command.check()?;
        }

        Ok(())
    }

    pub(crate) fn build_with_interface(
        mut self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<ModuleParser, ConfigError> {
        if let Some(error) = self.deferred_error.take() {
            return Err(error);
        }

        self.check()?;
        Ok(ModuleParser::new(self, Printer::terminal(), user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated command name).
    pub fn build_parser(self) -> Result<ModuleParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated command name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> ModuleParser {
        match self.build_parser() {
            Ok(module_parser) => module_parser,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CommandParam;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn noop(name: &str) -> CommandMethod {
        CommandMethod::new(name, |_| Ok(None))
    }

    #[test]
    fn create() {
        let module = CommandModule::new("program");
        assert_eq!(module.name(), "program");
        assert_eq!(module.documentation(), "No documentation provided.");
        assert_eq!(module.version(), None);
        assert!(!module.has_version());
        assert_eq!(module.commands().count(), 0);
        assert_eq!(module.longest_param_name_length(), 6);
    }

    #[test]
    fn commands_in_order() {
        let module = CommandModule::new("program")
            .with_command(noop("zeta"))
            .with_command(noop("alpha"));

        let names: Vec<&str> = module.commands().map(CommandMethod::name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(module.find_command("alpha").map(CommandMethod::name), Some("alpha"));
        assert!(module.find_command("beta").is_none());
    }

    #[rstest]
    #[case(None, vec![], 6)]
    #[case(Some("1.0"), vec![], 9)]
    #[case(None, vec!["abcdefgh"], 10)]
    #[case(Some("1.0"), vec!["abc"], 9)]
    #[case(Some("1.0"), vec!["abcdefgh"], 10)]
    fn longest_param_name_length(
        #[case] version: Option<&str>,
        #[case] names: Vec<&str>,
        #[case] expected: usize,
    ) {
        let mut command = noop("command");

        for (index, name) in names.into_iter().enumerate() {
            command = command.with_param(CommandParam::new(name, index).unwrap());
        }

        let mut module = CommandModule::new("program").with_command(command);

        if let Some(version) = version {
            module = module.with_version(version);
        }

        assert_eq!(module.longest_param_name_length(), expected);
    }

    #[test]
    fn build_parser() {
        let module = CommandModule::new("program")
            .with_version("1.0")
            .with_command(noop("a"))
            .with_command(noop("b"));

        assert_matches!(module.build_parser(), Ok(_));
    }

    #[test]
    fn build_parser_duplicate_command() {
        let module = CommandModule::new("program")
            .with_command(noop("a"))
            .with_command(noop("a"));

        assert_matches!(module.build_parser(), Err(ConfigError(message)) => {
            assert_contains!(message, "duplicate command 'a'");
        });
    }

    #[rstest]
    #[case("")]
    #[case("--help")]
    #[case("a b")]
    fn build_parser_invalid_command(#[case] name: &str) {
        let module = CommandModule::new("program").with_command(noop(name));

        assert_matches!(module.build_parser(), Err(ConfigError(message)) => {
            assert_contains!(message, "invalid command name");
        });
    }

    #[test]
    fn build_parser_invalid_module() {
        assert_matches!(CommandModule::new(" ").build_parser(), Err(ConfigError(message)) => {
            assert_contains!(message, "module name is required");
        });
    }

    #[test]
    fn build_parser_invalid_param() {
        let module = CommandModule::new("program")
            .with_command(noop("a").with_param(CommandParam::new("x", 1).unwrap()));

        assert_matches!(module.build_parser(), Err(ConfigError(message)) => {
            assert_contains!(message, "command 'a' parameter 'x' has index 1, expected 0");
        });
    }

    #[test]
    fn usage_help_markdown() {
        let module = CommandModule::new("program")
            .with_documentation("Does things.")
            .with_command(noop("run"));

        assert_contains!(module.usage(), "  program run");
        assert_contains!(module.help(), "Does things.");
        assert!(module.markdown().starts_with("# program\n\nDoes things.\n"));
    }
}
