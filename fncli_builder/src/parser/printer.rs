use terminal_size::{terminal_size, Width};

use crate::api::{CommandMethod, CommandModule, CommandParam};
use crate::constant::*;
use crate::parser::interface::ColumnRenderer;

const INDENT_WIDTH: usize = 2;
const PADDING_WIDTH: usize = 2;
// Used when the terminal width cannot be determined (ex: output is piped).
const DEFAULT_TOTAL_WIDTH: usize = 80;

/// Renders the usage, help and markdown of modules and commands.
#[derive(Debug, Default)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = terminal_size().map(|(Width(width), _)| width as usize);
        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    fn renderer(&self, left: usize, rows: &[(String, String)]) -> ColumnRenderer {
        let middle = rows
            .iter()
            .map(|(_, description)| description.chars().count())
            .max()
            .unwrap_or_default();

        ColumnRenderer::guided(
            INDENT_WIDTH,
            PADDING_WIDTH,
            left,
            middle,
            self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH),
        )
    }

    fn section(&self, title: &str, left: usize, rows: Vec<(String, String)>) -> Vec<String> {
        let renderer = self.renderer(left, &rows);
        let mut lines = vec![String::default(), format!("{title}:")];

        for (name, description) in &rows {
            lines.extend(renderer.render(name, description));
        }

        lines
    }

    /// The usage lines of the `module`.
    pub(crate) fn module_usage(&self, module: &CommandModule) -> Vec<String> {
        let mut lines = vec!["Usage:".to_string()];

        for command in module.commands() {
            lines.push(usage_line(module.name(), command));
        }

        lines.push(format!("{:INDENT_WIDTH$}{} {FLAG_PREFIX}{HELP_NAME}", "", module.name()));

        if module.has_version() {
            lines.push(format!(
                "{:INDENT_WIDTH$}{} {FLAG_PREFIX}{VERSION_NAME}",
                "",
                module.name()
            ));
        }

        lines
    }

    /// The help message of the `module`.
    pub(crate) fn module_help(&self, module: &CommandModule) -> String {
        let mut lines = vec![module.documentation().to_string(), String::default()];
        lines.extend(self.module_usage(module));

        let mut options = vec![help_row()];

        if module.has_version() {
            options.push((
                format!("{FLAG_PREFIX}{VERSION_NAME}"),
                VERSION_MESSAGE.to_string(),
            ));
        }

        for command in module.commands() {
            options.extend(command.optional_params().into_iter().map(option_row));
        }

        lines.extend(self.section("Options", module.longest_param_name_length(), options));
        lines.join("\n")
    }

    /// The usage line of the `command`, as invoked through `program`.
    pub(crate) fn command_usage(&self, program: &str, command: &CommandMethod) -> String {
        usage_line(program, command)
    }

    /// The help message of the `command`, as invoked through `program`.
    pub(crate) fn command_help(&self, program: &str, command: &CommandMethod) -> String {
        let left = command.longest_param_name_length();
        let mut lines = vec![
            command.documentation().to_string(),
            String::default(),
            "Usage:".to_string(),
            usage_line(program, command),
        ];

        let required = command.required_params();

        if !required.is_empty() {
            let arguments = required
                .into_iter()
                .map(|param| (param.name().to_string(), describe(param)))
                .collect();
            lines.extend(self.section("Positional arguments", left, arguments));
        }

        let mut options = vec![help_row()];
        options.extend(command.optional_params().into_iter().map(option_row));
        lines.extend(self.section("Options", left, options));
        lines.join("\n")
    }

    /// The reference documentation of the `module` and its commands, in markdown.
    pub(crate) fn module_markdown(&self, module: &CommandModule) -> String {
        let mut out = format!("# {}\n\n{}\n", module.name(), module.documentation());

        if let Some(version) = module.version() {
            out.push_str(&format!("\nVersion: {version}\n"));
        }

        for command in module.commands() {
            out.push('\n');
            out.push_str(&self.command_markdown(command));
        }

        out
    }

    /// The reference documentation of the `command`, in markdown.
    pub(crate) fn command_markdown(&self, command: &CommandMethod) -> String {
        let mut out = format!("## {}\n\n{}\n", command.name(), command.documentation());

        if !command.params().is_empty() {
            out.push_str("\n### Parameters\n\n");

            for param in command.params() {
                out.push_str(&format!("* `{}`", param.name()));

                if let Some(annotation) = param.annotation_name() {
                    out.push_str(&format!(" ({annotation})"));
                }

                out.push_str(&format!(": {}\n", describe(param)));
            }
        }

        let return_value = command.return_value();

        if !return_value.is_empty() {
            out.push_str("\n### Returns\n\n");

            match (return_value.type_name(), return_value.documentation()) {
                (Some(type_name), Some(documentation)) => {
                    out.push_str(&format!("`{type_name}`: {documentation}\n"))
                }
                (Some(type_name), None) => out.push_str(&format!("`{type_name}`\n")),
                (None, Some(documentation)) => out.push_str(&format!("{documentation}\n")),
                (None, None) => {}
            }
        }

        out
    }
}

fn usage_line(program: &str, command: &CommandMethod) -> String {
    format!(
        "{:INDENT_WIDTH$}{program} {} {}",
        "",
        command.name(),
        command.short_params()
    )
    .trim_end()
    .to_string()
}

fn help_row() -> (String, String) {
    (format!("{FLAG_PREFIX}{HELP_NAME}"), HELP_MESSAGE.to_string())
}

fn option_row(param: &CommandParam) -> (String, String) {
    (format!("{FLAG_PREFIX}{}", param.name()), describe(param))
}

fn describe(param: &CommandParam) -> String {
    match param.default_value() {
        Some(default_value) => format!("{} Default is {default_value}.", param.documentation()),
        None => param.documentation().to_string(),
    }
}
