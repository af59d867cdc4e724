use fncli::{Annotation, CommandError, CommandMethod, CommandModule, CommandParam};

fn main() {
    CommandModule::new("greeter")
        .with_documentation("Say hello.")
        .with_command(
            CommandMethod::new("greet", |arguments| {
                let name: String = arguments.require("name")?;
                let times: i64 = arguments.require("times")?;

                if times < 0 {
                    return Err(CommandError::new("Cannot greet a negative number of times."));
                }

                let greetings: Vec<String> = (0..times).map(|_| format!("Hello, {name}!")).collect();
                Ok(Some(greetings.join("\n")))
            })
            .with_docstring(
                "Greet someone.
                :param name: Who to greet.
                :param times: How many times to greet them.",
            )
            .with_param(
                CommandParam::new("name", 0)
                    .expect("valid parameter")
                    .with_annotation(Annotation::Str),
            )
            .with_param(
                CommandParam::new("times", 1)
                    .expect("valid parameter")
                    .with_annotation(Annotation::Int)
                    .with_default(1),
            ),
        )
        .with_command(
            CommandMethod::new("wave", |_| Ok(Some("o/".to_string())))
                .with_documentation("Wave at everyone."),
        )
        .build()
        .parse();
}
