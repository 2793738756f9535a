use argh::FromArgs;
use lime::{ArgsCommand, Cli, Command, Editor, Options};
use std::io::Write;

#[derive(FromArgs)]
/// Greet someone by name.
struct Greet {
    #[argh(switch, short = 's')]
    /// greet loudly.
    shout: bool,

    #[argh(positional)]
    /// who to greet.
    name: String,
}

impl ArgsCommand for Greet {
    fn run(self, out: &mut dyn Write) -> anyhow::Result<()> {
        let greeting = format!("Hello, {}!", self.name);
        if self.shout {
            writeln!(out, "{}", greeting.to_uppercase())?;
        } else {
            writeln!(out, "{greeting}")?;
        }
        Ok(())
    }
}

fn commands() -> Vec<Command> {
    vec![
        Command::new("tell").subcommands([
            Command::new("lie")
                .description("Makes a preset statement which is factually untrue.")
                .handler(|_, out| {
                    writeln!(out, "The author of this cli likes to eat oranges.")?;
                    Ok(())
                }),
            Command::new("truth")
                .description("Makes a preset statement which is factually true.")
                .handler(|_, out| {
                    writeln!(out, "The author of this cli likes to eat apples.")?;
                    Ok(())
                }),
        ]),
        Command::new("repeat")
            .description("Repeats all the words after the command.")
            .usage(
                "lime-demo repeat the quick brown fox",
                "outputs \"[the, quick, brown, fox]\"",
            )
            .usage(
                "lime-demo repeat",
                "returns an error: \"there were no words to repeat\"",
            )
            .handler(|args, out| {
                if args.is_empty() {
                    anyhow::bail!("there were no words to repeat");
                }
                writeln!(out, "[{}]", args.join(", "))?;
                Ok(())
            }),
        Command::new("greet")
            .description("Greets someone by name.")
            .help("Pass --shout (or -s) to greet loudly.")
            .usage("lime-demo greet Ada", "prints \"Hello, Ada!\"")
            .args_handler::<Greet>(),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let mut cli = Cli::new();
    cli.set_name("lime-demo");
    cli.set_commands(commands());
    if let Err(err) = cli.set_options([Options::PRINT_ERRORS]) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }

    match Editor::new() {
        Ok(editor) => cli.set_line_editor(editor),
        Err(err) => tracing::warn!(%err, "line editor unavailable, reading plain stdin"),
    }

    if cli.run_from_env().is_err() {
        std::process::exit(1);
    }
}
