use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::fmt;
use std::io::Write;

/// Callback run when a command is dispatched.
///
/// It receives the arguments left over after the command keywords and the
/// output sink configured on the [`Cli`](crate::Cli). Any error it returns is
/// handed back to the caller of [`Cli::run`](crate::Cli::run) as-is.
pub type Handler = Box<dyn Fn(&[String], &mut dyn Write) -> Result<()> + Send + Sync>;

/// One (example, explanation) pair shown in a command's help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// The example input, e.g. `mycli repeat the quick brown fox`.
    pub example: String,
    /// What the example does.
    pub explanation: String,
}

/// A node of the command tree.
///
/// A command is selected by its keyword among its siblings. It may hold
/// nested commands, a handler, or both. A command with an empty (or
/// whitespace-only) keyword is a placeholder: it never matches and is left
/// out of the help listing together with everything below it.
///
/// Example
/// ```
/// use lime::Command;
/// use std::io::Write;
///
/// let tell = Command::new("tell")
///     .subcommand(
///         Command::new("truth")
///             .description("Makes a preset statement which is factually true.")
///             .handler(|_, out| {
///                 writeln!(out, "The author of this cli likes to eat apples.")?;
///                 Ok(())
///             }),
///     );
/// assert_eq!(tell.get_subcommands().len(), 1);
/// ```
pub struct Command {
    keyword: String,
    description: String,
    help: String,
    usage: Vec<Usage>,
    commands: Vec<Command>,
    handler: Option<Handler>,
}

impl Command {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            description: String::new(),
            help: String::new(),
            usage: Vec::new(),
            commands: Vec::new(),
            handler: None,
        }
    }

    /// Short one-line text used in listings and in the command's own help.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Longer text shown only in this command's help.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Appends a usage entry.
    pub fn usage(mut self, example: impl Into<String>, explanation: impl Into<String>) -> Self {
        self.usage.push(Usage {
            example: example.into(),
            explanation: explanation.into(),
        });
        self
    }

    /// Appends a nested command. Registration order is match order.
    pub fn subcommand(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn subcommands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands.extend(commands);
        self
    }

    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[String], &mut dyn Write) -> Result<()> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Uses an [`argh`]-parsed type as the handler.
    ///
    /// The trailing arguments are parsed with the keyword as program name.
    /// Whatever argh prints on early exit (its own help or a parse error) goes
    /// to the output sink; a parse error also fails the invocation.
    pub fn args_handler<T: ArgsCommand + 'static>(self) -> Self {
        let keyword = self.keyword.trim().to_string();
        self.handler(move |args, out| {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            match T::from_args(&[keyword.as_str()], &args) {
                Ok(cmd) => cmd.run(out),
                Err(EarlyExit { output, status }) => {
                    out.write_all(output.as_bytes())?;
                    status.map_err(|()| anyhow::anyhow!("{keyword}: invalid arguments"))
                }
            }
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_help(&self) -> &str {
        &self.help
    }

    pub fn get_usage(&self) -> &[Usage] {
        &self.usage
    }

    pub fn get_subcommands(&self) -> &[Command] {
        &self.commands
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn is_placeholder(&self) -> bool {
        self.keyword.trim().is_empty()
    }

    pub(crate) fn get_handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("keyword", &self.keyword)
            .field("description", &self.description)
            .field("help", &self.help)
            .field("usage", &self.usage)
            .field("commands", &self.commands)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// A handler whose arguments are declared with `#[derive(FromArgs)]`.
///
/// Attach it to a command with [`Command::args_handler`].
pub trait ArgsCommand: FromArgs + Sized {
    /// Executes the command with parsed arguments.
    fn run(self, out: &mut dyn Write) -> Result<()>;
}
