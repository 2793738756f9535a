use crate::command::Command;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::exec::exec;
use crate::help::{HelpFlag, describe_tree, render_help, trigger_help};
use crate::matcher::match_command;
use crate::options::Options;
use crate::shell::LineReader;
use std::io::{BufRead, BufReader, Write};

/// Front controller: matches arguments against the registered commands and
/// either renders help, dispatches a handler, or runs the interactive loop.
///
/// Output goes to stdout, errors (with [`Options::PRINT_ERRORS`]) to stderr
/// and interactive input comes from stdin unless replaced with the setters.
///
/// Example
/// ```
/// use lime::{Cli, Command, MemWriter};
/// use std::io::Write;
///
/// let (out, handle) = MemWriter::with_handle();
/// let mut cli = Cli::new();
/// cli.set_output(out);
/// cli.set_commands([Command::new("repeat").handler(|args, out| {
///     writeln!(out, "[{}]", args.join(", "))?;
///     Ok(())
/// })]);
///
/// cli.run(&["repeat", "blah"]).unwrap();
/// assert_eq!(MemWriter::contents(&handle), "[blah]\n");
/// ```
pub struct Cli {
    config: Config,
    commands: Vec<Command>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    input: Box<dyn LineReader>,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            commands: Vec::new(),
            out: Box::new(std::io::stdout()),
            err: Box::new(std::io::stderr()),
            input: Box::new(BufReader::new(std::io::stdin())),
        }
    }

    /// Applies options one by one.
    ///
    /// Each option must be a single recognized bit; the first one that isn't
    /// stops processing with [`Error::InvalidOption`]. Options applied before
    /// it stay set.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = Options>) -> Result<()> {
        for option in options {
            self.config.options.insert(option)?;
        }
        Ok(())
    }

    /// Appends top-level commands after the ones already registered.
    pub fn set_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.config.prompt = prompt.into();
    }

    pub fn set_exit_word(&mut self, exit_word: impl Into<String>) {
        self.config.exit_word = exit_word.into();
    }

    pub fn set_output(&mut self, out: impl Write + 'static) {
        self.out = Box::new(out);
    }

    pub fn set_err_output(&mut self, err: impl Write + 'static) {
        self.err = Box::new(err);
    }

    /// Reads interactive lines from `input`, echoing the prompt to the output sink.
    pub fn set_input(&mut self, input: impl BufRead + 'static) {
        self.input = Box::new(input);
    }

    /// Reads interactive lines through a custom reader such as [`Editor`](crate::Editor).
    pub fn set_line_editor(&mut self, reader: impl LineReader + 'static) {
        self.input = Box::new(reader);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Runs one invocation.
    ///
    /// With arguments this matches and dispatches once (or renders help when
    /// a help flag appears anywhere). Without arguments it enters interactive
    /// mode, or fails with [`Error::NoInput`] when that is disabled.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        if args.is_empty() {
            if self.config.interactive_enabled() {
                return self.interactive();
            }
            return self.report(Error::NoInput);
        }

        if let Some(flag) = trigger_help(args) {
            return self.show_help(args, flag);
        }

        match self.dispatch(args) {
            Ok(()) => Ok(()),
            Err(err) => self.report(err),
        }
    }

    /// Runs with the process arguments, minus the program name.
    pub fn run_from_env(&mut self) -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        self.run(&args)
    }

    fn dispatch<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        let m = match_command(&self.commands, args, 0)?;
        exec(m.command, m.depth, args, self.out.as_mut())
    }

    fn show_help<S: AsRef<str>>(&mut self, args: &[S], flag: HelpFlag) -> Result<()> {
        let out = self.out.as_mut();
        let rendered = match match_command(&self.commands, args, 0) {
            Ok(m) => render_help(m.command, flag, out),
            Err(_) => {
                if !self.config.name.is_empty() {
                    writeln!(out, "Usage of {}:", self.config.name)?;
                }
                describe_tree(&self.commands, out)
            }
        };

        match rendered {
            Err(err @ (Error::NoHelp | Error::NoUsage)) => {
                tracing::debug!(%err, "rendered fallback help text");
                Ok(())
            }
            other => other,
        }
    }

    fn report(&mut self, err: Error) -> Result<()> {
        if self.config.print_errors() {
            if let Err(io_err) = writeln!(self.err, "{err}") {
                tracing::warn!(%io_err, "failed to write to error sink");
            }
        }
        Err(err)
    }

    fn interactive(&mut self) -> Result<()> {
        if self.config.name.is_empty() {
            writeln!(self.out, "entering interactive mode")?;
        } else {
            writeln!(self.out, "entering interactive mode for {}", self.config.name)?;
        }
        tracing::debug!(exit_word = %self.config.exit_word, "interactive session started");

        while let Some(line) = self.input.next_line(&self.config.prompt, self.out.as_mut())? {
            if line == self.config.exit_word {
                break;
            }

            let args: Vec<&str> = line.split_whitespace().collect();
            let res = match trigger_help(&args) {
                Some(flag) => self.show_help(&args, flag),
                None => self.dispatch(&args),
            };
            match res {
                Ok(()) => {}
                Err(Error::NoMatch) if args.is_empty() => {}
                Err(Error::Io(err)) => return Err(Error::Io(err)),
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }

        tracing::debug!("interactive session finished");
        Ok(())
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
