//! A small library for command-line applications built from a tree of
//! nested commands.
//!
//! The host registers [`Command`]s (each with a keyword, descriptive text,
//! usage examples, nested commands and an optional handler) on a [`Cli`] and
//! hands it the arguments. The [`Cli`] resolves the arguments to the deepest
//! matching command, then either renders help (when `-h`, `--help` or
//! `--usage` appears anywhere in the arguments) or runs the command's handler
//! with the arguments left after the keywords. Started without arguments it
//! runs an interactive loop that does the same for every line read, until
//! the exit word.
//!
//! The matching, dispatch and help building blocks are exposed on their own
//! in [`matcher`], [`exec`] and [`help`].

mod cli;
pub mod command;
pub mod config;
mod error;
pub mod exec;
pub mod help;
pub mod io;
pub mod matcher;
pub mod options;
pub mod shell;

pub use cli::Cli;
pub use command::{ArgsCommand, Command, Handler, Usage};
pub use config::Config;
pub use error::{Error, Result};
pub use help::HelpFlag;
pub use io::MemWriter;
pub use matcher::{Match, match_command};
pub use options::Options;
pub use shell::{Editor, LineReader};
