use crate::command::Command;
use crate::error::{Error, Result};
use crate::matcher::trailing;
use std::io::Write;

/// Runs the handler of a matched command.
///
/// `args` is the full token sequence the command was matched with; the
/// handler gets `args[depth + 1..]`. A failing handler's error comes back
/// unchanged inside [`Error::Handler`].
pub fn exec<S: AsRef<str>>(
    command: &Command,
    depth: usize,
    args: &[S],
    out: &mut dyn Write,
) -> Result<()> {
    let Some(handler) = command.get_handler() else {
        return Err(Error::NoFunc);
    };

    let args: Vec<String> = trailing(depth, args)
        .iter()
        .map(|a| a.as_ref().to_string())
        .collect();
    tracing::debug!(keyword = command.keyword(), ?args, "dispatching command");

    handler(&args, out).map_err(Error::Handler)
}
