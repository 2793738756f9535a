/// Everything that can go wrong while matching, dispatching or rendering help.
///
/// Handler failures are carried in [`Error::Handler`] untouched, so their
/// `Display` output is exactly what the handler produced.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No command keyword matched the current token.
    #[error("no matching command found")]
    NoMatch,
    /// A command matched but carries no handler to invoke.
    #[error("no function for command")]
    NoFunc,
    /// There were no tokens to work with and interactive mode is disabled.
    #[error("no command given")]
    NoInput,
    /// Help was requested for a command without any describable text.
    #[error("no help provided for this command")]
    NoHelp,
    /// Usage was requested for a command without usage entries.
    #[error("no usage provided for this command")]
    NoUsage,
    /// An option value was not a single recognized bit.
    #[error("an invalid option value was given")]
    InvalidOption,
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
