use crate::command::Command;
use crate::error::{Error, Result};

/// The command selected for a token sequence.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub command: &'a Command,
    /// Number of descents made below the top level to reach `command`.
    /// `depth + 1` keyword tokens were consumed.
    pub depth: usize,
}

impl Match<'_> {
    /// Tokens left over for the handler once the keywords are sliced off.
    pub fn trailing<'t, S>(&self, args: &'t [S]) -> &'t [S] {
        trailing(self.depth, args)
    }
}

pub(crate) fn trailing<S>(depth: usize, args: &[S]) -> &[S] {
    args.get(depth + 1..).unwrap_or(&[])
}

/// Finds the command addressed by `args` among `commands`.
///
/// The first sibling whose keyword equals `args[0]` wins. Matching descends
/// into that sibling's children only when it has children and there is
/// another token to select one with; otherwise the sibling itself is the
/// match. There is no backtracking: if the next token doesn't select a child,
/// matching fails even though the parent could have taken it as an argument.
pub fn match_command<'a, S: AsRef<str>>(
    commands: &'a [Command],
    args: &[S],
    depth: usize,
) -> Result<Match<'a>> {
    let Some(token) = args.first() else {
        return Err(Error::NoMatch);
    };
    let token = token.as_ref();

    let Some(command) = commands
        .iter()
        .find(|c| !c.is_placeholder() && c.keyword() == token)
    else {
        tracing::trace!(token, depth, "no keyword matched");
        return Err(Error::NoMatch);
    };

    if args.len() > 1 && !command.get_subcommands().is_empty() {
        return match_command(command.get_subcommands(), &args[1..], depth + 1);
    }

    tracing::debug!(keyword = command.keyword(), depth, "matched command");
    Ok(Match { command, depth })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Command> {
        vec![
            Command::new("repeat"),
            Command::new("nested").subcommands([
                Command::new("test"),
                Command::new("deeper").subcommand(Command::new("leaf")),
            ]),
            Command::new("repeat").description("shadowed"),
            Command::new(""),
        ]
    }

    #[test]
    fn test_empty_args_never_match() {
        let commands = tree();
        let empty: [&str; 0] = [];
        assert!(matches!(
            match_command(&commands, &empty, 0),
            Err(Error::NoMatch)
        ));
        assert!(matches!(match_command(&[], &empty, 0), Err(Error::NoMatch)));
    }

    #[test]
    fn test_top_level_match() {
        let commands = tree();
        let m = match_command(&commands, &["repeat", "blah"], 0).unwrap();
        assert_eq!(m.command.keyword(), "repeat");
        assert_eq!(m.depth, 0);
        assert_eq!(m.trailing(&["repeat", "blah"]), ["blah"]);
    }

    #[test]
    fn test_first_registered_sibling_wins() {
        let commands = tree();
        let m = match_command(&commands, &["repeat"], 0).unwrap();
        assert_eq!(m.command.get_description(), "");
    }

    #[test]
    fn test_nested_match_depth() {
        let commands = tree();
        let args = ["nested", "deeper", "leaf", "a", "b"];
        let m = match_command(&commands, &args, 0).unwrap();
        assert_eq!(m.command.keyword(), "leaf");
        assert_eq!(m.depth, 2);
        assert_eq!(m.trailing(&args), ["a", "b"]);
    }

    #[test]
    fn test_parent_matches_when_no_token_left() {
        let commands = tree();
        let m = match_command(&commands, &["nested"], 0).unwrap();
        assert_eq!(m.command.keyword(), "nested");
        assert_eq!(m.depth, 0);

        let m = match_command(&commands, &["nested", "deeper"], 0).unwrap();
        assert_eq!(m.command.keyword(), "deeper");
        assert_eq!(m.depth, 1);
    }

    #[test]
    fn test_no_backtracking_into_parent_args() {
        let commands = tree();
        assert!(matches!(
            match_command(&commands, &["nested", "unknown"], 0),
            Err(Error::NoMatch)
        ));
    }

    #[test]
    fn test_unknown_keyword() {
        let commands = tree();
        assert!(matches!(
            match_command(&commands, &["invalid"], 0),
            Err(Error::NoMatch)
        ));
        assert!(matches!(
            match_command(&commands, &[""], 0),
            Err(Error::NoMatch)
        ));
    }

    #[test]
    fn test_matching_is_repeatable() {
        let commands = tree();
        let args = ["nested", "test", "x"];
        let first = match_command(&commands, &args, 0).unwrap();
        let second = match_command(&commands, &args, 0).unwrap();
        assert!(std::ptr::eq(first.command, second.command));
        assert_eq!(first.depth, second.depth);
    }

    #[test]
    fn test_trailing_out_of_range_is_empty() {
        let args = ["a"];
        assert!(trailing(3, &args).is_empty());
    }
}
