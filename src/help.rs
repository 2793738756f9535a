use crate::command::Command;
use crate::error::{Error, Result};
use std::io::Write;

pub(crate) const NO_HELP_TEXT: &str = "No information for this command";
pub(crate) const NO_USAGE_TEXT: &str = "No usage information for this command";

/// Which help flag triggered rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpFlag {
    /// `-h` or `--help`
    Help,
    /// `--usage`: usage entries are shown instead of the help text.
    Usage,
}

impl HelpFlag {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "-h" | "--help" => Some(Self::Help),
            "--usage" => Some(Self::Usage),
            _ => None,
        }
    }
}

/// Returns the first help flag found anywhere in `args`.
pub fn trigger_help<S: AsRef<str>>(args: &[S]) -> Option<HelpFlag> {
    args.iter().find_map(|a| HelpFlag::parse(a.as_ref()))
}

/// Writes the help block of a single command.
///
/// With [`HelpFlag::Help`] this is the description, the help text, then
/// every usage entry. With [`HelpFlag::Usage`] the help text is skipped.
/// When there is nothing to show, a fixed fallback line is written and
/// [`Error::NoHelp`] (or [`Error::NoUsage`]) is returned.
pub fn render_help(command: &Command, flag: HelpFlag, out: &mut dyn Write) -> Result<()> {
    let description = command.get_description();
    let help = command.get_help();
    let usage = command.get_usage();

    match flag {
        HelpFlag::Help if description.is_empty() && help.is_empty() && usage.is_empty() => {
            writeln!(out, "{NO_HELP_TEXT}")?;
            return Err(Error::NoHelp);
        }
        HelpFlag::Usage if usage.is_empty() => {
            writeln!(out, "{NO_USAGE_TEXT}")?;
            return Err(Error::NoUsage);
        }
        _ => {}
    }

    if !description.is_empty() {
        writeln!(out, "{description}")?;
    }
    if flag == HelpFlag::Help && !help.is_empty() {
        writeln!(out, "{help}")?;
    }
    for entry in usage {
        writeln!(out, " > {}", entry.example)?;
        writeln!(out, "   {}", entry.explanation)?;
    }
    Ok(())
}

/// Lists every reachable command that has a description.
///
/// Each listed command takes two lines: its keyword path from the top level,
/// then the description. A placeholder command cuts off its whole branch.
pub fn describe_tree(commands: &[Command], out: &mut dyn Write) -> Result<()> {
    let mut path = Vec::new();
    for command in commands {
        describe(command, &mut path, out)?;
    }
    Ok(())
}

fn describe<'a>(command: &'a Command, path: &mut Vec<&'a str>, out: &mut dyn Write) -> Result<()> {
    let keyword = command.keyword().trim();
    if keyword.is_empty() {
        return Ok(());
    }

    path.push(keyword);
    let description = command.get_description();
    if !description.is_empty() {
        writeln!(out, "{}", path.join(" "))?;
        writeln!(out, " -  {description}")?;
    }
    for child in command.get_subcommands() {
        describe(child, path, out)?;
    }
    path.pop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_test() -> Command {
        Command::new("test")
            .description("A test")
            .help("Used to do testing")
            .usage("myCli nested test", "Does nothing")
    }

    fn render(command: &Command, flag: HelpFlag) -> (Result<()>, String) {
        let mut out = Vec::new();
        let res = render_help(command, flag, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_trigger_help_anywhere() {
        assert_eq!(trigger_help(&["nested", "test", "--help"]), Some(HelpFlag::Help));
        assert_eq!(trigger_help(&["-h", "nested"]), Some(HelpFlag::Help));
        assert_eq!(trigger_help(&["a", "--usage", "--help"]), Some(HelpFlag::Usage));
        assert_eq!(trigger_help(&["repeat", "help", "-help"]), None);
        let empty: [String; 0] = [];
        assert_eq!(trigger_help(&empty), None);
    }

    #[test]
    fn test_render_full_help() {
        let (res, s) = render(&nested_test(), HelpFlag::Help);
        assert!(res.is_ok());
        assert_eq!(
            s,
            "A test\nUsed to do testing\n > myCli nested test\n   Does nothing\n"
        );
    }

    #[test]
    fn test_render_usage_emphasis() {
        let (res, s) = render(&nested_test(), HelpFlag::Usage);
        assert!(res.is_ok());
        assert_eq!(s, "A test\n > myCli nested test\n   Does nothing\n");
    }

    #[test]
    fn test_render_without_information() {
        let (res, s) = render(&Command::new("noHelp"), HelpFlag::Help);
        assert!(matches!(res, Err(Error::NoHelp)));
        assert_eq!(s, "No information for this command\n");

        let (res, s) = render(&Command::new("noUsage").help("some help"), HelpFlag::Usage);
        assert!(matches!(res, Err(Error::NoUsage)));
        assert_eq!(s, "No usage information for this command\n");
    }

    #[test]
    fn test_describe_tree_paths() {
        let commands = vec![
            Command::new("nested").subcommand(nested_test()),
            Command::new("repeat")
                .description("Repeats all the words after the command.")
                .subcommand(Command::new("loud").description("Repeats louder")),
        ];
        let mut out = Vec::new();
        describe_tree(&commands, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "nested test\n -  A test\n\
             repeat\n -  Repeats all the words after the command.\n\
             repeat loud\n -  Repeats louder\n"
        );
    }

    #[test]
    fn test_describe_tree_skips_placeholder_branch() {
        let commands = vec![
            Command::new(" ")
                .description("root description")
                .subcommand(Command::new("hidden").description("never listed")),
            Command::new("shown").description("listed"),
        ];
        let mut out = Vec::new();
        describe_tree(&commands, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "shown\n -  listed\n");
    }
}
