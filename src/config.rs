use crate::options::Options;

pub const DEFAULT_PROMPT: &str = ">";
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// User-facing settings of a [`Cli`](crate::Cli).
///
/// The configuration contains:
/// - `name`: the application name, shown when entering interactive mode and
///   at the top of the whole-application help.
/// - `prompt`: printed (followed by a space) before every interactive read.
/// - `exit_word`: an interactive line equal to it ends the session.
/// - `options`: the accumulated [`Options`] bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub prompt: String,
    pub exit_word: String,
    pub options: Options,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            prompt: DEFAULT_PROMPT.to_string(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            options: Options::empty(),
        }
    }
}

impl Config {
    pub fn interactive_enabled(&self) -> bool {
        !self.options.contains(Options::NO_INTERACTIVE_MODE)
    }

    pub fn print_errors(&self) -> bool {
        self.options.contains(Options::PRINT_ERRORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, ">");
        assert_eq!(config.exit_word, "exit");
        assert!(config.name.is_empty());
        assert!(config.interactive_enabled());
        assert!(!config.print_errors());
    }

    #[test]
    fn test_config_reads_options() {
        let config = Config {
            options: Options::NO_INTERACTIVE_MODE | Options::PRINT_ERRORS,
            ..Config::default()
        };
        assert!(!config.interactive_enabled());
        assert!(config.print_errors());
    }
}
