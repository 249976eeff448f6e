use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cup", version, about = "A simple command-line note manager.")]
pub struct Cli {
    /// Notebook file to use (overrides CUP_NOTEBOOK)
    #[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Creates a new note
    Add {
        /// Note's content (prompted for when omitted)
        text: Option<String>,
        /// Note's title
        #[arg(short = 't', num_args = 1..)]
        title: Vec<String>,
    },
    /// Reads a note
    Cat {
        /// Note's ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Edits a note
    Ed {
        /// Note's ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Removes a note
    Rm {
        /// Note's ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl Command {
    /// `-t` words joined with single spaces; no words means no title.
    pub fn joined_title(words: &[String]) -> Option<String> {
        if words.is_empty() { None } else { Some(words.join(" ")) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cup").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_arguments_lists() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_add_with_multi_word_title() {
        let cli = parse(&["add", "buy milk", "-t", "Shopping", "list"]);
        let Some(Command::Add { text, title }) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(text.as_deref(), Some("buy milk"));
        assert_eq!(
            Command::joined_title(&title).as_deref(),
            Some("Shopping list")
        );
    }

    #[test]
    fn test_add_without_text() {
        let cli = parse(&["add"]);
        assert_eq!(
            cli.command,
            Some(Command::Add { text: None, title: vec![] })
        );
        assert_eq!(Command::joined_title(&[]), None);
    }

    #[test]
    fn test_id_commands_and_file_flag() {
        let cli = parse(&["cat", "2", "--file", "/tmp/n.json"]);
        assert_eq!(cli.command, Some(Command::Cat { id: 2 }));
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/n.json")));
        assert_eq!(parse(&["ed", "1"]).command, Some(Command::Ed { id: 1 }));
        assert_eq!(parse(&["rm", "3"]).command, Some(Command::Rm { id: 3 }));
    }

    #[test]
    fn test_negative_id_is_parsed() {
        assert_eq!(parse(&["cat", "-1"]).command, Some(Command::Cat { id: -1 }));
        assert_eq!(parse(&["rm", "0"]).command, Some(Command::Rm { id: 0 }));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["cup", "cat", "two"]).is_err());
    }
}
