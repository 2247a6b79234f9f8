//! Command-line parsing.
//!
//! `clap` does the tokenizing; its errors are mapped onto [`UsageError`] so the
//! diagnostics match the usage block printed by [`crate::usage`].

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::UsageError;

const DEFAULT_PROGRAM_NAME: &str = "repeat";

#[derive(Parser, Debug)]
#[command(name = "repeat", disable_help_flag = true)]
struct Cli {
    /// Display this help message
    #[arg(short = 'h', action = ArgAction::SetTrue, overrides_with = "help")]
    help: bool,

    /// The number of times to display the message
    #[arg(
        short = 'c',
        value_name = "count",
        allow_hyphen_values = true,
        overrides_with = "count"
    )]
    count: Option<String>,

    /// The message to display
    #[arg(value_name = "message")]
    messages: Vec<String>,
}

/// Raw values taken from the command line, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub program_name: String,
    pub count: Option<String>,
    pub message: Option<String>,
    /// `-h` was given.
    pub help: bool,
}

/// Name the usage block refers to: `argv[0]`, or `repeat` when absent.
pub fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Parse the full argument vector, program name included.
///
/// With `-h` the positional count is not checked and `message` stays `None`.
pub fn parse_arguments(argv: &[OsString]) -> Result<Arguments, UsageError> {
    let cli = Cli::try_parse_from(argv).map_err(|err| usage_error(&err))?;

    let mut arguments = Arguments {
        program_name: program_name(argv),
        count: cli.count,
        message: None,
        help: cli.help,
    };

    if !arguments.help {
        let mut messages = cli.messages.into_iter();
        arguments.message = match (messages.next(), messages.next()) {
            (None, _) => return Err(UsageError::MessageRequired),
            (Some(_), Some(_)) => return Err(UsageError::TooManyArguments),
            (Some(message), None) => Some(message),
        };
    }

    debug!(?arguments, "parsed arguments");
    Ok(arguments)
}

fn usage_error(err: &clap::Error) -> UsageError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    };
    debug!(kind = ?err.kind(), ?invalid_arg, "argument parsing failed");

    match (err.kind(), invalid_arg) {
        (ErrorKind::UnknownArgument, Some(arg)) => UsageError::UnknownOption(arg.to_string()),
        (ErrorKind::InvalidUtf8, _) => UsageError::Unparsable,
        // "-c <count>" with nothing after it
        (_, Some(arg)) if arg.starts_with("-c") => UsageError::MissingOptionValue('c'),
        _ => UsageError::Unparsable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<OsString> {
        tokens.iter().map(OsString::from).collect()
    }

    fn parse(tokens: &[&str]) -> Result<Arguments, UsageError> {
        parse_arguments(&argv(tokens))
    }

    #[test]
    fn count_and_message() {
        let arguments = parse(&["repeat", "-c", "3", "hello"]).unwrap();
        assert_eq!(arguments.program_name, "repeat");
        assert_eq!(arguments.count.as_deref(), Some("3"));
        assert_eq!(arguments.message.as_deref(), Some("hello"));
        assert!(!arguments.help);
    }

    #[test]
    fn message_only_leaves_count_unset() {
        let arguments = parse(&["repeat", "hello"]).unwrap();
        assert_eq!(arguments.count, None);
        assert_eq!(arguments.message.as_deref(), Some("hello"));
    }

    #[test]
    fn attached_count_value() {
        let arguments = parse(&["repeat", "-c3", "hello"]).unwrap();
        assert_eq!(arguments.count.as_deref(), Some("3"));
    }

    #[test]
    fn count_value_may_look_like_a_flag() {
        let arguments = parse(&["repeat", "-c", "-1", "hello"]).unwrap();
        assert_eq!(arguments.count.as_deref(), Some("-1"));
    }

    #[test]
    fn options_after_message() {
        let arguments = parse(&["repeat", "hello", "-c", "2"]).unwrap();
        assert_eq!(arguments.count.as_deref(), Some("2"));
        assert_eq!(arguments.message.as_deref(), Some("hello"));
    }

    #[test]
    fn last_count_wins() {
        let arguments = parse(&["repeat", "-c", "2", "-c", "5", "hello"]).unwrap();
        assert_eq!(arguments.count.as_deref(), Some("5"));
    }

    #[test]
    fn double_dash_ends_options() {
        let arguments = parse(&["repeat", "--", "-x"]).unwrap();
        assert_eq!(arguments.message.as_deref(), Some("-x"));
    }

    #[test]
    fn empty_message_is_accepted_by_the_parser() {
        let arguments = parse(&["repeat", ""]).unwrap();
        assert_eq!(arguments.message.as_deref(), Some(""));
    }

    #[test]
    fn help_skips_positional_check() {
        let arguments = parse(&["repeat", "-h"]).unwrap();
        assert!(arguments.help);
        assert_eq!(arguments.message, None);

        let arguments = parse(&["repeat", "-h", "-c", "2", "hello"]).unwrap();
        assert!(arguments.help);
    }

    #[test]
    fn unknown_option() {
        assert_eq!(
            parse(&["repeat", "-x", "hello"]),
            Err(UsageError::UnknownOption("-x".to_string()))
        );
    }

    #[test]
    fn count_without_value() {
        assert_eq!(
            parse(&["repeat", "-c"]),
            Err(UsageError::MissingOptionValue('c'))
        );
    }

    #[test]
    fn message_required() {
        assert_eq!(parse(&["repeat"]), Err(UsageError::MessageRequired));
        assert_eq!(
            parse(&["repeat", "-c", "2"]),
            Err(UsageError::MessageRequired)
        );
    }

    #[test]
    fn too_many_arguments() {
        assert_eq!(
            parse(&["repeat", "hello", "world"]),
            Err(UsageError::TooManyArguments)
        );
    }

    #[test]
    fn program_name_defaults_when_argv_is_empty() {
        assert_eq!(program_name(&[]), "repeat");
        assert_eq!(program_name(&argv(&["./bin/repeat"])), "./bin/repeat");
    }
}
