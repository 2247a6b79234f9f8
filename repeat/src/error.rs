//! Usage errors recorded while parsing and validating the command line.

use std::fmt;

/// A malformed invocation or invalid setting.
///
/// The `Display` text is the one-line diagnostic printed above the usage block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A flag other than `-c` or `-h`.
    UnknownOption(String),
    /// A flag that takes a value was given none.
    MissingOptionValue(char),
    /// No positional message after the options.
    MessageRequired,
    /// More than one positional argument.
    TooManyArguments,
    /// The parser failed for a reason not listed above.
    Unparsable,
    /// The count is not an unsigned integer.
    InvalidCount,
    /// The count parsed to zero.
    ZeroCount,
    /// No message reached validation.
    MessageMissing,
    /// The message is the empty string.
    EmptyMessage,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::UnknownOption(option) => write!(f, "Unknown option '{}'.", option),
            UsageError::MissingOptionValue(flag) => {
                write!(f, "Option '-{}' requires a value.", flag)
            }
            UsageError::MessageRequired => f.write_str("The message is required"),
            UsageError::TooManyArguments => f.write_str("Too many arguments."),
            UsageError::Unparsable => f.write_str("Unknown error parsing arguments."),
            UsageError::InvalidCount => f.write_str("count must be a positive integer"),
            UsageError::ZeroCount => f.write_str("count must be greater than 0"),
            UsageError::MessageMissing => f.write_str("<message> must be passed."),
            UsageError::EmptyMessage => f.write_str("<message> cannot be empty."),
        }
    }
}

impl std::error::Error for UsageError {}
