//! Validation of the raw arguments into typed settings.

use tracing::debug;

use crate::args::Arguments;
use crate::error::UsageError;

const DEFAULT_COUNT: u32 = 1;

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number of lines to print, at least 1.
    pub count: u32,
    /// Non-empty message.
    pub message: String,
}

impl Settings {
    /// Validate `arguments`. Count problems are reported before message problems.
    pub fn from_arguments(arguments: &Arguments) -> Result<Self, UsageError> {
        let count = match arguments.count.as_deref() {
            None => DEFAULT_COUNT,
            Some(raw) => match parse_count(raw) {
                Some(0) => return Err(UsageError::ZeroCount),
                Some(count) => count,
                None => return Err(UsageError::InvalidCount),
            },
        };

        let message = match arguments.message.as_deref() {
            None => return Err(UsageError::MessageMissing),
            Some("") => return Err(UsageError::EmptyMessage),
            Some(message) => message.to_string(),
        };

        let settings = Settings { count, message };
        debug!(?settings, "validated settings");
        Ok(settings)
    }
}

/// Parse an unsigned count with C-style radix prefixes: `0x`/`0X` for hex,
/// a leading `0` for octal, decimal otherwise.
///
/// Signs, whitespace, trailing characters and values above `u32::MAX` are
/// rejected.
pub fn parse_count(raw: &str) -> Option<u32> {
    let (digits, radix) = if let Some(hex) = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
    {
        (hex, 16)
    } else if raw.len() > 1 && raw.starts_with('0') {
        (&raw[1..], 8)
    } else {
        (raw, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
