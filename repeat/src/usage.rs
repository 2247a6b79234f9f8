//! The usage block written to stderr on `-h` and on every usage error.

use std::io::{self, Write};

/// Write the optional diagnostic line, then the usage block.
pub fn report_usage<W: Write>(
    err: &mut W,
    program_name: &str,
    exit_message: Option<&str>,
) -> io::Result<()> {
    if let Some(message) = exit_message {
        writeln!(err, "{}", message)?;
    }

    writeln!(err, "Usage: {} [-h] [-c <count>] <message>", program_name)?;
    writeln!(err, "Options:")?;
    writeln!(err, "  -h  Display this help message")?;
    writeln!(err, "  -c  The number of times to display the message")?;
    err.flush()
}
