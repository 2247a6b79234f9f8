use std::io::{self, Write};

use crate::settings::Settings;

/// Print `settings.message` `settings.count` times, numbered from 1.
pub fn display_messages<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    for iteration in 1..=settings.count {
        display_message(out, iteration, &settings.message)?;
    }
    out.flush()
}

pub fn display_message<W: Write>(out: &mut W, iteration: u32, message: &str) -> io::Result<()> {
    writeln!(out, "[{}] {}", iteration, message)
}
