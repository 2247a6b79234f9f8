//! Print a message a given number of times, numbering each line.
//!
//! ```text
//! $ repeat -c 3 hello
//! [1] hello
//! [2] hello
//! [3] hello
//! ```
//!
//! A run is a single pass through the stages in [`pipeline`]: the command line
//! is parsed by [`args`], validated into [`settings::Settings`], and then either
//! printed by [`display`] or reported through [`usage`].

pub mod args;
pub mod display;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod usage;
