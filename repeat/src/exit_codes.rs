//! Process exit codes.

/// Messages were printed, or `-h` was requested.
pub const SUCCESS: i32 = 0;
/// A usage error was reported, or writing to stdout/stderr failed.
pub const FAILURE: i32 = 1;
