//! Stable exit codes for the fizzbuzz CLI.

/// The sequence was generated, or the subcommand succeeded.
pub const OK: i32 = 0;
/// The run failed: inverted bounds, a write failure, an invalid configuration.
pub const FAILURE: i32 = 1;
/// The upper bound could not be read from stdin or was not an integer.
pub const INVALID_INPUT: i32 = 2;
