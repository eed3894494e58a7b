//! Input handling module
//!
//! Reads the upper bound of a run from a text source such as stdin.

use std::io::Read;

use tracing::debug;

use crate::error::InputError;

/// Read all of `reader` and parse it as a single integer.
///
/// Surrounding whitespace is ignored, so `"15\n"` from a shell pipe parses
/// as 15. Anything else around the number is an error.
pub fn read_bound<R: Read>(mut reader: R) -> Result<i64, InputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_bound(&raw)
}

/// Parse a bound from already-read text.
pub fn parse_bound(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    let value = trimmed.parse::<i64>().map_err(|source| InputError::Parse {
        input: trimmed.to_string(),
        source,
    })?;
    debug!(value, "parsed bound from input");
    Ok(value)
}
