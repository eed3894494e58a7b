//! Type-safe option enums shared by the CLI and the configuration file.
//!
//! These replace stringly-typed settings with enums that parse from and
//! display as the same lowercase names in both places.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Built-in step function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StepKind {
    /// Visit every integer
    #[default]
    Unit,
    /// Advance by a fixed positive size
    Fixed,
    /// Jump to the next Fibonacci number
    Fibonacci,
}

/// Built-in output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormatStyle {
    /// One label per line
    #[default]
    Lines,
    /// Comma separated, closed by a period
    List,
}
