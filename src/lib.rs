//! FizzBuzz Library
//!
//! A small rule-evaluation and formatting engine. Given a range, a step
//! function, an ordered rule list and a formatter, [`engine::run`] labels
//! every visited integer, streams the formatted labels to a sink and returns
//! the labels as a sequence.

pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod input;
pub mod logging;
pub mod rules;
pub mod step;
pub mod types;

// Re-export main types for convenience
pub use config_file::RulesConfig;
pub use engine::{Engine, run};
pub use error::{ConfigError, InputError, SequenceError};
pub use format::{BuiltinFormatter, Formatter, LineFormatter, ListFormatter};
pub use input::read_bound;
pub use rules::{DivisibleRule, Rule, RuleSet, match_rule};
pub use step::{BuiltinStep, FibonacciStep, FixedStep, Step, UnitStep};
pub use types::{FormatStyle, StepKind};
