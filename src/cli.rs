//! Command-line interface definition.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config_file::RulesConfig;
use crate::types::{FormatStyle, StepKind};

/// FizzBuzz - label a range of integers with configurable rules
///
/// Reads the upper bound from standard input and streams one label per
/// visited integer to standard output.
#[derive(Parser)]
#[command(name = "fizzbuzz")]
#[command(about = "Label a range of integers with configurable divisibility rules")]
#[command(version)]
pub struct Cli {
    /// Load rules and defaults from a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lower bound of the range (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    pub first: Option<i64>,

    /// Step function used to advance through the range
    #[arg(long)]
    pub step: Option<StepKind>,

    /// Step size for the fixed step
    #[arg(long)]
    pub step_size: Option<i64>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<FormatStyle>,

    /// Abort if more than this many values would be visited
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut RulesConfig) {
        if let Some(first) = self.first {
            config.first = first;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(size) = self.step_size {
            config.step_size = size;
            // A bare --step-size implies the fixed step
            if self.step.is_none() {
                config.step = StepKind::Fixed;
            }
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(limit) = self.max_iterations {
            config.max_iterations = Some(limit);
        }
    }
}
