//! Configuration file handling for saving and loading rule sets.
//!
//! A configuration describes one run apart from its upper bound: the ordered
//! rules, the lower bound, the step and the output format. It is stored as
//! JSON; every field is optional and missing fields fall back to the classic
//! FizzBuzz setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::Engine;
use crate::error::ConfigError;
use crate::format::BuiltinFormatter;
use crate::rules::{DivisibleRule, RuleSet};
use crate::step::BuiltinStep;
use crate::types::{FormatStyle, StepKind};

/// Run configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules in priority order
    pub rules: Vec<DivisibleRule>,

    /// Lower bound of the run
    pub first: i64,

    pub step: StepKind,

    /// Only used when `step` is `fixed`
    pub step_size: i64,

    pub format: FormatStyle,

    /// Abort runs that visit more values than this
    pub max_iterations: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                DivisibleRule::new(&[3, 5], "FizzBuzz"),
                DivisibleRule::new(&[3], "Fizz"),
                DivisibleRule::new(&[5], "Buzz"),
            ],
            first: 1,
            step: StepKind::Unit,
            step_size: 1,
            format: FormatStyle::Lines,
            max_iterations: None,
        }
    }
}

impl RulesConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;
        json.push('\n');

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.label.is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if rule.divisors.is_empty() {
                return Err(ConfigError::NoDivisors {
                    index,
                    label: rule.label.clone(),
                });
            }
            if rule.divisors.contains(&0) {
                return Err(ConfigError::ZeroDivisor {
                    index,
                    label: rule.label.clone(),
                });
            }
        }

        if self.step == StepKind::Fixed && self.step_size <= 0 {
            return Err(ConfigError::StepSize(self.step_size));
        }

        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationLimit);
        }

        Ok(())
    }

    /// Build the rule set in priority order
    pub fn rule_set(&self) -> RuleSet {
        self.rules.iter().cloned().collect()
    }

    pub fn step_fn(&self) -> BuiltinStep {
        BuiltinStep::from_kind(self.step, self.step_size)
    }

    pub fn formatter(&self) -> BuiltinFormatter {
        self.format.into()
    }

    /// Engine with the configured guards applied
    pub fn engine(&self) -> Engine {
        match self.max_iterations {
            Some(limit) => Engine::new().with_iteration_limit(limit),
            None => Engine::new(),
        }
    }
}
