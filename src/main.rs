//! FizzBuzz - Main entry point
//!
//! Reads the upper bound from stdin, builds the configured rules and streams
//! the labeled sequence to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use fizzbuzz::cli::{Cli, Commands};
use fizzbuzz::config_file::RulesConfig;
use fizzbuzz::error::InputError;
use fizzbuzz::{exit_codes, input, logging};

fn main() {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);
    debug!("CLI arguments parsed");

    let code = match run(&cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("✗ {:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            let loaded = RulesConfig::load_from_file(config)?;
            println!(
                "✓ Configuration file is valid: {} rule(s), step {}, format {}",
                loaded.rules.len(),
                loaded.step,
                loaded.format
            );
            Ok(())
        }
        Some(Commands::InitConfig { path, force }) => {
            if path.exists() && !force {
                bail!("{:?} already exists (use --force to overwrite)", path);
            }
            RulesConfig::default().save_to_file(path)?;
            info!("Wrote default configuration to {:?}", path);
            Ok(())
        }
        None => generate(cli),
    }
}

/// Read the upper bound and stream the sequence to stdout.
fn generate(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RulesConfig::load_from_file(path)?,
        None => RulesConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid run options")?;

    let last = input::read_bound(io::stdin().lock()).context("Failed to read upper bound")?;
    info!(
        first = config.first,
        last,
        step = %config.step,
        format = %config.format,
        "generating sequence"
    );

    let rules = config.rule_set();
    let step = config.step_fn();
    let formatter = config.formatter();

    let mut out = io::stdout().lock();
    let labels = config
        .engine()
        .run(config.first, last, &mut out, &rules, &step, &formatter)
        .context("Failed to generate sequence")?;
    out.flush().context("Failed to flush stdout")?;

    debug!(items = labels.len(), "done");
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        exit_codes::INVALID_INPUT
    } else {
        exit_codes::FAILURE
    }
}
