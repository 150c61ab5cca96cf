mod cli;
mod console;
mod logging;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use console::ConsoleReporter;
use dir_maintainer::{action_log, config, AppConfig, CleanEngine};
use dotenv::dotenv;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = config::load_configuration().context("Error loading configuration")?;
    let config = args.apply_to(config);
    debug!("Configuration: {:?}", config);

    run_clean(&args.directory, config)
}

fn run_clean(directory: &Path, config: AppConfig) -> anyhow::Result<()> {
    let engine = CleanEngine::new(config);

    let result = match engine.clean(directory, &ConsoleReporter) {
        Ok(result) => result,
        Err(err) if err.is_invalid_target() => {
            // nothing was touched, report and stop
            println!("{}", err);
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Cleaning {} failed", directory.display()))
        }
    };

    info!(
        "{} moved, {} deleted, {} unrecognized, {} undated logs in {:.2}s",
        result.moved,
        result.deleted,
        result.unrecognized,
        result.undated,
        result.duration.as_secs_f64(),
    );

    if let Some(path) = &engine.config().action_log {
        action_log::append(path, &result.actions)
            .with_context(|| format!("Writing action log {} failed", path.display()))?;
        debug!("{} actions appended to {}", result.actions.len(), path.display());
    }

    Ok(())
}
