//! Entry point of the `arrayprep` command-line driver.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use cli::{execute, resolve_config, Cli};

/// Initializes `env_logger` with a compact `[LEVEL] message` format.
///
/// `RUST_LOG` still takes precedence over the level chosen here.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(if verbose { LevelFilter::Info } else { LevelFilter::Warn });
    builder.parse_default_env();

    // Custom formatter: just print the level and message
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    let _ = builder.try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.verbose);
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
