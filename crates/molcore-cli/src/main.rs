mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("molcore CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command_result = match cli.command {
        Commands::Constants(args) => {
            info!("Dispatching to 'constants' command.");
            commands::constants::run(args, &mut out)
        }
        Commands::Convert(args) => {
            info!("Dispatching to 'convert' command.");
            commands::convert::run(args, &mut out)
        }
        Commands::Angle(args) => {
            info!("Dispatching to 'angle' command.");
            commands::angle::run(args, &mut out)
        }
        Commands::Element(args) => {
            info!("Dispatching to 'element' command.");
            commands::element::run(args, &mut out)
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }

    command_result
}
