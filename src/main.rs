mod cli;
mod config;
mod dataset;
mod display;
mod error;
mod logging;
mod matching;
mod models;
mod selection;
mod server;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let serving = cli.command.as_ref().map_or(true, |c| c.is_server());
    logging::init(if serving { "info" } else { "warn" });

    cli::run(cli);
}
