mod cli;
mod config;
mod convert;
mod demo_cmd;
mod increment_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Increment(args) => increment_cmd::run(args),
        Command::Demo => demo_cmd::run(),
    }
}
