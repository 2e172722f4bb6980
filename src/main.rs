mod cli;
mod combine_cmd;
mod config;
mod dates_cmd;
mod extract_cmd;
mod insert_cmd;
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
        Command::Insert(args) => insert_cmd::run(args),
        Command::Extract(args) => extract_cmd::run(args),
        Command::Dates(args) => dates_cmd::run(args),
        Command::Combine(args) => combine_cmd::run(args),
    }
}
