mod cli;
mod config;
mod convert;
mod input;
mod logging;
mod month_cmd;
mod output;
mod year_cmd;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;
use crate::input::View;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let bounds = convert::build_bounds(&config.bounds)?;
    let today = chrono::Local::now().date_naive();

    let request = input::resolve(cli, bounds, config.display.highlight_today, today)?;
    let lines = match &request.view {
        View::Month { year, month } => month_cmd::run(*year, *month, request.mark, cli, &config)?,
        View::Years { span, separate } => {
            year_cmd::run(span, *separate, request.mark, cli, &config)?
        }
    };

    output::write_lines(&mut io::stdout().lock(), &lines).context("failed to write calendar")
}
