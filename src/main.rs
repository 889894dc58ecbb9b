use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tallycalc::cli::{Cli, Command, run_eval, run_interactive};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut session = cli.session()?;

    match &cli.command {
        Some(Command::Eval { keys, json }) => {
            run_eval(&mut session, keys, *json, io::stdout().lock())
        }
        None => {
            run_interactive(&mut session, io::stdin().lock(), io::stdout().lock())?;
            Ok(true)
        }
    }
}
