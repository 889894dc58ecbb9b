//! Command line front end.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::calculator::CalcResult;
use crate::config::Config;
use crate::keys::{Key, looks_like_expression, tokenize};
use crate::session::Session;

const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

#[derive(Parser, Debug)]
#[command(name = "tallycalc", version, about = "A keypad calculator for the terminal")]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Decimal separator for the display.
    #[arg(long, global = true)]
    pub separator: Option<char>,

    /// Maximum number of fraction digits shown.
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one line of keys, e.g. `tallycalc eval 12,5 + 3 X 2`.
    Eval {
        /// Keys to press; the arguments are joined with spaces.
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load the config file and apply command line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::default_path);
        let mut config = Config::load(&path)?;
        if let Some(separator) = self.separator {
            config.display.decimal_separator = separator;
        }
        if let Some(precision) = self.precision {
            config.display.max_fraction_digits = precision;
        }
        config.validate().context("Invalid command line option")?;
        Ok(config)
    }

    pub fn session(&self) -> Result<Session> {
        let config = self.load_config()?;
        Ok(Session::new(
            config.display.number_format(),
            config.display.error_style(),
        ))
    }
}

/// Feed a line of keys to `session`, pressing `=` at the end if the line
/// did not.
pub fn evaluate_line(session: &mut Session, line: &str) -> Result<CalcResult> {
    let mut keys = tokenize(line)?;
    if !looks_like_expression(line) {
        anyhow::bail!("No number to evaluate in {:?}", line.trim());
    }
    if keys.last() != Some(&Key::Equals) {
        keys.push(Key::Equals);
    }

    session
        .feed(keys)
        .with_context(|| format!("Nothing to evaluate in {:?}", line.trim()))
}

/// Run `tallycalc eval` and return whether the evaluation succeeded.
pub fn run_eval(
    session: &mut Session,
    keys: &[String],
    json: bool,
    mut output: impl Write,
) -> Result<bool> {
    let line = keys.join(" ");
    let result = evaluate_line(session, &line)?;

    if json {
        let rendered = serde_json::to_string(&result).context("Failed to serialize result")?;
        writeln!(output, "{}", rendered)?;
    } else {
        writeln!(output, "{}", result.display())?;
    }
    Ok(result.is_success())
}

/// Read lines of keys from `input`, printing the display after each line.
///
/// Ends on EOF or a quit word. A line with an unknown key prints the error
/// and leaves the session as it was.
pub fn run_interactive(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    writeln!(output, "{}", session.display())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if QUIT_WORDS.contains(&trimmed) {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        match tokenize(trimmed) {
            Ok(keys) => {
                debug!(count = keys.len(), "pressing keys");
                session.feed(keys);
                writeln!(output, "{}", session.display())?;
            }
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }

    Ok(())
}
