use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sort_select_config::{Config, LoadOptions};
use sort_select_core::{
    Diagnostics, ExitCode, SelectError, Session, SessionOptions, WriterDiagnostics,
};

pub mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "sort-select",
    version,
    about = "Sort a fixed integer sequence with a selectable algorithm",
    long_about = None
)]
pub struct Cli {
    /// Handle a single selection (B = bubble sort, S = selection sort) and exit.
    /// Without it, every line read from stdin is handled as a selection.
    #[arg(short = 'c', long = "choice", value_name = "CHOICE", allow_hyphen_values = true)]
    pub choice: Option<String>,

    /// Path to a configuration file layered over .sort-select.toml
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file opened for each sort (defaults to data.txt)
    #[arg(short = 'o', long = "output", value_name = "PATH", value_parser = non_empty_path)]
    pub output: Option<PathBuf>,

    /// Comma-separated sequence to sort instead of the configured one
    #[arg(
        long = "values",
        value_name = "N,...",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub values: Option<Vec<i32>>,

    /// Write the sorted values to the output file
    #[arg(long = "persist")]
    pub persist: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to install logger")?;

    let config = match Config::load(load_options(&cli)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("sort-select: {err}");
            return Ok(ExitCode::Config as i32);
        }
    };

    let (options, sequence) = session_inputs(&cli, &config);
    let mut session = Session::new(options, sequence, WriterDiagnostics::stderr());

    let stdin = io::stdin();
    drive(&mut session, cli.choice.as_deref(), stdin.lock())
}

fn load_options(cli: &Cli) -> LoadOptions {
    match &cli.config {
        Some(path) => LoadOptions::default().with_override_path(path),
        None => LoadOptions::default(),
    }
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn session_inputs(cli: &Cli, config: &Config) -> (SessionOptions, Vec<i32>) {
    let output = match &cli.output {
        Some(path) => absolute(path, &config.sources.working_directory),
        None => config.sink.path.clone(),
    };
    let options = SessionOptions {
        output,
        persist: cli.persist || config.sink.persist,
    };
    let sequence = cli
        .values
        .clone()
        .unwrap_or_else(|| config.sequence.values.clone());
    (options, sequence)
}

fn absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Runs one selection when `choice` is given, otherwise treats each input
/// line as a selection until end of input.
///
/// Invalid selections and sink failures are recovered per line; only a
/// failing diagnostics channel aborts the loop.
pub fn drive<D, R>(session: &mut Session<D>, choice: Option<&str>, mut input: R) -> Result<i32>
where
    D: Diagnostics,
    R: BufRead,
{
    if let Some(choice) = choice {
        return match session.handle_commit(choice) {
            Ok(_) => Ok(ExitCode::Success as i32),
            Err(SelectError::Io(err)) => Err(err).context("failed to write diagnostics"),
            Err(err) => Ok(err.exit_code() as i32),
        };
    }

    session.prompt().context("failed to write prompt")?;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read selection from stdin")?;
        if read == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and are rejected like any other selector.
        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        match session.handle_commit(&line) {
            Ok(outcome) => log::info!(
                "sorted {} values with {}",
                outcome.sorted.len(),
                outcome.strategy
            ),
            Err(SelectError::Io(err)) => {
                return Err(err).context("failed to write diagnostics");
            }
            Err(_) => {}
        }
    }

    Ok(ExitCode::Success as i32)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn non_empty_path(value: &str) -> Result<PathBuf, String> {
    if value.is_empty() {
        return Err("path must not be empty".to_owned());
    }
    Ok(PathBuf::from(value))
}
