use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{Layer, filter::LevelFilter, fmt, prelude::*, registry::LookupSpan};

/// Console level: `-q` keeps only errors, each `-v` adds one level above WARN.
fn console_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// A log file always records per-record DEBUG events, more if the console asks for more.
fn file_level(console: LevelFilter) -> LevelFilter {
    console.max(LevelFilter::DEBUG)
}

fn file_layer<S>(file: File, console: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(file_level(console))
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let console = console_level(verbosity, quiet);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console);

    let log_file_layer = match log_file {
        Some(path) => Some(file_layer(File::create(&path).map_err(CliError::Io)?, console)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(log_file_layer)
        .init();
    Ok(())
}
