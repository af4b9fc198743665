use crate::cli::BatchArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use protparam::{
    core::io::{
        fasta::FastaFile,
        report::CsvReport,
        traits::{ReportSink, SequenceSource},
    },
    engine::{profiler::PropertyEngine, progress::ProgressReporter},
    workflows,
};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const REPORT_SUFFIX: &str = "_protparam.csv";

pub fn run(args: BatchArgs, quiet: bool) -> Result<()> {
    let config = AppConfig::from_args(&args.engine)?;
    let tables = config.load_tables()?;
    let engine = PropertyEngine::new(&tables, config.engine);

    info!("Loading sequences from {:?}", &args.input);
    let records = FastaFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    info!("Read {} record(s).", records.len());

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let result = workflows::batch::run(&records, &engine, &reporter, None);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&args.input));
    info!(
        "Writing {} profile(s) to {:?}",
        result.profiles.len(),
        &output_path
    );
    CsvReport::write_to_path(&result.profiles, &output_path).map_err(|e| CliError::Report {
        path: output_path.clone(),
        source: e.into(),
    })?;
    println!("Results saved to {}", output_path.display());

    if result.failures.is_empty() {
        return Ok(());
    }
    for failure in &result.failures {
        let err = CliError::record(&failure.id, failure.error.clone());
        error!(id = %failure.id, "{}", failure.error);
        eprintln!("{}", err);
    }
    Err(CliError::BatchFailures {
        failed: result.failures.len(),
        total: result.total(),
    })
}

/// `<stem>_protparam.csv` in the directory of `input`.
pub fn default_report_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sequences".to_string());
    input.with_file_name(format!("{}{}", stem, REPORT_SUFFIX))
}
