use crate::cli::SingleArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use protparam::{
    core::io::{
        fasta::FastaFile,
        report::TextReport,
        traits::{ReportSink, SequenceSource},
    },
    engine::profiler::PropertyEngine,
    workflows,
};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: SingleArgs) -> Result<()> {
    let config = AppConfig::from_args(&args.engine)?;
    let tables = config.load_tables()?;
    let engine = PropertyEngine::new(&tables, config.engine);

    info!("Loading sequences from {:?}", &args.input);
    let records = FastaFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    if records.len() > 1 {
        warn!(
            "Input holds {} records; only the first ('{}') is profiled. Use 'batch' for all of them.",
            records.len(),
            records[0].id
        );
    }

    let Some(record) = records.first() else {
        return Ok(());
    };
    let profile = workflows::single::run(record, &engine)
        .map_err(|e| CliError::record(&record.id, e))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    TextReport::write_to(std::slice::from_ref(&profile), &mut handle)
        .map_err(|e| CliError::Other(e.into()))?;
    handle.flush()?;
    Ok(())
}
