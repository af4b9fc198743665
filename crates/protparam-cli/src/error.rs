use protparam::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{id}: {kind}: {source}")]
    Record {
        id: String,
        kind: &'static str,
        #[source]
        source: EngineError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write report '{path}': {source}", path = path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{failed} of {total} record(s) could not be profiled")]
    BatchFailures { failed: usize, total: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Attaches the record identifier and error kind to an engine failure.
    pub fn record(id: impl Into<String>, source: EngineError) -> Self {
        Self::Record {
            id: id.into(),
            kind: source.kind(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protparam::core::models::sequence::SequenceError;

    #[test]
    fn record_error_names_identifier_and_kind() {
        let err = CliError::record(
            "myprot",
            SequenceError::UnknownResidue {
                code: 'X',
                position: 3,
            }
            .into(),
        );
        assert_eq!(
            err.to_string(),
            "myprot: unknown-residue: Invalid sequence: Unknown residue code 'X' at position 3"
        );
    }
}
