use super::config::ConfigError;
use crate::core::models::sequence::SequenceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid sequence: {source}")]
    InvalidSequence {
        #[from]
        source: SequenceError,
    },

    #[error(
        "pI solver failed to converge after {iterations} iterations (last pH {ph:.4}, net charge {charge:.4})"
    )]
    NonConvergence {
        iterations: usize,
        ph: f64,
        charge: f64,
    },

    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Short stable name of the error kind, for reports and exit messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSequence {
                source: SequenceError::UnknownResidue { .. },
            } => "unknown-residue",
            Self::InvalidSequence {
                source: SequenceError::Empty,
            } => "empty-sequence",
            Self::NonConvergence { .. } => "non-convergence",
            Self::Config(_) => "invalid-config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_each_error_category() {
        let unknown: EngineError = SequenceError::UnknownResidue {
            code: 'X',
            position: 1,
        }
        .into();
        assert_eq!(unknown.kind(), "unknown-residue");
        assert_eq!(EngineError::from(SequenceError::Empty).kind(), "empty-sequence");
        let stalled = EngineError::NonConvergence {
            iterations: 100,
            ph: 13.99,
            charge: 9.9,
        };
        assert_eq!(stalled.kind(), "non-convergence");
        assert_eq!(
            EngineError::from(ConfigError::MissingParameter("epsilon")).kind(),
            "invalid-config"
        );
    }

    #[test]
    fn display_includes_offending_residue() {
        let err: EngineError = SequenceError::UnknownResidue {
            code: 'B',
            position: 7,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid sequence: Unknown residue code 'B' at position 7"
        );
    }
}
