use super::traits::{SequenceRecord, SequenceSource};
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed FASTA input on line {line}: {kind}")]
    Malformed { line: usize, kind: FastaParseErrorKind },
    #[error("Malformed FASTA input: no '>' records found")]
    NoRecords,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaParseErrorKind {
    #[error("sequence data appears before the first '>' header")]
    SequenceBeforeHeader,
    #[error("header line has no identifier")]
    MissingIdentifier,
}

/// Reader for FASTA text.
///
/// A record starts at a `>` header; its identifier is the first
/// whitespace-delimited token after the `>`. Following lines up to the next
/// header are concatenated, trimmed, into the sequence. Blank lines and `;`
/// comment lines are ignored. A header with no body yields a record with an
/// empty sequence, which the engine rejects on its own.
pub struct FastaFile;

impl SequenceSource for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error> {
        let mut records: Vec<SequenceRecord> = Vec::new();
        let mut current: Option<SequenceRecord> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('>') {
                let id = header
                    .split_whitespace()
                    .next()
                    .ok_or(FastaError::Malformed {
                        line: line_num,
                        kind: FastaParseErrorKind::MissingIdentifier,
                    })?;
                if let Some(done) = current.take() {
                    records.push(done);
                }
                current = Some(SequenceRecord::new(id, String::new()));
                continue;
            }

            match current.as_mut() {
                Some(record) => record.sequence.push_str(trimmed),
                None => {
                    return Err(FastaError::Malformed {
                        line: line_num,
                        kind: FastaParseErrorKind::SequenceBeforeHeader,
                    });
                }
            }
        }

        if let Some(done) = current.take() {
            records.push(done);
        }

        if records.is_empty() {
            return Err(FastaError::NoRecords);
        }
        Ok(records)
    }
}
