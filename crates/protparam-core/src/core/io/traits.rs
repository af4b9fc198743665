use crate::core::models::profile::PhysicochemicalProfile;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A raw sequence record as read from an input file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Identifier taken from the record header.
    pub id: String,
    /// Residue codes exactly as read, with line breaks removed.
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// Defines the interface for reading sequence records from a file format.
pub trait SequenceSource {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every record from a buffered reader, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed or cannot be read.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, Self::Error>;

    /// Reads every record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Defines the interface for writing computed profiles to a report format.
pub trait ReportSink {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes the profiles, in the given order, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(
        profiles: &[PhysicochemicalProfile],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes the profiles to a file path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        profiles: &[PhysicochemicalProfile],
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(profiles, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
