//! Input/output for sequence files and parameter reports.
//!
//! Sequences enter through a [`traits::SequenceSource`] (FASTA is the one format
//! provided) and computed profiles leave through a [`traits::ReportSink`]
//! (a CSV table for batches, a labeled plain-text block for single records).

pub mod fasta;
pub mod report;
pub mod traits;
