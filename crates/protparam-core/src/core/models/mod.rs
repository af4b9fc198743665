//! # Core Models Module
//!
//! Data structures describing protein sequences and their computed parameters.
//!
//! - [`residue`] - The twenty standard amino acids
//! - [`sequence`] - Validated, non-empty amino acid sequences
//! - [`profile`] - The per-sequence physicochemical profile and half-life classes
//!
//! ```ignore
//! use protparam::core::models::sequence::AminoAcidSequence;
//!
//! let seq: AminoAcidSequence = "MKTAYIAKQR".parse()?;
//! assert_eq!(seq.len(), 10);
//! ```

pub mod profile;
pub mod residue;
pub mod sequence;
