//! # Core Module
//!
//! Stateless building blocks shared by every calculation.
//!
//! - **Sequence Representation** ([`models`]) - Residues, validated sequences and profiles
//! - **Reference Data** ([`tables`]) - Masses, pKa values, extinction and instability weights
//! - **File I/O** ([`io`]) - FASTA input and CSV / plain-text report output
//! - **Utilities** ([`utils`]) - Numeric helpers

pub mod io;
pub mod models;
pub mod tables;
pub mod utils;
