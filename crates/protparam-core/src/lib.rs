//! # protparam Core Library
//!
//! A library for computing the physicochemical parameters of protein sequences: molecular
//! weight, theoretical isoelectric point, extinction coefficient, instability index,
//! aliphatic index and the N-end rule half-life class.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AminoAcid`, `AminoAcidSequence`,
//!   `PhysicochemicalProfile`), the immutable `ReferenceTables`, and the FASTA / report I/O.
//!
//! - **[`engine`]: The Logic Core.** The per-property calculators, the titration `ChargeModel`,
//!   the bounded isoelectric point solver and the `PropertyEngine` that ties them together.
//!
//! - **[`workflows`]: The Public API.** Single-record and batch entry points built on the one
//!   canonical `sequence -> profile` function.

pub mod core;
pub mod engine;
pub mod workflows;
