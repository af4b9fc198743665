//! # Engine Module
//!
//! The property-calculation engine: per-property calculators, the titration
//! charge model, the bounded isoelectric point solver and the
//! [`profiler::PropertyEngine`] that assembles them into one profile per sequence.
//!
//! ## Architecture
//!
//! - **Calculators** ([`calculators`]) - Mass, charge, pI, extinction, instability,
//!   aliphatic index and half-life, each a pure function of a sequence and the tables
//! - **Orchestration** ([`profiler`]) - The canonical `sequence -> profile` function
//! - **Configuration** ([`config`]) - Solver parameters and their validating builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for batch runs
//! - **Error Handling** ([`error`]) - Engine error kinds surfaced to callers
//!
//! Every calculation borrows the [`ReferenceTables`](crate::core::tables::ReferenceTables)
//! immutably, so engines may run concurrently on separate threads.

pub mod calculators;
pub mod config;
pub mod error;
pub mod profiler;
pub mod progress;
