//! Per-property calculators.
//!
//! Each submodule is a pure function of an [`AminoAcidSequence`](crate::core::models::sequence::AminoAcidSequence)
//! and the [`ReferenceTables`](crate::core::tables::ReferenceTables); only the
//! isoelectric point search keeps loop state, scoped to a single call.

pub mod aliphatic;
pub mod charge;
pub mod extinction;
pub mod half_life;
pub mod instability;
pub mod isoelectric;
pub mod mass;
