use crate::core::models::sequence::AminoAcidSequence;
use crate::core::tables::ReferenceTables;

/// Guruprasad instability index: `(10 / length) * Σ DIWV(xᵢ, xᵢ₊₁)` over every
/// adjacent pair. A single residue has no pairs and scores 0.
pub fn index(seq: &AminoAcidSequence, tables: &ReferenceTables) -> f64 {
    let score: f64 = seq
        .dipeptides()
        .map(|(first, second)| tables.dipeptide_instability(first, second))
        .sum();
    (10.0 / seq.len() as f64) * score
}
