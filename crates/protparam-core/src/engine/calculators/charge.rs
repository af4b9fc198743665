use crate::core::models::residue::AminoAcid;
use crate::core::models::sequence::AminoAcidSequence;
use crate::core::tables::ReferenceTables;

/// An ionizable group type present `count` times in a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonizableGroup {
    pub pka: f64,
    pub count: usize,
}

/// Henderson-Hasselbalch titration model of a sequence.
///
/// Positive groups are the protonatable K, R and H side chains plus the
/// N-terminal amine; negative groups are the D, E, C and Y side chains plus the
/// C-terminal carboxyl. Residue types absent from the sequence are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeModel {
    positive: Vec<IonizableGroup>,
    negative: Vec<IonizableGroup>,
}

impl ChargeModel {
    pub fn from_sequence(seq: &AminoAcidSequence, tables: &ReferenceTables) -> Self {
        let pka = tables.pka();
        let composition = seq.composition();
        let groups = |residues: &[(AminoAcid, f64)]| -> Vec<IonizableGroup> {
            residues
                .iter()
                .filter_map(|&(aa, value)| {
                    let count = composition.get(aa);
                    (count > 0).then_some(IonizableGroup { pka: value, count })
                })
                .collect()
        };

        let mut positive = groups(&[
            (AminoAcid::Lysine, pka.lysine),
            (AminoAcid::Arginine, pka.arginine),
            (AminoAcid::Histidine, pka.histidine),
        ]);
        positive.push(IonizableGroup {
            pka: pka.n_terminal(seq.n_terminal()),
            count: 1,
        });

        let mut negative = groups(&[
            (AminoAcid::AsparticAcid, pka.aspartic_acid),
            (AminoAcid::GlutamicAcid, pka.glutamic_acid),
            (AminoAcid::Cysteine, pka.cysteine),
            (AminoAcid::Tyrosine, pka.tyrosine),
        ]);
        negative.push(IonizableGroup {
            pka: pka.c_terminus,
            count: 1,
        });

        Self { positive, negative }
    }

    pub fn positive_groups(&self) -> &[IonizableGroup] {
        &self.positive
    }

    pub fn negative_groups(&self) -> &[IonizableGroup] {
        &self.negative
    }

    /// Net charge at `ph`. Decreases monotonically with pH.
    pub fn net_charge(&self, ph: f64) -> f64 {
        let positive: f64 = self
            .positive
            .iter()
            .map(|g| g.count as f64 / (1.0 + 10f64.powf(ph - g.pka)))
            .sum();
        let negative: f64 = self
            .negative
            .iter()
            .map(|g| g.count as f64 / (1.0 + 10f64.powf(g.pka - ph)))
            .sum();
        positive - negative
    }
}
