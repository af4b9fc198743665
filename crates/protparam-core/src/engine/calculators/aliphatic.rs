use crate::core::models::residue::AminoAcid;
use crate::core::models::sequence::AminoAcidSequence;

const VALINE_WEIGHT: f64 = 2.9;
const LEUCINE_ISOLEUCINE_WEIGHT: f64 = 3.9;

/// Relative volume of aliphatic side chains:
/// `100 * (A + 2.9 V + 3.9 (I + L)) / length`.
pub fn index(seq: &AminoAcidSequence) -> f64 {
    let composition = seq.composition();
    let weighted = composition.get(AminoAcid::Alanine) as f64
        + VALINE_WEIGHT * composition.get(AminoAcid::Valine) as f64
        + LEUCINE_ISOLEUCINE_WEIGHT
            * (composition.get(AminoAcid::Isoleucine) + composition.get(AminoAcid::Leucine)) as f64;
    100.0 * weighted / seq.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(s: &str) -> f64 {
        index(&s.parse().unwrap())
    }

    #[test]
    fn alanine_half_of_dipeptide_gives_fifty() {
        assert_eq!(ai("AC"), 50.0);
    }

    #[test]
    fn index_is_bounded_by_leucine_weight() {
        assert!((ai("LLLL") - 390.0).abs() < 1e-9);
        assert!((ai("IL") - 390.0).abs() < 1e-9);
        assert!((ai("V") - 290.0).abs() < 1e-9);
        assert_eq!(ai("GDKW"), 0.0);
    }

    #[test]
    fn mixed_sequence_weights_each_residue() {
        let expected = 100.0 * (1.0 + 2.9 + 3.9 * 2.0) / 5.0;
        assert!((ai("AVILG") - expected).abs() < 1e-9);
    }
}
