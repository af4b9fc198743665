use super::mass::molecular_weight;
use crate::core::models::sequence::AminoAcidSequence;
use crate::core::tables::ReferenceTables;

/// Summed W, Y and C absorbance contributions, in M⁻¹·cm⁻¹ at 280 nm with
/// cystines reduced.
pub fn molar(seq: &AminoAcidSequence, tables: &ReferenceTables) -> f64 {
    seq.composition()
        .iter()
        .filter_map(|(aa, count)| {
            tables
                .extinction_contribution(aa)
                .map(|value| value * count as f64)
        })
        .sum()
}

/// The reported extinction coefficient: the molar sum divided by the average
/// molecular weight of the chain.
///
/// Dividing by mass gives an absorbance per dalton rather than the classical
/// molar coefficient returned by [`molar`]. Reports keep this form so their
/// numbers stay comparable with earlier runs of the tool.
pub fn mass_normalized(seq: &AminoAcidSequence, tables: &ReferenceTables) -> f64 {
    molar(seq, tables) / molecular_weight(seq, tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> AminoAcidSequence {
        s.parse().unwrap()
    }

    #[test]
    fn molar_sums_chromophore_contributions() {
        let tables = ReferenceTables::standard();
        assert_eq!(molar(&seq("WWYC"), tables), 2.0 * 5500.0 + 1490.0 + 125.0);
        assert_eq!(molar(&seq("GAVL"), tables), 0.0);
    }

    #[test]
    fn mass_normalized_divides_by_molecular_weight() {
        let tables = ReferenceTables::standard();
        let s = seq("AC");
        let expected = 125.0 / molecular_weight(&s, tables);
        assert_eq!(mass_normalized(&s, tables), expected);
        assert!((mass_normalized(&s, tables) - 0.6502).abs() < 1e-4);
    }

    #[test]
    fn sequence_without_chromophores_has_zero_extinction() {
        assert_eq!(mass_normalized(&seq("KRDE"), ReferenceTables::standard()), 0.0);
    }
}
