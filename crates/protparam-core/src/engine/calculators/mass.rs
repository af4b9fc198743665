use crate::core::models::sequence::AminoAcidSequence;
use crate::core::tables::ReferenceTables;

/// Average molecular weight in daltons: the summed free amino acid masses minus
/// one water per peptide bond.
pub fn molecular_weight(seq: &AminoAcidSequence, tables: &ReferenceTables) -> f64 {
    let residue_sum: f64 = seq.residues().iter().map(|&aa| tables.molar_mass(aa)).sum();
    let peptide_bonds = (seq.len() - 1) as f64;
    residue_sum - peptide_bonds * tables.water_mass()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::AminoAcid;
    use crate::core::utils::numeric::round_to;

    fn mw(s: &str) -> f64 {
        molecular_weight(&s.parse().unwrap(), ReferenceTables::standard())
    }

    #[test]
    fn single_residue_weight_equals_table_mass() {
        let tables = ReferenceTables::standard();
        for aa in AminoAcid::ALL {
            let seq = AminoAcidSequence::new(vec![aa]).unwrap();
            assert_eq!(molecular_weight(&seq, tables), tables.molar_mass(aa));
        }
    }

    #[test]
    fn dipeptide_subtracts_one_water() {
        assert_eq!(round_to(mw("AC"), 2), 192.24);
        assert!((mw("AC") - (89.0932 + 121.1582 - 18.01528)).abs() < 1e-9);
    }

    #[test]
    fn weight_is_invariant_under_permutation() {
        assert_eq!(mw("AC"), mw("CA"));
        assert!((mw("MKWVTFISLL") - mw("LLSIFTVWKM")).abs() < 1e-9);
    }

    #[test]
    fn weight_grows_by_residue_mass_minus_water() {
        let tables = ReferenceTables::standard();
        let delta = mw("GGG") - mw("GG");
        let expected = tables.molar_mass(AminoAcid::Glycine) - tables.water_mass();
        assert!((delta - expected).abs() < 1e-9);
    }
}
