use crate::core::models::profile::HalfLifeClass;
use crate::core::models::residue::AminoAcid;
use crate::core::tables::ReferenceTables;

/// N-end rule bucket of a sequence starting with `first`.
pub fn classify(first: AminoAcid, tables: &ReferenceTables) -> HalfLifeClass {
    classify_code(first.code(), tables)
}

/// Like [`classify`], for a raw code. Never fails: codes outside the standard
/// alphabet give [`HalfLifeClass::Unknown`].
pub fn classify_code(code: char, tables: &ReferenceTables) -> HalfLifeClass {
    tables.half_life_class(code)
}
