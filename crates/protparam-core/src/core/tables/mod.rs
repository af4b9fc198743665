//! # Reference Tables Module
//!
//! Immutable per-residue reference data used by every calculator.
//!
//! The raw values live in compile-time `phf` maps ([`data`]). [`ReferenceTables`]
//! resolves them once into dense arrays indexed by [`AminoAcid::index`], so a
//! table is built at startup and then shared by `&` across any number of
//! threads without synchronization.
//!
//! ```ignore
//! use protparam::core::tables::ReferenceTables;
//!
//! let tables = ReferenceTables::standard();
//! let mass = tables.molar_mass(AminoAcid::Alanine);
//! ```

pub mod data;
pub mod pka;

use crate::core::models::profile::HalfLifeClass;
use crate::core::models::residue::AminoAcid;
use data::{
    DIPEPTIDE_INSTABILITY, EXTINCTION_CONTRIBUTION, HALF_LIFE_CLASSES, MOLAR_MASS, WATER_MASS,
};
use pka::{PkaScale, TableLoadError};
use std::sync::LazyLock;
use tracing::debug;

const N: usize = AminoAcid::COUNT;

static STANDARD: LazyLock<ReferenceTables> = LazyLock::new(|| {
    debug!("Resolving standard reference tables.");
    ReferenceTables::resolve(PkaScale::default())
});

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    molar_mass: [f64; N],
    extinction: [Option<f64>; N],
    dipeptide_instability: [[f64; N]; N],
    pka: PkaScale,
}

impl ReferenceTables {
    /// The process-wide tables with the standard pKa scale.
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD
    }

    /// Builds tables that use a custom pKa scale; every other table is standard.
    pub fn with_pka_scale(pka: PkaScale) -> Self {
        Self::resolve(pka)
    }

    /// Builds tables with a pKa scale read from a TOML file.
    pub fn load_with_pka_scale(path: &std::path::Path) -> Result<Self, TableLoadError> {
        Ok(Self::with_pka_scale(PkaScale::load(path)?))
    }

    fn resolve(pka: PkaScale) -> Self {
        let mut molar_mass = [0.0; N];
        let mut extinction = [None; N];
        let mut dipeptide_instability = [[0.0; N]; N];

        for aa in AminoAcid::ALL {
            molar_mass[aa.index()] = MOLAR_MASS.get(&aa.code()).copied().unwrap_or(f64::NAN);
            extinction[aa.index()] = EXTINCTION_CONTRIBUTION.get(&aa.code()).copied();

            let mut key = String::with_capacity(2);
            for next in AminoAcid::ALL {
                key.clear();
                key.push(aa.code());
                key.push(next.code());
                dipeptide_instability[aa.index()][next.index()] = DIPEPTIDE_INSTABILITY
                    .get(key.as_str())
                    .copied()
                    .unwrap_or(0.0);
            }
        }

        Self {
            molar_mass,
            extinction,
            dipeptide_instability,
            pka,
        }
    }

    #[inline]
    pub fn molar_mass(&self, aa: AminoAcid) -> f64 {
        self.molar_mass[aa.index()]
    }

    #[inline]
    pub fn water_mass(&self) -> f64 {
        WATER_MASS
    }

    /// Absorbance contribution of `aa`; `None` for non-chromophoric residues.
    #[inline]
    pub fn extinction_contribution(&self, aa: AminoAcid) -> Option<f64> {
        self.extinction[aa.index()]
    }

    /// Instability weight of the dipeptide `first` followed by `second`.
    #[inline]
    pub fn dipeptide_instability(&self, first: AminoAcid, second: AminoAcid) -> f64 {
        self.dipeptide_instability[first.index()][second.index()]
    }

    pub fn pka(&self) -> &PkaScale {
        &self.pka
    }

    /// Half-life bucket of a raw one-letter code. Codes outside the standard
    /// alphabet map to [`HalfLifeClass::Unknown`] instead of failing.
    pub fn half_life_class(&self, code: char) -> HalfLifeClass {
        HALF_LIFE_CLASSES
            .get(&code)
            .copied()
            .unwrap_or(HalfLifeClass::Unknown)
    }
}
