use super::data::{C_TERMINAL_PKA, DEFAULT_N_TERMINAL_PKA, N_TERMINAL_PKA, SIDE_CHAIN_PKA};
use crate::core::models::residue::AminoAcid;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid pKa scale: {0}")]
    Invalid(String),
}

/// The set of pKa values used to build a titration model.
///
/// The standard scale is the one the reference tables ship with. A custom scale
/// can be read from TOML; any key left out keeps its standard value.
#[derive(Debug, Clone, PartialEq)]
pub struct PkaScale {
    pub n_terminus_default: f64,
    pub c_terminus: f64,
    pub lysine: f64,
    pub arginine: f64,
    pub histidine: f64,
    pub aspartic_acid: f64,
    pub glutamic_acid: f64,
    pub cysteine: f64,
    pub tyrosine: f64,
    n_terminus: HashMap<AminoAcid, f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PkaScaleFile {
    n_terminus_default: Option<f64>,
    c_terminus: Option<f64>,
    lysine: Option<f64>,
    arginine: Option<f64>,
    histidine: Option<f64>,
    aspartic_acid: Option<f64>,
    glutamic_acid: Option<f64>,
    cysteine: Option<f64>,
    tyrosine: Option<f64>,
    #[serde(default)]
    n_terminus: HashMap<String, f64>,
}

impl Default for PkaScale {
    fn default() -> Self {
        let side_chain = |code: char| SIDE_CHAIN_PKA.get(&code).copied().unwrap_or(f64::NAN);
        let n_terminus = N_TERMINAL_PKA
            .entries()
            .filter_map(|(&code, &pka)| AminoAcid::from_code(code).map(|aa| (aa, pka)))
            .collect();
        Self {
            n_terminus_default: DEFAULT_N_TERMINAL_PKA,
            c_terminus: C_TERMINAL_PKA,
            lysine: side_chain('K'),
            arginine: side_chain('R'),
            histidine: side_chain('H'),
            aspartic_acid: side_chain('D'),
            glutamic_acid: side_chain('E'),
            cysteine: side_chain('C'),
            tyrosine: side_chain('Y'),
            n_terminus,
        }
    }
}

impl PkaScale {
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            TableLoadError::Toml { source, .. } => TableLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, TableLoadError> {
        let file: PkaScaleFile = toml::from_str(content).map_err(|e| TableLoadError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })?;

        let mut scale = Self::default();
        let overrides = [
            (&mut scale.n_terminus_default, file.n_terminus_default),
            (&mut scale.c_terminus, file.c_terminus),
            (&mut scale.lysine, file.lysine),
            (&mut scale.arginine, file.arginine),
            (&mut scale.histidine, file.histidine),
            (&mut scale.aspartic_acid, file.aspartic_acid),
            (&mut scale.glutamic_acid, file.glutamic_acid),
            (&mut scale.cysteine, file.cysteine),
            (&mut scale.tyrosine, file.tyrosine),
        ];
        for (slot, value) in overrides {
            if let Some(v) = value {
                *slot = v;
            }
        }

        for (key, pka) in file.n_terminus {
            let aa: AminoAcid = key
                .parse()
                .map_err(|e| TableLoadError::Invalid(format!("[n-terminus] {}", e)))?;
            scale.n_terminus.insert(aa, pka);
        }

        scale.validate()?;
        Ok(scale)
    }

    /// Two-tier lookup: the residue-specific N-terminal pKa if one is
    /// tabulated, otherwise `n_terminus_default`.
    pub fn n_terminal(&self, first: AminoAcid) -> f64 {
        self.n_terminus
            .get(&first)
            .copied()
            .unwrap_or(self.n_terminus_default)
    }

    fn validate(&self) -> Result<(), TableLoadError> {
        let named = [
            ("n-terminus-default", self.n_terminus_default),
            ("c-terminus", self.c_terminus),
            ("lysine", self.lysine),
            ("arginine", self.arginine),
            ("histidine", self.histidine),
            ("aspartic-acid", self.aspartic_acid),
            ("glutamic-acid", self.glutamic_acid),
            ("cysteine", self.cysteine),
            ("tyrosine", self.tyrosine),
        ];
        let n_terminal = self
            .n_terminus
            .iter()
            .map(|(aa, &pka)| (aa.three_letter_code(), pka));
        for (name, pka) in named.into_iter().chain(n_terminal) {
            if !pka.is_finite() || !(0.0..=14.0).contains(&pka) {
                return Err(TableLoadError::Invalid(format!(
                    "pKa for '{}' must lie within [0, 14], got {}",
                    name, pka
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_scale_has_standard_values() {
        let scale = PkaScale::default();
        assert_eq!(scale.c_terminus, 3.55);
        assert_eq!(scale.lysine, 10.0);
        assert_eq!(scale.arginine, 12.0);
        assert_eq!(scale.histidine, 5.98);
        assert_eq!(scale.aspartic_acid, 4.05);
        assert_eq!(scale.glutamic_acid, 4.45);
        assert_eq!(scale.cysteine, 9.0);
        assert_eq!(scale.tyrosine, 10.0);
        assert!(scale.validate().is_ok());
    }

    #[test]
    fn n_terminal_uses_specific_entry_when_present() {
        let scale = PkaScale::default();
        assert_eq!(scale.n_terminal(AminoAcid::Alanine), 7.59);
        assert_eq!(scale.n_terminal(AminoAcid::Proline), 8.36);
        assert_eq!(scale.n_terminal(AminoAcid::Glutamine), 7.70);
        assert!(scale.n_terminus.contains_key(&AminoAcid::Methionine));
    }

    #[test]
    fn n_terminal_falls_back_to_documented_default() {
        let scale = PkaScale::default();
        for aa in [AminoAcid::Glycine, AminoAcid::Lysine, AminoAcid::Tryptophan] {
            assert!(!scale.n_terminus.contains_key(&aa));
            assert_eq!(scale.n_terminal(aa), 7.5);
        }
    }

    #[test]
    fn from_toml_str_overrides_only_given_keys() {
        let scale = PkaScale::from_toml_str(
            r#"
            lysine = 10.53
            c-terminus = 3.2

            [n-terminus]
            G = 7.8
            "#,
        )
        .unwrap();
        assert_eq!(scale.lysine, 10.53);
        assert_eq!(scale.c_terminus, 3.2);
        assert_eq!(scale.arginine, 12.0);
        assert_eq!(scale.n_terminal(AminoAcid::Glycine), 7.8);
        assert_eq!(scale.n_terminal(AminoAcid::Alanine), 7.59);
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = PkaScale::from_toml_str("selenocysteine = 5.2");
        assert!(matches!(result, Err(TableLoadError::Toml { .. })));
    }

    #[test]
    fn from_toml_str_rejects_unknown_n_terminal_residue() {
        let result = PkaScale::from_toml_str("[n-terminus]\nX = 7.0");
        assert!(matches!(result, Err(TableLoadError::Invalid(_))));
    }

    #[test]
    fn from_toml_str_rejects_out_of_range_pka() {
        let result = PkaScale::from_toml_str("histidine = 21.0");
        assert!(matches!(result, Err(TableLoadError::Invalid(_))));
    }

    #[test]
    fn load_reads_scale_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scale.toml");
        fs::write(&path, "tyrosine = 10.07\n").unwrap();
        let scale = PkaScale::load(&path).unwrap();
        assert_eq!(scale.tyrosine, 10.07);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = PkaScale::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(TableLoadError::Io { .. })));
    }

    #[test]
    fn load_reports_path_on_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "this is not toml").unwrap();
        match PkaScale::load(&path) {
            Err(TableLoadError::Toml { path: p, .. }) => assert!(p.ends_with("bad.toml")),
            other => panic!("expected TOML error, got {:?}", other),
        }
    }
}
