use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the twenty standard amino acids, ordered by one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A (ALA)
    Cysteine,      // C (CYS)
    AsparticAcid,  // D (ASP)
    GlutamicAcid,  // E (GLU)
    Phenylalanine, // F (PHE)
    Glycine,       // G (GLY)
    Histidine,     // H (HIS)
    Isoleucine,    // I (ILE)
    Lysine,        // K (LYS)
    Leucine,       // L (LEU)
    Methionine,    // M (MET)
    Asparagine,    // N (ASN)
    Proline,       // P (PRO)
    Glutamine,     // Q (GLN)
    Arginine,      // R (ARG)
    Serine,        // S (SER)
    Threonine,     // T (THR)
    Valine,        // V (VAL)
    Tryptophan,    // W (TRP)
    Tyrosine,      // Y (TYR)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a standard amino acid code")]
pub struct ParseAminoAcidError(pub String);

impl AminoAcid {
    pub const COUNT: usize = 20;

    pub const ALL: [AminoAcid; Self::COUNT] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    /// Resolves an upper-case one-letter code. Lower-case and ambiguity codes
    /// (`B`, `Z`, `X`, `*`, ...) return `None`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    pub fn three_letter_code(self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Cysteine => "CYS",
            Self::AsparticAcid => "ASP",
            Self::GlutamicAcid => "GLU",
            Self::Phenylalanine => "PHE",
            Self::Glycine => "GLY",
            Self::Histidine => "HIS",
            Self::Isoleucine => "ILE",
            Self::Lysine => "LYS",
            Self::Leucine => "LEU",
            Self::Methionine => "MET",
            Self::Asparagine => "ASN",
            Self::Proline => "PRO",
            Self::Glutamine => "GLN",
            Self::Arginine => "ARG",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Valine => "VAL",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
        }
    }

    /// Dense index in `0..AminoAcid::COUNT`, used to address the reference tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_code(c.to_ascii_uppercase())
                .ok_or_else(|| ParseAminoAcidError(trimmed.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|aa| aa.three_letter_code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAminoAcidError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn code_and_from_code_are_inverse_for_all_residues() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_code(aa.code()), Some(aa));
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i);
        }
    }

    #[test]
    fn all_codes_are_distinct() {
        let codes: HashSet<char> = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        assert_eq!(codes.len(), AminoAcid::COUNT);
    }

    #[test]
    fn from_code_rejects_ambiguous_and_lowercase_codes() {
        for code in ['X', 'B', 'Z', 'J', 'U', 'O', '*', '-', 'a'] {
            assert_eq!(AminoAcid::from_code(code), None, "code {code:?}");
        }
    }

    #[test]
    fn from_str_accepts_one_and_three_letter_codes() {
        assert_eq!("W".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!("w".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!("TRP".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!(" Lys ".parse::<AminoAcid>(), Ok(AminoAcid::Lysine));
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        assert_eq!(
            "XAA".parse::<AminoAcid>(),
            Err(ParseAminoAcidError("XAA".to_string()))
        );
        assert!("".parse::<AminoAcid>().is_err());
        assert!("X".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn display_writes_one_letter_code() {
        assert_eq!(AminoAcid::GlutamicAcid.to_string(), "E");
    }
}
