use super::residue::AminoAcid;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Unknown residue code '{code}' at position {position}")]
    UnknownResidue { code: char, position: usize },

    #[error("Sequence is empty")]
    Empty,
}

/// An ordered, non-empty chain of standard amino acids.
///
/// Every residue is resolved at construction time, so downstream table lookups
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AminoAcidSequence {
    residues: Vec<AminoAcid>,
}

impl AminoAcidSequence {
    pub fn new(residues: Vec<AminoAcid>) -> Result<Self, SequenceError> {
        if residues.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { residues })
    }

    /// Parses one-letter codes. Input is upper-cased and whitespace is skipped;
    /// positions in errors are 1-based over the non-whitespace characters.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let residues = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(i, c)| {
                let code = c.to_ascii_uppercase();
                AminoAcid::from_code(code).ok_or(SequenceError::UnknownResidue {
                    code,
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(residues)
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn n_terminal(&self) -> AminoAcid {
        self.residues[0]
    }

    pub fn composition(&self) -> Composition {
        let mut counts = [0usize; AminoAcid::COUNT];
        for aa in &self.residues {
            counts[aa.index()] += 1;
        }
        Composition { counts }
    }

    /// Adjacent `(seq[i], seq[i + 1])` pairs in sequence order.
    pub fn dipeptides(&self) -> impl Iterator<Item = (AminoAcid, AminoAcid)> + '_ {
        self.residues.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl FromStr for AminoAcidSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AminoAcidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aa in &self.residues {
            write!(f, "{}", aa.code())?;
        }
        Ok(())
    }
}

/// Per-residue counts of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    counts: [usize; AminoAcid::COUNT],
}

impl Composition {
    #[inline]
    pub fn get(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        AminoAcid::ALL.iter().map(|&aa| (aa, self.counts[aa.index()]))
    }
}
