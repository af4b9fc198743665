use super::calculators::charge::ChargeModel;
use super::calculators::{aliphatic, extinction, half_life, instability, isoelectric, mass};
use super::config::EngineConfig;
use super::error::EngineError;
use crate::core::models::profile::PhysicochemicalProfile;
use crate::core::models::sequence::AminoAcidSequence;
use crate::core::tables::ReferenceTables;
use tracing::{debug, instrument};

/// Computes the full [`PhysicochemicalProfile`] of a sequence.
///
/// The engine only borrows its tables and holds a copy of the configuration, so
/// one instance can be shared by reference across worker threads.
#[derive(Debug, Clone)]
pub struct PropertyEngine<'a> {
    tables: &'a ReferenceTables,
    config: EngineConfig,
}

impl<'a> PropertyEngine<'a> {
    pub fn new(tables: &'a ReferenceTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[instrument(level = "debug", skip_all, fields(id = %id, length = seq.len()))]
    pub fn profile(
        &self,
        id: &str,
        seq: &AminoAcidSequence,
    ) -> Result<PhysicochemicalProfile, EngineError> {
        let charge_model = ChargeModel::from_sequence(seq, self.tables);
        let pi = isoelectric::solve(&charge_model, &self.config.solver)?;
        debug!(
            pi = pi.ph,
            iterations = pi.iterations,
            "Isoelectric point converged."
        );

        Ok(PhysicochemicalProfile {
            id: id.to_string(),
            sequence: seq.to_string(),
            length: seq.len(),
            molecular_weight: mass::molecular_weight(seq, self.tables),
            isoelectric_point: pi.ph,
            extinction_coefficient: extinction::mass_normalized(seq, self.tables),
            instability_index: instability::index(seq, self.tables),
            aliphatic_index: aliphatic::index(seq),
            half_life: half_life::classify(seq.n_terminal(), self.tables),
        })
    }

    /// Parses `raw` and profiles it. Unknown residue codes and empty input
    /// fail with [`EngineError::InvalidSequence`] before any property is computed.
    pub fn profile_raw(
        &self,
        id: &str,
        raw: &str,
    ) -> Result<PhysicochemicalProfile, EngineError> {
        let seq = AminoAcidSequence::parse(raw)?;
        self.profile(id, &seq)
    }
}
