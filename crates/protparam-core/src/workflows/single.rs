use crate::core::io::traits::SequenceRecord;
use crate::core::models::profile::PhysicochemicalProfile;
use crate::engine::error::EngineError;
use crate::engine::profiler::PropertyEngine;
use tracing::{info, instrument};

#[instrument(skip_all, name = "single_workflow", fields(id = %record.id))]
pub fn run(
    record: &SequenceRecord,
    engine: &PropertyEngine,
) -> Result<PhysicochemicalProfile, EngineError> {
    let profile = engine.profile_raw(&record.id, &record.sequence)?;
    info!(
        length = profile.length,
        pi = profile.isoelectric_point,
        "Profiled sequence."
    );
    Ok(profile)
}
