pub mod defaults;
pub mod file;

use crate::cli::EngineArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use file::PartialConfig;
use protparam::core::tables::ReferenceTables;
use protparam::engine::config::{EngineConfig, EngineConfigBuilder};
use protparam::engine::error::EngineError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Fully resolved settings for one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub pka_scale: Option<PathBuf>,
}

impl AppConfig {
    /// Merges, from highest to lowest precedence, dedicated CLI flags, `--set`
    /// values, the config file and the built-in defaults.
    pub fn from_args(args: &EngineArgs) -> Result<Self> {
        let mut partial = match &args.config {
            Some(path) => PartialConfig::from_file(path)?,
            None => PartialConfig::default(),
        };
        partial.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let solver = partial.solver.unwrap_or_default();

        let engine = EngineConfigBuilder::new()
            .initial_ph(solver.initial_ph.unwrap_or(defaults.initial_ph))
            .initial_step(solver.initial_step.unwrap_or(defaults.initial_step))
            .epsilon(args.epsilon.or(solver.epsilon).unwrap_or(defaults.epsilon))
            .max_iterations(
                args.max_iterations
                    .or(solver.max_iterations)
                    .unwrap_or(defaults.max_iterations),
            )
            .build()
            .map_err(EngineError::from)?;
        debug!("Resolved engine configuration: {:?}", engine);

        Ok(Self {
            engine,
            pka_scale: args.pka_scale.clone().or(partial.pka_scale),
        })
    }

    /// The reference tables to compute with: standard ones unless a custom pKa
    /// scale was configured.
    pub fn load_tables(&self) -> Result<ReferenceTables> {
        match &self.pka_scale {
            Some(path) => {
                info!("Loading pKa scale from {:?}", path);
                ReferenceTables::load_with_pka_scale(path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })
            }
            None => Ok(ReferenceTables::standard().clone()),
        }
    }
}
