use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSolverConfig {
    pub initial_ph: Option<f64>,
    pub initial_step: Option<f64>,
    pub epsilon: Option<f64>,
    pub max_iterations: Option<usize>,
}

/// The TOML configuration file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialConfig {
    pub solver: Option<PartialSolverConfig>,
    pub pka_scale: Option<PathBuf>,
}

impl PartialConfig {
    /// Reads a config file. A relative `pka-scale` is taken relative to the
    /// directory holding the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        if let (Some(scale), Some(base)) = (config.pka_scale.as_mut(), path.parent()) {
            if scale.is_relative() {
                *scale = base.join(&*scale);
            }
        }
        Ok(config)
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "solver.initial-ph" => {
                    self.solver_mut().initial_ph = Some(parse_value(key, value_str, "float")?);
                }
                "solver.initial-step" => {
                    self.solver_mut().initial_step = Some(parse_value(key, value_str, "float")?);
                }
                "solver.epsilon" => {
                    self.solver_mut().epsilon = Some(parse_value(key, value_str, "float")?);
                }
                "solver.max-iterations" => {
                    self.solver_mut().max_iterations =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "pka-scale" => {
                    self.pka_scale = Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn solver_mut(&mut self) -> &mut PartialSolverConfig {
        self.solver.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}
