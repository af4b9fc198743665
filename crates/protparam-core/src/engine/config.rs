use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Parameters of the step-halving isoelectric point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub initial_ph: f64,
    pub initial_step: f64,
    /// The search stops once `|net charge| < epsilon`.
    pub epsilon: f64,
    /// Upper bound on pH moves before giving up with a non-convergence error.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_ph: 7.0,
            initial_step: 3.5,
            epsilon: 0.01,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=14.0).contains(&self.initial_ph) {
            return Err(ConfigError::InvalidParameter {
                name: "initial_ph",
                reason: format!("must lie within [0, 14], got {}", self.initial_ph),
            });
        }
        if !(self.initial_step.is_finite() && self.initial_step > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "initial_step",
                reason: format!("must be a positive number, got {}", self.initial_step),
            });
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "epsilon",
                reason: format!("must be a positive number, got {}", self.epsilon),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub solver: SolverConfig,
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    initial_ph: Option<f64>,
    initial_step: Option<f64>,
    epsilon: Option<f64>,
    max_iterations: Option<usize>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_ph(mut self, ph: f64) -> Self {
        self.initial_ph = Some(ph);
        self
    }
    pub fn initial_step(mut self, step: f64) -> Self {
        self.initial_step = Some(step);
        self
    }
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let solver = SolverConfig {
            initial_ph: self
                .initial_ph
                .ok_or(ConfigError::MissingParameter("initial_ph"))?,
            initial_step: self
                .initial_step
                .ok_or(ConfigError::MissingParameter("initial_step"))?,
            epsilon: self
                .epsilon
                .ok_or(ConfigError::MissingParameter("epsilon"))?,
            max_iterations: self
                .max_iterations
                .ok_or(ConfigError::MissingParameter("max_iterations"))?,
        };
        solver.validate()?;
        Ok(EngineConfig { solver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
            .initial_ph(7.0)
            .initial_step(3.5)
            .epsilon(0.01)
            .max_iterations(100)
    }

    #[test]
    fn build_succeeds_with_all_parameters() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn build_fails_when_parameter_is_missing() {
        let result = EngineConfigBuilder::new()
            .initial_ph(7.0)
            .initial_step(3.5)
            .max_iterations(10)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("epsilon")));
    }

    #[test]
    fn build_rejects_non_positive_epsilon() {
        let result = complete_builder().epsilon(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "epsilon",
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_zero_iterations() {
        let result = complete_builder().max_iterations(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_initial_ph_outside_scale() {
        let config = SolverConfig {
            initial_ph: 15.0,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
        let nan = SolverConfig {
            initial_ph: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_step() {
        let config = SolverConfig {
            initial_step: -1.0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "initial_step",
                ..
            })
        ));
    }
}
