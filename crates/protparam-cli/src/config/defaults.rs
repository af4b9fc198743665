use protparam::engine::config::SolverConfig;

/// Values used when neither the command line nor the config file set a key.
pub struct DefaultsConfig {
    pub initial_ph: f64,
    pub initial_step: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let solver = SolverConfig::default();
        Self {
            initial_ph: solver.initial_ph,
            initial_step: solver.initial_step,
            epsilon: solver.epsilon,
            max_iterations: solver.max_iterations,
        }
    }
}
