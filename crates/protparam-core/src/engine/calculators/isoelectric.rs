use super::charge::ChargeModel;
use crate::core::utils::numeric::round_to;
use crate::engine::config::SolverConfig;
use crate::engine::error::EngineError;
use tracing::{instrument, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoelectricPoint {
    /// pI rounded to two decimals.
    pub ph: f64,
    pub unrounded_ph: f64,
    /// Net charge at `unrounded_ph`; below the solver epsilon in magnitude.
    pub residual_charge: f64,
    pub iterations: usize,
}

/// Finds the pH of zero net charge by step-halving descent.
///
/// Starting at `initial_ph`, the pH moves up by the current step while the
/// charge is positive and down while it is negative, halving the step after
/// every move. This assumes the charge decreases monotonically with pH. The
/// search fails with [`EngineError::NonConvergence`] once `max_iterations`
/// moves have been made without `|charge| < epsilon`, which happens when the
/// true pI lies outside the reachable window `initial_ph ± 2 * initial_step`.
#[instrument(level = "trace", skip_all)]
pub fn solve(model: &ChargeModel, config: &SolverConfig) -> Result<IsoelectricPoint, EngineError> {
    let mut ph = config.initial_ph;
    let mut step = config.initial_step;
    let mut charge = model.net_charge(ph);
    let mut iterations = 0;

    // Written as a negated comparison so that a NaN charge keeps searching
    // and ends in NonConvergence.
    while !(charge.abs() < config.epsilon) {
        if iterations >= config.max_iterations {
            return Err(EngineError::NonConvergence {
                iterations,
                ph,
                charge,
            });
        }
        ph += if charge > 0.0 { step } else { -step };
        charge = model.net_charge(ph);
        step /= 2.0;
        iterations += 1;
        trace!(iterations, ph, charge, "pI search step");
    }

    Ok(IsoelectricPoint {
        ph: round_to(ph, 2),
        unrounded_ph: ph,
        residual_charge: charge,
        iterations,
    })
}
