//! Simulation parameters and the adaptive horizon.

use ht_thermal::ThermalInputs;

/// Options for a transient run.
#[derive(Clone, Debug)]
pub struct TransientOptions {
    /// Smallest Euler step (seconds)
    pub base_time_step: f64,
    /// Shortest simulated span (seconds)
    pub min_horizon: f64,
    /// Longest simulated span (seconds)
    pub max_horizon: f64,
    /// Horizon length in convective time constants
    pub time_constants: f64,
    /// Step budget; the step grows once horizon / base step exceeds it
    pub max_steps: usize,
    /// Points kept after downsampling
    pub output_points: usize,
    /// Distance from equilibrium (K) counted as settled
    pub settle_tolerance: f64,
    /// Synthetic points appended after settling
    pub tail_points: usize,
}

impl Default for TransientOptions {
    fn default() -> Self {
        Self {
            base_time_step: 0.1,
            min_horizon: 60.0,
            max_horizon: 1800.0,
            time_constants: 5.0,
            max_steps: 10_000,
            output_points: 200,
            settle_tolerance: 0.01,
            tail_points: 3,
        }
    }
}

impl TransientOptions {
    /// Simulated span: a multiple of the time constant, clamped to
    /// `[min_horizon, max_horizon]`.
    pub fn horizon(&self, inputs: &ThermalInputs) -> f64 {
        let tau = estimate_time_constant(inputs).unwrap_or(self.min_horizon);
        (self.time_constants * tau).clamp(self.min_horizon, self.max_horizon)
    }

    /// Euler step for a given horizon.
    pub fn time_step(&self, horizon: f64) -> f64 {
        let budget = self.max_steps.max(1) as f64;
        self.base_time_step.max(horizon / budget)
    }
}

/// Convective time constant τ = m·c / (h·A_cool).
///
/// Radiation is left out, so τ overestimates the response time of hot bodies.
/// Returns `None` when there is no convective conductance.
pub fn estimate_time_constant(inputs: &ThermalInputs) -> Option<f64> {
    let conductance = inputs.convection_coeff * inputs.cooling_area();
    if conductance > 0.0 {
        Some(inputs.thermal_capacity() / conductance)
    } else {
        None
    }
}
