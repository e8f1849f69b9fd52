//! Transient heating run: trajectory, milestones and downsampled series.

use ht_solver::solve_equilibrium_temperature;
use ht_thermal::ThermalInputs;
use tracing::debug;

use crate::downsample::downsample;
use crate::milestones::MilestoneTimes;
use crate::model::LumpedBody;
use crate::options::TransientOptions;
use crate::trajectory::Trajectory;

/// One sample of the temperature history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    /// Seconds since exposure began
    pub time: f64,
    /// Body temperature (K)
    pub temperature: f64,
}

/// Outcome of a transient run.
#[derive(Clone, Debug, PartialEq)]
pub struct TransientResult {
    /// Downsampled history, first point at (0, ambient)
    pub time_series: Vec<TimePoint>,
    pub milestones: MilestoneTimes,
    /// Simulated span (seconds); 0 when nothing was integrated
    pub horizon: f64,
    /// Euler step (seconds)
    pub time_step: f64,
    /// Euler steps actually taken
    pub steps: usize,
    /// Run ended on the settle criterion before the horizon
    pub settled: bool,
}

impl TransientResult {
    /// Result for a body that is never stepped: it stays at ambient.
    fn at_ambient(ambient: f64) -> Self {
        Self {
            time_series: vec![TimePoint {
                time: 0.0,
                temperature: ambient,
            }],
            milestones: MilestoneTimes::zero(),
            horizon: 0.0,
            time_step: 0.0,
            steps: 0,
            settled: false,
        }
    }
}

/// Simulate heating from ambient with default options.
pub fn simulate_transient(inputs: &ThermalInputs) -> TransientResult {
    let equilibrium = solve_equilibrium_temperature(inputs);
    simulate_transient_with(inputs, equilibrium, &TransientOptions::default())
}

/// Simulate heating from ambient toward a known equilibrium temperature.
pub fn simulate_transient_with(
    inputs: &ThermalInputs,
    equilibrium: f64,
    opts: &TransientOptions,
) -> TransientResult {
    let Some(body) = LumpedBody::new(inputs) else {
        debug!(
            mass = inputs.mass,
            specific_heat = inputs.specific_heat,
            "no thermal capacity, holding at ambient"
        );
        return TransientResult::at_ambient(inputs.ambient_temp);
    };

    let mut trajectory = Trajectory::new(body, equilibrium, opts);
    let raw: Vec<TimePoint> = trajectory.by_ref().collect();
    let horizon = trajectory.horizon();
    debug!(
        raw_points = raw.len(),
        steps = trajectory.steps(),
        settled = trajectory.settled(),
        "transient run finished"
    );

    if raw.is_empty() {
        debug!(horizon, "no usable horizon, holding at ambient");
        return TransientResult::at_ambient(inputs.ambient_temp);
    }

    TransientResult {
        time_series: downsample(raw, opts.output_points),
        milestones: trajectory.milestones().finish(horizon),
        horizon,
        time_step: trajectory.time_step(),
        steps: trajectory.steps(),
        settled: trajectory.settled(),
    }
}
