//! Lazy Euler trajectory of a lumped body.

use std::iter::FusedIterator;

use tracing::debug;

use crate::integrator::{ForwardEuler, Integrator};
use crate::milestones::MilestoneTracker;
use crate::model::{LumpedBody, TransientModel};
use crate::options::TransientOptions;
use crate::transient::TimePoint;

#[derive(Clone, Copy, Debug)]
enum Phase {
    Stepping,
    Settling { from: f64, emitted: usize },
    Done,
}

/// Yields one [`TimePoint`] per Euler step, starting at (0, ambient).
///
/// Stepping continues while `t ≤ horizon`. Once the 99 % milestone is latched
/// and the body sits within the settle tolerance of equilibrium, a few points
/// at the equilibrium temperature are spread up to the horizon and the
/// iterator ends.
pub struct Trajectory<'a, I: Integrator = ForwardEuler> {
    model: LumpedBody<'a>,
    integrator: I,
    equilibrium: f64,
    horizon: f64,
    dt: f64,
    settle_tolerance: f64,
    tail_points: usize,
    time: f64,
    temperature: f64,
    steps: usize,
    milestones: MilestoneTracker,
    settled: bool,
    phase: Phase,
}

impl<'a> Trajectory<'a, ForwardEuler> {
    pub fn new(model: LumpedBody<'a>, equilibrium: f64, opts: &TransientOptions) -> Self {
        Self::with_integrator(model, ForwardEuler, equilibrium, opts)
    }
}

impl<'a, I: Integrator> Trajectory<'a, I> {
    pub fn with_integrator(
        model: LumpedBody<'a>,
        integrator: I,
        equilibrium: f64,
        opts: &TransientOptions,
    ) -> Self {
        let horizon = opts.horizon(model.inputs());
        let dt = opts.time_step(horizon);
        let temperature = model.initial_state();
        debug!(horizon, dt, capacity = model.capacity(), "transient horizon selected");
        Self {
            milestones: MilestoneTracker::new(temperature, equilibrium),
            model,
            integrator,
            equilibrium,
            horizon,
            dt,
            settle_tolerance: opts.settle_tolerance,
            tail_points: opts.tail_points,
            time: 0.0,
            temperature,
            steps: 0,
            settled: false,
            phase: Phase::Stepping,
        }
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// Euler steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn milestones(&self) -> &MilestoneTracker {
        &self.milestones
    }

    /// True once the run stopped on the settle criterion rather than the horizon.
    pub fn settled(&self) -> bool {
        self.settled
    }

    fn tail_point(&mut self, from: f64, emitted: usize) -> Option<TimePoint> {
        if emitted >= self.tail_points {
            self.phase = Phase::Done;
            return None;
        }
        let emitted = emitted + 1;
        let fraction = emitted as f64 / self.tail_points as f64;
        self.phase = if emitted == self.tail_points {
            Phase::Done
        } else {
            Phase::Settling { from, emitted }
        };
        Some(TimePoint {
            time: from + (self.horizon - from) * fraction,
            temperature: self.equilibrium,
        })
    }
}

impl<I: Integrator> Iterator for Trajectory<'_, I> {
    type Item = TimePoint;

    fn next(&mut self) -> Option<TimePoint> {
        match self.phase {
            Phase::Done => None,
            Phase::Settling { from, emitted } => self.tail_point(from, emitted),
            Phase::Stepping => {
                // A NaN horizon (∞/∞ time constant) ends the run at once.
                if self.horizon.is_nan() || self.time > self.horizon {
                    self.phase = Phase::Done;
                    return None;
                }

                let point = TimePoint {
                    time: self.time,
                    temperature: self.temperature,
                };
                self.milestones.observe(point.time, point.temperature);

                if self.milestones.final_reached()
                    && (self.temperature - self.equilibrium).abs() < self.settle_tolerance
                {
                    debug!(time = self.time, steps = self.steps, "settled at equilibrium");
                    self.settled = true;
                    self.phase = if self.tail_points > 0 {
                        Phase::Settling {
                            from: self.time,
                            emitted: 0,
                        }
                    } else {
                        Phase::Done
                    };
                    return Some(point);
                }

                let next = self.integrator.step(&self.model, self.time, &self.temperature, self.dt);
                self.temperature = next;
                self.time += self.dt;
                self.steps += 1;
                Some(point)
            }
        }
    }
}

impl<I: Integrator> FusedIterator for Trajectory<'_, I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ht_thermal::ThermalInputs;

    fn plate() -> ThermalInputs {
        ThermalInputs {
            irradiance: 1000.0,
            area: 0.01,
            illuminated_area: None,
            thickness: 0.01,
            mass: 0.01,
            absorptivity: 0.85,
            emissivity: 0.85,
            convection_coeff: 10.0,
            specific_heat: 500.0,
            ambient_temp: 293.15,
        }
    }

    #[test]
    fn dark_body_settles_immediately() {
        let mut inputs = plate();
        inputs.irradiance = 0.0;
        let body = LumpedBody::new(&inputs).unwrap();
        let mut traj = Trajectory::new(body, inputs.ambient_temp, &TransientOptions::default());
        let horizon = traj.horizon();

        let points: Vec<_> = traj.by_ref().collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], TimePoint { time: 0.0, temperature: 293.15 });
        assert!((points[3].time - horizon).abs() < 1e-9);
        assert!(points.iter().all(|p| p.temperature == 293.15));
        assert!(traj.settled());
        assert_eq!(traj.steps(), 0);
        assert!(traj.next().is_none());
    }

    #[test]
    fn unsettled_run_stops_at_horizon() {
        let inputs = plate();
        let body = LumpedBody::new(&inputs).unwrap();
        // Equilibrium far above anything reachable keeps the run going.
        let opts = TransientOptions::default();
        let mut traj = Trajectory::new(body, 10_000.0, &opts);
        let horizon = traj.horizon();
        let dt = traj.time_step();

        let last = traj.by_ref().last().unwrap();
        assert!(last.time <= horizon);
        assert!(horizon - last.time < dt + 1e-9);
        assert!(!traj.settled());
    }

    #[test]
    fn times_never_decrease() {
        let inputs = plate();
        let body = LumpedBody::new(&inputs).unwrap();
        let eq = ht_solver::solve_equilibrium_temperature(&inputs);
        let traj = Trajectory::new(body, eq, &TransientOptions::default());
        let points: Vec<_> = traj.collect();
        assert!(points.windows(2).all(|w| w[0].time <= w[1].time));
    }

    #[test]
    fn undefined_horizon_ends_at_once() {
        let mut inputs = plate();
        inputs.mass = f64::INFINITY;
        inputs.convection_coeff = f64::INFINITY;
        let body = LumpedBody::new(&inputs).unwrap();
        let opts = TransientOptions::default();
        let mut traj = Trajectory::new(body, inputs.ambient_temp, &opts);
        assert!(traj.horizon().is_nan());

        let count = traj.by_ref().take(opts.max_steps + 2).count();
        assert_eq!(count, 0);
        assert_eq!(traj.steps(), 0);
        assert!(traj.next().is_none());
    }
}
