//! Transient simulation of an illuminated lumped body.
//!
//! Provides:
//! - TransientModel trait and the lumped-body model dT/dt = net / (m·c)
//! - Explicit (forward) Euler integrator
//! - Adaptive horizon and step size from the convective time constant
//! - Lazy trajectory iterator with milestone latching and early settling
//! - Index-based downsampling of the recorded series
//! - `calculate`: equilibrium + transient for one set of inputs

pub mod calculation;
pub mod downsample;
pub mod integrator;
pub mod milestones;
pub mod model;
pub mod options;
pub mod trajectory;
pub mod transient;

pub use calculation::{CalculationResult, calculate, calculate_with};
pub use downsample::downsample;
pub use integrator::{ForwardEuler, Integrator};
pub use milestones::{MILESTONE_FRACTIONS, MilestoneTimes, MilestoneTracker};
pub use model::{LumpedBody, TransientModel};
pub use options::{TransientOptions, estimate_time_constant};
pub use trajectory::Trajectory;
pub use transient::{TimePoint, TransientResult, simulate_transient, simulate_transient_with};
