//! TransientModel trait and the lumped-body model.

use ht_thermal::{ThermalInputs, net_heat_flow};

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> Self::State;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}

/// Single uniform-temperature body heated by light.
///
/// State is the body temperature in Kelvin, starting at ambient.
pub struct LumpedBody<'a> {
    inputs: &'a ThermalInputs,
    capacity: f64,
}

impl<'a> LumpedBody<'a> {
    /// Returns `None` when the body has no thermal capacity to integrate.
    pub fn new(inputs: &'a ThermalInputs) -> Option<Self> {
        let capacity = inputs.thermal_capacity();
        if capacity > 0.0 {
            Some(Self { inputs, capacity })
        } else {
            None
        }
    }

    pub fn inputs(&self) -> &ThermalInputs {
        self.inputs
    }

    /// Heat capacity m·c (J/K).
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

impl TransientModel for LumpedBody<'_> {
    type State = f64;

    fn initial_state(&self) -> f64 {
        self.inputs.ambient_temp
    }

    fn rhs(&self, _t: f64, temperature: &f64) -> f64 {
        net_heat_flow(self.inputs, *temperature) / self.capacity
    }

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn scale(&self, a: &f64, scale: f64) -> f64 {
        a * scale
    }
}
