//! Steady-state (equilibrium) solver for the lumped thermal model.
//!
//! The equilibrium temperature is the root of the net heat flow. Net flow is
//! non-negative at ambient and eventually negative as losses grow with
//! temperature, so a bracketing bisection always terminates with a value.

pub mod bisection;
pub mod equilibrium;

pub use bisection::{BisectionConfig, BisectionResult, bisect, expand_upper_bound};
pub use equilibrium::{
    EquilibriumResult, calculate_equilibrium, calculate_equilibrium_with,
    solve_equilibrium_temperature, solve_equilibrium_with,
};
