//! Equilibrium plus transient for one set of inputs.

use ht_solver::{BisectionConfig, EquilibriumResult, calculate_equilibrium_with};
use ht_thermal::ThermalInputs;

use crate::options::TransientOptions;
use crate::transient::{TransientResult, simulate_transient_with};

/// Full answer for one illuminated object.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub equilibrium: EquilibriumResult,
    pub transient: TransientResult,
}

pub fn calculate(inputs: &ThermalInputs) -> CalculationResult {
    calculate_with(inputs, &BisectionConfig::default(), &TransientOptions::default())
}

/// The transient run targets the temperature found by the solver, so both
/// halves agree on where the body ends up.
pub fn calculate_with(
    inputs: &ThermalInputs,
    solver: &BisectionConfig,
    opts: &TransientOptions,
) -> CalculationResult {
    let equilibrium = calculate_equilibrium_with(inputs, solver);
    let transient = simulate_transient_with(inputs, equilibrium.temperature, opts);
    CalculationResult {
        equilibrium,
        transient,
    }
}
