//! Equilibrium temperature of an illuminated object.

use ht_thermal::{ThermalInputs, net_heat_flow, total_heat_loss};
use tracing::debug;

use crate::bisection::{BisectionConfig, bisect, expand_upper_bound};

/// Heat balance at the equilibrium temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilibriumResult {
    /// Equilibrium temperature (K)
    pub temperature: f64,
    /// Absorbed power (W)
    pub absorbed_power: f64,
    /// Convective loss (W)
    pub convection_loss: f64,
    /// Radiative loss (W)
    pub radiation_loss: f64,
    /// Convection + radiation (W)
    pub total_loss: f64,
}

/// Equilibrium temperature (K) with the default solver settings.
pub fn solve_equilibrium_temperature(inputs: &ThermalInputs) -> f64 {
    solve_equilibrium_with(inputs, &BisectionConfig::default())
}

/// Equilibrium temperature (K): the root of the net heat flow above ambient.
///
/// Without absorbed power the object never rises above ambient, and ambient
/// is returned exactly.
pub fn solve_equilibrium_with(inputs: &ThermalInputs, config: &BisectionConfig) -> f64 {
    let ambient = inputs.ambient_temp;
    if inputs.absorbed_power() <= 0.0 {
        debug!(ambient, "no absorbed power, equilibrium is ambient");
        return ambient;
    }

    let net = |t: f64| net_heat_flow(inputs, t);
    let upper = expand_upper_bound(&net, ambient, config);
    let result = bisect(net, ambient, upper, config);

    debug!(
        temperature = result.root,
        residual = result.residual,
        iterations = result.iterations,
        converged = result.converged,
        "equilibrium solved"
    );
    result.root
}

/// Equilibrium temperature plus the heat balance at that temperature.
pub fn calculate_equilibrium(inputs: &ThermalInputs) -> EquilibriumResult {
    calculate_equilibrium_with(inputs, &BisectionConfig::default())
}

pub fn calculate_equilibrium_with(
    inputs: &ThermalInputs,
    config: &BisectionConfig,
) -> EquilibriumResult {
    let temperature = solve_equilibrium_with(inputs, config);
    let loss = total_heat_loss(inputs, temperature);
    EquilibriumResult {
        temperature,
        absorbed_power: inputs.absorbed_power(),
        convection_loss: loss.convection,
        radiation_loss: loss.radiation,
        total_loss: loss.total,
    }
}
