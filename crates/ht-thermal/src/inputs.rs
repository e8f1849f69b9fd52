//! Inputs of a single thermal calculation.

use crate::equations;

/// Thermal, optical and geometric description of the object and its
/// surroundings. All values are SI; temperatures are Kelvin.
///
/// No cross-field validation happens here: out-of-range values flow through
/// the equations and produce numerically defined results.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalInputs {
    /// Effective irradiance at the surface (W/m²)
    pub irradiance: f64,
    /// Object face area (m²), drives the cooling geometry
    pub area: f64,
    /// Lit part of the face (m²); the full face when `None`
    pub illuminated_area: Option<f64>,
    /// Thickness (m)
    pub thickness: f64,
    /// Mass (kg)
    pub mass: f64,
    pub absorptivity: f64,
    pub emissivity: f64,
    /// Convection coefficient (W/(m²·K))
    pub convection_coeff: f64,
    /// Specific heat capacity (J/(kg·K))
    pub specific_heat: f64,
    /// Ambient temperature (K)
    pub ambient_temp: f64,
}

impl ThermalInputs {
    /// Area used for absorbed power.
    pub fn illuminated_area(&self) -> f64 {
        self.illuminated_area.unwrap_or(self.area)
    }

    /// Surface losing heat, always from the full face area.
    pub fn cooling_area(&self) -> f64 {
        equations::cooling_area(self.area, self.thickness)
    }

    /// Heat capacity `m·c` (J/K).
    pub fn thermal_capacity(&self) -> f64 {
        self.mass * self.specific_heat
    }

    /// Absorbed light power (W).
    pub fn absorbed_power(&self) -> f64 {
        equations::absorbed_power(self.irradiance, self.illuminated_area(), self.absorptivity)
    }
}
