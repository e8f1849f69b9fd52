//! Closed-form heat-transfer equations.
//!
//! All temperatures are Kelvin: the radiative term is a fourth-power law and
//! does not survive the Celsius offset.

use ht_core::STEFAN_BOLTZMANN;

use crate::inputs::ThermalInputs;

/// Cooling surface of a square-faced cuboid: `A_cool = 2A + 4·√A·d`.
///
/// Two faces of area `A` plus four sides of `√A × d`.
pub fn cooling_area(area: f64, thickness: f64) -> f64 {
    2.0 * area + 4.0 * area.sqrt() * thickness
}

/// `P_abs = E · A · α` (W).
pub fn absorbed_power(irradiance: f64, area: f64, absorptivity: f64) -> f64 {
    irradiance * area * absorptivity
}

/// `P_conv = h · A_cool · (T − T_amb)` (W). Negative below ambient.
pub fn convection_loss(
    convection_coeff: f64,
    cooling_area: f64,
    temperature: f64,
    ambient: f64,
) -> f64 {
    convection_coeff * cooling_area * (temperature - ambient)
}

/// `P_rad = ε · σ · A_cool · (T⁴ − T_amb⁴)` (W).
pub fn radiation_loss(emissivity: f64, cooling_area: f64, temperature: f64, ambient: f64) -> f64 {
    emissivity * STEFAN_BOLTZMANN * cooling_area * (temperature.powi(4) - ambient.powi(4))
}

/// Breakdown of heat loss at one temperature (W).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatLoss {
    pub convection: f64,
    pub radiation: f64,
    pub total: f64,
}

pub fn total_heat_loss(inputs: &ThermalInputs, temperature: f64) -> HeatLoss {
    let a_cool = inputs.cooling_area();
    let convection =
        convection_loss(inputs.convection_coeff, a_cool, temperature, inputs.ambient_temp);
    let radiation = radiation_loss(inputs.emissivity, a_cool, temperature, inputs.ambient_temp);
    HeatLoss {
        convection,
        radiation,
        total: convection + radiation,
    }
}

/// `dQ/dt = P_abs − (P_conv + P_rad)` (W). Positive means net heating.
pub fn net_heat_flow(inputs: &ThermalInputs, temperature: f64) -> f64 {
    inputs.absorbed_power() - total_heat_loss(inputs, temperature).total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate() -> ThermalInputs {
        ThermalInputs {
            irradiance: 1000.0,
            area: 0.01,
            illuminated_area: None,
            thickness: 0.01,
            mass: 0.1,
            absorptivity: 0.85,
            emissivity: 0.85,
            convection_coeff: 10.0,
            specific_heat: 500.0,
            ambient_temp: 293.15,
        }
    }

    #[test]
    fn cooling_area_of_small_plate() {
        assert!((cooling_area(0.01, 0.01) - 0.024).abs() < 1e-9);
    }

    #[test]
    fn cooling_area_of_thin_sheet() {
        assert!((cooling_area(1.0, 0.001) - 2.004).abs() < 1e-9);
    }

    #[test]
    fn cooling_area_without_thickness_is_two_faces() {
        assert_eq!(cooling_area(0.01, 0.0), 0.02);
    }

    #[test]
    fn absorbed_power_values() {
        assert!((absorbed_power(1000.0, 0.01, 0.9) - 9.0).abs() < 1e-9);
        assert!((absorbed_power(1000.0, 0.1, 0.85) - 85.0).abs() < 1e-9);
        assert_eq!(absorbed_power(0.0, 0.01, 0.9), 0.0);
        assert_eq!(absorbed_power(1000.0, 0.01, 0.0), 0.0);
    }

    #[test]
    fn convection_loss_values() {
        assert!((convection_loss(10.0, 0.024, 323.15, 273.15) - 12.0).abs() < 1e-9);
        assert_eq!(convection_loss(10.0, 0.024, 293.15, 293.15), 0.0);
        assert!(convection_loss(10.0, 0.024, 273.15, 293.15) < 0.0);
    }

    #[test]
    fn radiation_loss_matches_stefan_boltzmann() {
        let expected = 0.9 * STEFAN_BOLTZMANN * 0.024 * (373.15_f64.powi(4) - 293.15_f64.powi(4));
        let loss = radiation_loss(0.9, 0.024, 373.15, 293.15);
        assert!((loss - expected).abs() < 1e-9);
        assert_eq!(radiation_loss(0.9, 0.024, 293.15, 293.15), 0.0);
    }

    #[test]
    fn radiation_is_superlinear_in_temperature_rise() {
        let t_amb = 293.15;
        let loss_50 = radiation_loss(0.9, 0.024, t_amb + 50.0, t_amb);
        let loss_100 = radiation_loss(0.9, 0.024, t_amb + 100.0, t_amb);
        assert!(loss_100 / loss_50 > 2.0);
    }

    #[test]
    fn reference_plate_absorbs_eight_and_a_half_watts() {
        let inputs = plate();
        assert!((inputs.cooling_area() - 0.024).abs() < 1e-9);
        assert!((inputs.absorbed_power() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn total_loss_is_sum_of_parts() {
        let loss = total_heat_loss(&plate(), 320.0);
        assert!(loss.convection > 0.0);
        assert!(loss.radiation > 0.0);
        assert_eq!(loss.total, loss.convection + loss.radiation);
    }

    #[test]
    fn net_flow_at_ambient_is_absorbed_power() {
        let inputs = plate();
        assert_eq!(net_heat_flow(&inputs, inputs.ambient_temp), inputs.absorbed_power());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cooling_area_formula(area in 1e-6_f64..10.0, thickness in 0.0_f64..1.0) {
            let expected = 2.0 * area + 4.0 * area.sqrt() * thickness;
            let error = (cooling_area(area, thickness) - expected).abs();
            prop_assert!(error <= 1e-12 * expected.max(1.0));
            prop_assert!(cooling_area(area, thickness) >= 2.0 * area);
        }

        #[test]
        fn absorbed_power_is_linear(
            e in 0.0_f64..5000.0,
            area in 0.0_f64..2.0,
            alpha in 0.0_f64..1.0,
            scale in 0.0_f64..10.0,
        ) {
            let base = absorbed_power(e, area, alpha);
            let tol = 1e-9 * (1.0 + base * scale);
            prop_assert!((absorbed_power(scale * e, area, alpha) - scale * base).abs() <= tol);
            prop_assert!((absorbed_power(e, scale * area, alpha) - scale * base).abs() <= tol);
            prop_assert!((absorbed_power(e, area, scale * alpha) - scale * base).abs() <= tol);
        }
    }
}
