//! Physical constants used by the thermal engine.

/// Stefan-Boltzmann constant in W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Angular half-width of the solar disc seen from Earth (radians, ~0.267°).
pub const SUN_HALF_ANGLE_RAD: f64 = 4.65e-3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_half_angle_in_degrees() {
        let degrees = SUN_HALF_ANGLE_RAD.to_degrees();
        assert!((degrees - 0.267).abs() < 0.005);
    }
}
