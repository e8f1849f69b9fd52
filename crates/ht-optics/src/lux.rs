//! Illuminance to irradiance conversions.

/// Convert illuminance to irradiance: `E = L / K`.
///
/// `k_factor` is the lux per W/m² ratio of the light source. A non-positive
/// K-factor yields 0 instead of dividing by zero.
pub fn lux_to_irradiance(lux: f64, k_factor: f64) -> f64 {
    if k_factor <= 0.0 {
        return 0.0;
    }
    lux / k_factor
}

/// Total attenuation of stacked ND filters (product of the factors).
pub fn nd_attenuation(filters: &[f64]) -> f64 {
    filters.iter().product()
}

/// Irradiance from a lux reading taken behind ND filters.
pub fn lux_with_nd_to_irradiance(measured_lux: f64, filters: &[f64], k_factor: f64) -> f64 {
    lux_to_irradiance(measured_lux * nd_attenuation(filters), k_factor)
}
