//! Light-input record and its normalization to effective irradiance.

use ht_core::deg;
use uom::si::angle::radian;

use crate::lux::{lux_to_irradiance, lux_with_nd_to_irradiance};
use crate::spot::{SpotGeometry, effective_illuminated_area, spot_geometry};

/// How the light level was measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightMode {
    /// Irradiance entered directly in W/m².
    #[default]
    Direct,
    /// Lux meter reading, converted with the K-factor.
    Lux,
    /// Lux meter reading taken behind ND filters.
    LuxNd,
}

impl LightMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LightMode::Direct => "direct",
            LightMode::Lux => "lux",
            LightMode::LuxNd => "lux-nd",
        }
    }
}

/// Optional mirror reflection in front of the target.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectionInput {
    pub enabled: bool,
    /// Reflectance of each mirror, percent (0-100)
    pub reflectance_pct: f64,
    /// Number of mirrors aimed at the target
    pub reflector_count: u32,
    /// Mirror side length (m)
    pub mirror_size: Option<f64>,
    /// Mirror-to-target distance (m)
    pub distance: Option<f64>,
}

impl ReflectionInput {
    /// No mirror in the light path.
    pub fn none() -> Self {
        Self {
            enabled: false,
            reflectance_pct: 100.0,
            reflector_count: 1,
            mirror_size: None,
            distance: None,
        }
    }

    /// Spot geometry, known only when reflection is on and both mirror size
    /// and distance are given.
    pub fn spot(&self) -> Option<SpotGeometry> {
        if !self.enabled {
            return None;
        }
        match (self.mirror_size, self.distance) {
            (Some(size), Some(distance)) => Some(spot_geometry(size, distance)),
            _ => None,
        }
    }

    /// Irradiance gain of the mirror bank: reflectance fraction × count.
    pub fn gain(&self) -> f64 {
        self.reflectance_pct / 100.0 * f64::from(self.reflector_count)
    }
}

/// Light configuration as entered by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct LightInput {
    pub mode: LightMode,
    /// Direct irradiance (W/m²)
    pub irradiance: f64,
    /// Lux reading
    pub lux: f64,
    /// Lux per W/m²
    pub k_factor: f64,
    /// ND filter attenuation factors
    pub nd_filters: Vec<f64>,
    pub reflection: ReflectionInput,
    /// Angle between the light and the surface normal (degrees)
    pub incidence_angle_deg: f64,
}

impl LightInput {
    /// Perpendicular direct light of the given irradiance.
    pub fn direct(irradiance: f64) -> Self {
        Self {
            mode: LightMode::Direct,
            irradiance,
            lux: 0.0,
            k_factor: 0.0,
            nd_filters: Vec::new(),
            reflection: ReflectionInput::none(),
            incidence_angle_deg: 0.0,
        }
    }

    /// Irradiance implied by the measurement mode, before reflection and angle.
    pub fn base_irradiance(&self) -> f64 {
        match self.mode {
            LightMode::Direct => self.irradiance,
            LightMode::Lux => lux_to_irradiance(self.lux, self.k_factor),
            LightMode::LuxNd => {
                lux_with_nd_to_irradiance(self.lux, &self.nd_filters, self.k_factor)
            }
        }
    }
}

/// `cos(φ)` for an incidence angle given in degrees.
pub fn incidence_multiplier(angle_deg: f64) -> f64 {
    deg(angle_deg).get::<radian>().cos()
}

/// Irradiance reaching the object surface.
pub fn effective_irradiance(light: &LightInput) -> f64 {
    let mut irradiance = light.base_irradiance();

    if light.reflection.enabled {
        irradiance *= light.reflection.gain();
        if let Some(spot) = light.reflection.spot() {
            irradiance *= spot.concentration_factor;
        }
    }

    irradiance * incidence_multiplier(light.incidence_angle_deg)
}

/// Illuminated part of an object of face area `object_area` (m²).
pub fn effective_illuminated_area_for(light: &LightInput, object_area: f64) -> f64 {
    effective_illuminated_area(object_area, light.reflection.spot().as_ref())
}

/// Everything the thermal engine needs from the light configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedLight {
    /// Effective irradiance at the surface (W/m²)
    pub irradiance: f64,
    /// Illuminated area (m²)
    pub illuminated_area: f64,
    pub incidence_multiplier: f64,
    pub spot: Option<SpotGeometry>,
}

pub fn normalize(light: &LightInput, object_area: f64) -> NormalizedLight {
    let spot = light.reflection.spot();
    NormalizedLight {
        irradiance: effective_irradiance(light),
        illuminated_area: effective_illuminated_area(object_area, spot.as_ref()),
        incidence_multiplier: incidence_multiplier(light.incidence_angle_deg),
        spot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lux_light(mode: LightMode) -> LightInput {
        LightInput {
            mode,
            irradiance: 999.0,
            lux: 1000.0,
            k_factor: 100.0,
            nd_filters: vec![64.0],
            reflection: ReflectionInput::none(),
            incidence_angle_deg: 0.0,
        }
    }

    fn mirror(size: Option<f64>, distance: Option<f64>) -> ReflectionInput {
        ReflectionInput {
            enabled: true,
            reflectance_pct: 90.0,
            reflector_count: 2,
            mirror_size: size,
            distance,
        }
    }

    #[test]
    fn mode_selects_base_irradiance() {
        assert_eq!(lux_light(LightMode::Direct).base_irradiance(), 999.0);
        assert_eq!(lux_light(LightMode::Lux).base_irradiance(), 10.0);
        assert_eq!(lux_light(LightMode::LuxNd).base_irradiance(), 640.0);
    }

    #[test]
    fn perpendicular_direct_light_is_unchanged() {
        assert_eq!(effective_irradiance(&LightInput::direct(1000.0)), 1000.0);
    }

    #[test]
    fn incidence_angle_scales_by_cosine() {
        let mut light = LightInput::direct(1000.0);
        light.incidence_angle_deg = 60.0;
        assert!((effective_irradiance(&light) - 500.0).abs() < 1e-9);
        assert!((incidence_multiplier(30.0) - 0.866_025).abs() < 1e-6);
    }

    #[test]
    fn reflection_applies_reflectance_and_count() {
        let mut light = LightInput::direct(1000.0);
        light.reflection = mirror(None, None);
        assert!((effective_irradiance(&light) - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn disabled_reflection_is_ignored() {
        let mut light = LightInput::direct(1000.0);
        light.reflection = mirror(Some(0.1), Some(5.0));
        light.reflection.enabled = false;
        assert_eq!(effective_irradiance(&light), 1000.0);
        assert_eq!(effective_illuminated_area_for(&light, 1.0), 1.0);
        assert!(light.reflection.spot().is_none());
    }

    #[test]
    fn mirror_geometry_applies_concentration() {
        let mut light = LightInput::direct(1000.0);
        light.reflection = mirror(Some(0.1), Some(1.0));
        let spot = spot_geometry(0.1, 1.0);
        let expected = 1000.0 * 0.9 * 2.0 * spot.concentration_factor;
        assert!((effective_irradiance(&light) - expected).abs() < 1e-9);
    }

    #[test]
    fn partial_mirror_geometry_has_no_spot() {
        let mut light = LightInput::direct(1000.0);
        light.reflection = mirror(Some(0.1), None);
        assert!(light.reflection.spot().is_none());
        assert_eq!(effective_illuminated_area_for(&light, 1.0), 1.0);
    }

    #[test]
    fn normalize_limits_area_to_spot() {
        let mut light = LightInput::direct(1000.0);
        light.reflection = mirror(Some(0.05), Some(1.0));
        let normalized = normalize(&light, 1.0);
        let spot = normalized.spot.expect("mirror geometry given");
        assert_eq!(normalized.illuminated_area, spot.area);
        assert_eq!(normalized.incidence_multiplier, 1.0);
    }

    #[test]
    fn mode_names() {
        assert_eq!(LightMode::Direct.as_str(), "direct");
        assert_eq!(LightMode::LuxNd.as_str(), "lux-nd");
    }
}
