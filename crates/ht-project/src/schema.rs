//! Scenario file schema.
//!
//! Quantities are stored in the units people measure them in (cm², mm, g,
//! °C, mirror size in mm). Missing fields take the values a fresh scenario
//! starts from.

use ht_presets as presets;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LUX: f64 = 100_000.0;
pub const DEFAULT_AMBIENT_C: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

impl Project {
    pub fn scenario(&self, id: &str) -> Option<&ScenarioDef> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub light: LightDef,
    #[serde(default)]
    pub surface: SurfaceDef,
    #[serde(default)]
    pub environment: EnvironmentDef,
    #[serde(default)]
    pub object: ObjectDef,
}

impl ScenarioDef {
    /// Scenario with every quantity at its starting value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            light: LightDef::default(),
            surface: SurfaceDef::default(),
            environment: EnvironmentDef::default(),
            object: ObjectDef::default(),
        }
    }
}

/// How the light level was obtained.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LightModeDef {
    /// Irradiance entered directly (W/m²)
    #[default]
    Direct,
    /// Lux meter reading, converted with the K-factor
    Lux,
    /// Lux meter reading taken through ND filters
    LuxNd,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightDef {
    pub mode: LightModeDef,
    pub irradiance_w_m2: f64,
    pub lux: f64,
    pub k_factor: f64,
    pub nd_filters: Vec<f64>,
    pub incidence_angle_deg: f64,
    pub reflection: ReflectionDef,
}

impl Default for LightDef {
    fn default() -> Self {
        Self {
            mode: LightModeDef::Direct,
            irradiance_w_m2: presets::DEFAULT_IRRADIANCE,
            lux: DEFAULT_LUX,
            k_factor: presets::DEFAULT_K_FACTOR,
            nd_filters: Vec::new(),
            incidence_angle_deg: presets::DEFAULT_INCIDENCE_ANGLE,
            reflection: ReflectionDef::default(),
        }
    }
}

/// Flat mirrors redirecting sunlight onto the object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReflectionDef {
    pub enabled: bool,
    pub reflectance_pct: f64,
    pub reflectors: u32,
    /// Square mirror side (mm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror_size_mm: Option<f64>,
    /// Mirror to object distance (m)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

impl Default for ReflectionDef {
    fn default() -> Self {
        Self {
            enabled: false,
            reflectance_pct: presets::DEFAULT_REFLECTANCE,
            reflectors: 1,
            mirror_size_mm: None,
            distance_m: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceDef {
    pub absorptivity: f64,
    pub emissivity: f64,
}

impl Default for SurfaceDef {
    fn default() -> Self {
        Self {
            absorptivity: presets::DEFAULT_ABSORPTIVITY,
            emissivity: presets::DEFAULT_EMISSIVITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentDef {
    pub convection_w_m2k: f64,
    pub ambient_c: f64,
}

impl Default for EnvironmentDef {
    fn default() -> Self {
        Self {
            convection_w_m2k: presets::DEFAULT_CONVECTION,
            ambient_c: DEFAULT_AMBIENT_C,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObjectDef {
    pub area_cm2: f64,
    pub thickness_mm: f64,
    pub mass_g: f64,
    pub specific_heat_j_kgk: f64,
}

impl Default for ObjectDef {
    fn default() -> Self {
        Self {
            area_cm2: presets::DEFAULT_AREA * 1.0e4,
            thickness_mm: presets::DEFAULT_THICKNESS * 1.0e3,
            mass_g: presets::DEFAULT_MASS * 1.0e3,
            specific_heat_j_kgk: presets::DEFAULT_SPECIFIC_HEAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_scenario() {
        let s = ScenarioDef::new("s1", "Plate");
        assert_eq!(s.light.mode, LightModeDef::Direct);
        assert_eq!(s.light.irradiance_w_m2, 1000.0);
        assert_eq!(s.light.k_factor, 115.0);
        assert_eq!(s.light.incidence_angle_deg, 30.0);
        assert!(!s.light.reflection.enabled);
        assert_eq!(s.light.reflection.reflectance_pct, 87.0);
        assert_eq!(s.surface.emissivity, 0.9);
        assert_eq!(s.environment.ambient_c, 20.0);
        assert!((s.object.area_cm2 - 100.0).abs() < 1e-9);
        assert!((s.object.thickness_mm - 10.0).abs() < 1e-9);
        assert!((s.object.mass_g - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sparse_yaml_fills_defaults() {
        let yaml = r#"
id: sunny
name: Sunny sill
light:
  mode: lux-nd
  lux: 1000
  nd_filters: [64]
object:
  mass_g: 250
"#;
        let s: ScenarioDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.light.mode, LightModeDef::LuxNd);
        assert_eq!(s.light.nd_filters, vec![64.0]);
        assert_eq!(s.light.k_factor, 115.0);
        assert_eq!(s.object.mass_g, 250.0);
        assert_eq!(s.object.specific_heat_j_kgk, 500.0);
        assert_eq!(s.surface, SurfaceDef::default());
    }
}
