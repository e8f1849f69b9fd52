//! Reference values for the quantities a user has to guess.
//!
//! Each table lists typical surfaces, materials or conditions with a
//! representative value and, where it is meaningful, the range it is drawn
//! from. Values are in the units the scenario engine consumes (SI, except
//! reflectance in percent and incidence in degrees).

mod tables;

use serde::Serialize;

pub use tables::*;

/// Typical spread around a preset value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub label: &'static str,
    pub value: f64,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<PresetRange>,
}

impl Preset {
    pub fn matches_label(&self, query: &str) -> bool {
        self.label.eq_ignore_ascii_case(query.trim())
    }
}

/// Which quantity a preset table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetKind {
    Absorptivity,
    Emissivity,
    Convection,
    SpecificHeat,
    Irradiance,
    KFactor,
    NdFilter,
    Reflectance,
    IncidenceAngle,
    Area,
    Thickness,
}

impl PresetKind {
    pub const ALL: [PresetKind; 11] = [
        PresetKind::Absorptivity,
        PresetKind::Emissivity,
        PresetKind::Convection,
        PresetKind::SpecificHeat,
        PresetKind::Irradiance,
        PresetKind::KFactor,
        PresetKind::NdFilter,
        PresetKind::Reflectance,
        PresetKind::IncidenceAngle,
        PresetKind::Area,
        PresetKind::Thickness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKind::Absorptivity => "absorptivity",
            PresetKind::Emissivity => "emissivity",
            PresetKind::Convection => "convection",
            PresetKind::SpecificHeat => "specific-heat",
            PresetKind::Irradiance => "irradiance",
            PresetKind::KFactor => "k-factor",
            PresetKind::NdFilter => "nd-filter",
            PresetKind::Reflectance => "reflectance",
            PresetKind::IncidenceAngle => "incidence-angle",
            PresetKind::Area => "area",
            PresetKind::Thickness => "thickness",
        }
    }

    /// Parse a kind name; underscores and case are ignored.
    pub fn parse(name: &str) -> Option<PresetKind> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.as_str() == wanted)
    }

    pub fn unit(&self) -> &'static str {
        match self {
            PresetKind::Absorptivity | PresetKind::Emissivity | PresetKind::NdFilter => "-",
            PresetKind::Convection => "W/(m²·K)",
            PresetKind::SpecificHeat => "J/(kg·K)",
            PresetKind::Irradiance => "W/m²",
            PresetKind::KFactor => "lux per W/m²",
            PresetKind::Reflectance => "%",
            PresetKind::IncidenceAngle => "deg",
            PresetKind::Area => "m²",
            PresetKind::Thickness => "m",
        }
    }

    pub fn presets(&self) -> &'static [Preset] {
        match self {
            PresetKind::Absorptivity => &ABSORPTIVITY,
            PresetKind::Emissivity => &EMISSIVITY,
            PresetKind::Convection => &CONVECTION,
            PresetKind::SpecificHeat => &SPECIFIC_HEAT,
            PresetKind::Irradiance => &IRRADIANCE,
            PresetKind::KFactor => &K_FACTOR,
            PresetKind::NdFilter => &ND_FILTERS,
            PresetKind::Reflectance => &REFLECTANCE,
            PresetKind::IncidenceAngle => &INCIDENCE_ANGLE,
            PresetKind::Area => &AREA,
            PresetKind::Thickness => &THICKNESS,
        }
    }

    /// Starting value for a fresh scenario; ND filters have none.
    pub fn default_value(&self) -> Option<f64> {
        match self {
            PresetKind::Absorptivity => Some(DEFAULT_ABSORPTIVITY),
            PresetKind::Emissivity => Some(DEFAULT_EMISSIVITY),
            PresetKind::Convection => Some(DEFAULT_CONVECTION),
            PresetKind::SpecificHeat => Some(DEFAULT_SPECIFIC_HEAT),
            PresetKind::Irradiance => Some(DEFAULT_IRRADIANCE),
            PresetKind::KFactor => Some(DEFAULT_K_FACTOR),
            PresetKind::NdFilter => None,
            PresetKind::Reflectance => Some(DEFAULT_REFLECTANCE),
            PresetKind::IncidenceAngle => Some(DEFAULT_INCIDENCE_ANGLE),
            PresetKind::Area => Some(DEFAULT_AREA),
            PresetKind::Thickness => Some(DEFAULT_THICKNESS),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            PresetKind::Absorptivity => Some(
                "Controls how much incoming light turns into heat. Dark, matte surfaces absorb most light; shiny surfaces reflect it.",
            ),
            PresetKind::Emissivity => Some(
                "Controls how efficiently the surface radiates heat away. Radiation dominates heat loss at high temperatures.",
            ),
            PresetKind::Convection => {
                Some("Moving air carries heat away faster and lowers the maximum temperature.")
            }
            PresetKind::SpecificHeat => {
                Some("Materials with higher heat capacity take longer to heat up.")
            }
            PresetKind::Irradiance => Some(
                "Seasonal sunlight intensity in London at noon. Actual values depend on time of day, clouds, and surface angle.",
            ),
            PresetKind::KFactor => Some(
                "Summer daylight has a bluer spectrum (higher K) than winter. Expect ±20% uncertainty without calibration.",
            ),
            PresetKind::Reflectance => Some(
                "Percentage of light reflected by each mirror. Multiple reflectors multiply effective irradiance.",
            ),
            PresetKind::IncidenceAngle => Some(
                "Heating scales with cos(angle) between the light and the surface normal.",
            ),
            PresetKind::NdFilter | PresetKind::Area | PresetKind::Thickness => None,
        }
    }
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a preset by its label (case-insensitive).
pub fn find(kind: PresetKind, label: &str) -> Option<&'static Preset> {
    kind.presets().iter().find(|p| p.matches_label(label))
}

/// Labels containing `query`, across every table.
pub fn search(query: &str) -> Vec<(PresetKind, &'static Preset)> {
    let query = query.trim().to_ascii_lowercase();
    PresetKind::ALL
        .into_iter()
        .flat_map(|kind| kind.presets().iter().map(move |p| (kind, p)))
        .filter(|(_, p)| p.label.to_ascii_lowercase().contains(&query))
        .collect()
}
