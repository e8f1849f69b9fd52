//! Range and consistency checks for scenario files.
//!
//! The engine accepts any numbers; this is where nonsense is turned away.

use std::collections::HashSet;

use ht_core::{CELSIUS_TO_KELVIN, HtError, ensure_finite, ensure_in_range};

use crate::schema::{LightModeDef, Project, ScenarioDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario {scenario}: {source}")]
    Range {
        scenario: String,
        #[source]
        source: HtError,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut ids = HashSet::new();
    for scenario in &project.scenarios {
        if !ids.insert(scenario.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }
    Ok(())
}

pub fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "scenario.id".to_string(),
            value: format!("{:?}", scenario.id),
            reason: "must not be empty".to_string(),
        });
    }
    check_ranges(scenario).map_err(|source| ValidationError::Range {
        scenario: scenario.id.clone(),
        source,
    })
}

fn non_negative(v: f64, what: &'static str) -> Result<f64, HtError> {
    ensure_in_range(v, 0.0, f64::INFINITY, what)
}

fn positive(v: f64, what: &'static str) -> Result<f64, HtError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HtError::InvalidArg { what })
    }
}

fn check_ranges(scenario: &ScenarioDef) -> Result<(), HtError> {
    let light = &scenario.light;
    match light.mode {
        LightModeDef::Direct => {
            non_negative(light.irradiance_w_m2, "light.irradiance_w_m2 (must be >= 0)")?;
        }
        LightModeDef::Lux => {
            non_negative(light.lux, "light.lux (must be >= 0)")?;
            positive(light.k_factor, "light.k_factor (must be > 0)")?;
        }
        LightModeDef::LuxNd => {
            non_negative(light.lux, "light.lux (must be >= 0)")?;
            positive(light.k_factor, "light.k_factor (must be > 0)")?;
            for &factor in &light.nd_filters {
                ensure_in_range(factor, 1.0, f64::INFINITY, "light.nd_filters (each >= 1)")?;
            }
        }
    }

    // 90° would mean grazing light with no heating at all.
    ensure_in_range(light.incidence_angle_deg, 0.0, 90.0, "light.incidence_angle_deg")?;
    if light.incidence_angle_deg >= 90.0 {
        return Err(HtError::InvalidArg {
            what: "light.incidence_angle_deg (must be < 90)",
        });
    }

    let reflection = &light.reflection;
    if reflection.enabled {
        ensure_in_range(
            reflection.reflectance_pct,
            0.0,
            100.0,
            "light.reflection.reflectance_pct",
        )?;
        if reflection.reflectors < 1 {
            return Err(HtError::InvalidArg {
                what: "light.reflection.reflectors (must be >= 1)",
            });
        }
        if let Some(size) = reflection.mirror_size_mm {
            positive(size, "light.reflection.mirror_size_mm (must be > 0)")?;
        }
        if let Some(distance) = reflection.distance_m {
            non_negative(distance, "light.reflection.distance_m (must be >= 0)")?;
        }
    }

    ensure_in_range(scenario.surface.absorptivity, 0.0, 1.0, "surface.absorptivity")?;
    ensure_in_range(scenario.surface.emissivity, 0.0, 1.0, "surface.emissivity")?;

    non_negative(
        scenario.environment.convection_w_m2k,
        "environment.convection_w_m2k (must be >= 0)",
    )?;
    let ambient = ensure_finite(scenario.environment.ambient_c, "environment.ambient_c")?;
    if ambient + CELSIUS_TO_KELVIN <= 0.0 {
        return Err(HtError::InvalidArg {
            what: "environment.ambient_c (must be above absolute zero)",
        });
    }

    let object = &scenario.object;
    positive(object.area_cm2, "object.area_cm2 (must be > 0)")?;
    non_negative(object.thickness_mm, "object.thickness_mm (must be >= 0)")?;
    non_negative(object.mass_g, "object.mass_g (must be >= 0)")?;
    non_negative(object.specific_heat_j_kgk, "object.specific_heat_j_kgk (must be >= 0)")?;
    Ok(())
}
