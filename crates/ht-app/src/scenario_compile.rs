//! Scenario (file units) to engine inputs (SI, Kelvin).

use ht_core::{celsius_to_kelvin, cm2, grams, mm};
use ht_optics::{LightInput, LightMode, NormalizedLight, ReflectionInput, normalize};
use ht_project::schema::{LightDef, LightModeDef, ScenarioDef};
use ht_project::validate_scenario;
use ht_thermal::ThermalInputs;
use uom::si::area::square_meter;
use uom::si::length::meter;
use uom::si::mass::kilogram;

use crate::error::AppResult;

/// A scenario ready for the engine.
#[derive(Debug, Clone)]
pub struct CompiledScenario {
    pub light: LightInput,
    pub normalized: NormalizedLight,
    pub inputs: ThermalInputs,
}

/// Validate `scenario` and convert it to engine inputs.
///
/// The light record is normalized against the object's face area; the
/// resulting irradiance and illuminated area feed the thermal inputs while
/// the full face area stays the cooling geometry.
pub fn compile_scenario(scenario: &ScenarioDef) -> AppResult<CompiledScenario> {
    validate_scenario(scenario)?;

    let object = &scenario.object;
    let area = cm2(object.area_cm2).get::<square_meter>();
    let light = light_input(&scenario.light);
    let normalized = normalize(&light, area);

    let inputs = ThermalInputs {
        irradiance: normalized.irradiance,
        area,
        illuminated_area: Some(normalized.illuminated_area),
        thickness: mm(object.thickness_mm).get::<meter>(),
        mass: grams(object.mass_g).get::<kilogram>(),
        absorptivity: scenario.surface.absorptivity,
        emissivity: scenario.surface.emissivity,
        convection_coeff: scenario.environment.convection_w_m2k,
        specific_heat: object.specific_heat_j_kgk,
        ambient_temp: celsius_to_kelvin(scenario.environment.ambient_c),
    };

    Ok(CompiledScenario {
        light,
        normalized,
        inputs,
    })
}

pub fn light_input(def: &LightDef) -> LightInput {
    let reflection = &def.reflection;
    LightInput {
        mode: match def.mode {
            LightModeDef::Direct => LightMode::Direct,
            LightModeDef::Lux => LightMode::Lux,
            LightModeDef::LuxNd => LightMode::LuxNd,
        },
        irradiance: def.irradiance_w_m2,
        lux: def.lux,
        k_factor: def.k_factor,
        nd_filters: def.nd_filters.clone(),
        reflection: ReflectionInput {
            enabled: reflection.enabled,
            reflectance_pct: reflection.reflectance_pct,
            reflector_count: reflection.reflectors,
            mirror_size: reflection.mirror_size_mm.map(|s| mm(s).get::<meter>()),
            distance: reflection.distance_m,
        },
        incidence_angle_deg: def.incidence_angle_deg,
    }
}
