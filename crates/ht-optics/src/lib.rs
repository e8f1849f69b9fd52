//! Light-input normalization for heliotherm.
//!
//! Converts a light measurement (direct irradiance, lux, lux behind ND
//! filters), optional mirror reflection and the incidence angle into the
//! effective irradiance and illuminated area consumed by the thermal engine.

pub mod light;
pub mod lux;
pub mod spot;

pub use light::{
    LightInput, LightMode, NormalizedLight, ReflectionInput, effective_illuminated_area_for,
    effective_irradiance, incidence_multiplier, normalize,
};
pub use lux::{lux_to_irradiance, lux_with_nd_to_irradiance, nd_attenuation};
pub use spot::{SpotGeometry, effective_illuminated_area, spot_geometry};
