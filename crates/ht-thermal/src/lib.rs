//! Lumped heat-transfer model of an illuminated object.
//!
//! The object is a square-faced cuboid at one uniform temperature. It gains
//! heat from absorbed light and loses it by convection and radiation from
//! its whole surface.

pub mod equations;
pub mod inputs;

pub use equations::{
    HeatLoss, absorbed_power, convection_loss, cooling_area, net_heat_flow, radiation_loss,
    total_heat_loss,
};
pub use inputs::ThermalInputs;
