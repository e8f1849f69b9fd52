use crate::{Preset, PresetRange};

const fn preset(label: &'static str, value: f64, description: &'static str) -> Preset {
    Preset {
        label,
        value,
        description,
        range: None,
    }
}

const fn ranged(
    label: &'static str,
    value: f64,
    description: &'static str,
    min: f64,
    max: f64,
) -> Preset {
    Preset {
        label,
        value,
        description,
        range: Some(PresetRange { min, max }),
    }
}

/// Surface absorptivity (0-1).
pub static ABSORPTIVITY: [Preset; 5] = [
    ranged("Matte black", 0.95, "Near-ideal absorber", 0.9, 0.98),
    ranged("Dark surface", 0.85, "Dark plastics, dark paints", 0.75, 0.9),
    ranged("Medium colored", 0.65, "Red, green, blue surfaces", 0.5, 0.75),
    ranged("Light surface", 0.4, "White, beige, light grey", 0.25, 0.55),
    ranged("Shiny / reflective", 0.15, "Polished metals, mirrors", 0.05, 0.3),
];

/// Longwave emissivity (0-1). Differs from solar absorptivity: most matte
/// non-metals sit near 0.9, metals vary widely.
pub static EMISSIVITY: [Preset; 10] = [
    ranged(
        "Matte / painted surface (any color)",
        0.9,
        "Most paints and matte coatings radiate well regardless of visible color",
        0.85,
        0.95,
    ),
    ranged(
        "Wood (unfinished)",
        0.9,
        "Most wood surfaces are good IR emitters; finish matters more than species",
        0.85,
        0.95,
    ),
    ranged(
        "Plastic (most, matte)",
        0.9,
        "Many polymers have high longwave emissivity; varies with additives/finish",
        0.85,
        0.95,
    ),
    ranged(
        "Rubber / silicone",
        0.94,
        "Common elastomers are typically very high-ε surfaces",
        0.9,
        0.97,
    ),
    ranged(
        "Paper / fabric",
        0.93,
        "Fibrous/matte surfaces tend to be excellent radiators",
        0.9,
        0.97,
    ),
    ranged(
        "Glass / ceramic",
        0.92,
        "Typical non-metal solids have high longwave emissivity",
        0.85,
        0.95,
    ),
    ranged(
        "Concrete / brick / stone",
        0.93,
        "Common building materials are typically high-ε in the longwave IR",
        0.9,
        0.97,
    ),
    ranged(
        "Metal, oxidized / anodized",
        0.8,
        "Oxide layers and anodizing raise ε substantially",
        0.6,
        0.9,
    ),
    ranged(
        "Metal, bare / brushed (clean)",
        0.2,
        "Bare metals are moderate-to-poor radiators when not oxidized",
        0.1,
        0.4,
    ),
    ranged(
        "Metal, polished / mirror-like",
        0.05,
        "Very poor radiator (radiation losses can be dramatically lower)",
        0.02,
        0.1,
    ),
];

/// Convection coefficient, W/(m²·K).
pub static CONVECTION: [Preset; 4] = [
    ranged("Still indoor air", 5.0, "Natural convection only", 3.0, 7.0),
    ranged("Outdoor, calm", 8.0, "Buoyancy-driven airflow", 6.0, 10.0),
    ranged("Light air movement", 15.0, "Walking speed air", 10.0, 20.0),
    ranged("Breezy / windy", 30.0, "Wind dramatically increases losses", 20.0, 50.0),
];

/// Specific heat capacity, J/(kg·K).
pub static SPECIFIC_HEAT: [Preset; 5] = [
    ranged("Metal (steel)", 500.0, "Steel, iron", 450.0, 550.0),
    ranged("Metal (aluminum)", 900.0, "Aluminum, zinc", 850.0, 950.0),
    ranged("Glass / ceramic", 800.0, "Glass, ceramics, stone", 700.0, 900.0),
    ranged("Plastic", 1500.0, "Various plastics", 1200.0, 2000.0),
    ranged("Wood", 2000.0, "Various woods", 1500.0, 2500.0),
];

/// Clear-sky noon irradiance on a horizontal surface in London, W/m².
pub static IRRADIANCE: [Preset; 2] = [
    ranged(
        "London Peak Summer",
        950.0,
        "Late June, clear sky, noon (horizontal surface)",
        850.0,
        1050.0,
    ),
    ranged(
        "London Low Winter",
        400.0,
        "January, clear sky, noon (horizontal surface)",
        300.0,
        500.0,
    ),
];

/// Lux per W/m² for London daylight.
pub static K_FACTOR: [Preset; 2] = [
    ranged(
        "London Peak Summer (late June)",
        115.0,
        "Clear sky, 62° sun altitude, air mass ~1.1",
        105.0,
        125.0,
    ),
    ranged(
        "London Low Winter (January)",
        92.0,
        "Clear sky, 18° sun altitude, air mass ~3.2",
        80.0,
        105.0,
    ),
];

/// Neutral density filter attenuation factors.
pub static ND_FILTERS: [Preset; 9] = [
    preset("ND2", 2.0, "1 stop"),
    preset("ND4", 4.0, "2 stops"),
    preset("ND8", 8.0, "3 stops"),
    preset("ND16", 16.0, "4 stops"),
    preset("ND32", 32.0, "5 stops"),
    preset("ND64", 64.0, "6 stops"),
    preset("ND100", 100.0, "~6.6 stops"),
    preset("ND400", 400.0, "~8.6 stops"),
    preset("ND1000", 1000.0, "10 stops"),
];

/// Mirror reflectance, percent.
pub static REFLECTANCE: [Preset; 6] = [
    ranged("Acrylic (cheap)", 82.0, "Aluminum film on acrylic", 80.0, 85.0),
    ranged("Acrylic (good)", 87.0, "Vacuum-deposited Al + protective coat", 85.0, 90.0),
    ranged("Glass (standard)", 87.0, "Back-silvered glass", 85.0, 90.0),
    ranged("Glass (first-surface)", 92.0, "Al or Ag on front, no glass pass", 90.0, 95.0),
    ranged("Enhanced aluminum", 94.0, "Protected Al with SiO₂ coating", 92.0, 96.0),
    ranged("Silvered optical", 96.0, "Protected Ag, high-quality optical", 95.0, 98.0),
];

/// Angle between the light and the surface normal, degrees.
pub static INCIDENCE_ANGLE: [Preset; 5] = [
    preset("Perpendicular (0°)", 0.0, "Maximum heating, light hits straight-on"),
    preset("Nearly aligned (15°)", 15.0, "~97% heating"),
    preset("Typical setup (30°)", 30.0, "~87% heating"),
    preset("Moderate angle (45°)", 45.0, "~71% heating"),
    preset("Steep angle (60°)", 60.0, "50% heating"),
];

/// Face area, m².
pub static AREA: [Preset; 4] = [
    preset("Phone screen", 0.008, "~80 cm²"),
    preset("10×10 cm", 0.01, "100 cm²"),
    preset("A4 paper", 0.0625, "~625 cm²"),
    preset("1 m²", 1.0, "Square meter"),
];

/// Object thickness, m.
pub static THICKNESS: [Preset; 4] = [
    preset("Thin sheet", 0.001, "1 mm"),
    preset("Plate", 0.005, "5 mm"),
    preset("Standard", 0.01, "10 mm"),
    preset("Block", 0.05, "50 mm"),
];

pub const DEFAULT_ABSORPTIVITY: f64 = 0.85;
pub const DEFAULT_EMISSIVITY: f64 = 0.9;
pub const DEFAULT_CONVECTION: f64 = 10.0;
pub const DEFAULT_SPECIFIC_HEAT: f64 = 500.0;
pub const DEFAULT_IRRADIANCE: f64 = 1000.0;
pub const DEFAULT_K_FACTOR: f64 = 115.0;
pub const DEFAULT_REFLECTANCE: f64 = 87.0;
pub const DEFAULT_INCIDENCE_ANGLE: f64 = 30.0;
/// 10 cm × 10 cm
pub const DEFAULT_AREA: f64 = 0.01;
pub const DEFAULT_THICKNESS: f64 = 0.01;
/// 100 g
pub const DEFAULT_MASS: f64 = 0.1;
