//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario_id: String,
    /// RFC 3339
    pub timestamp: String,
    pub engine_version: String,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(
        run_id: RunId,
        scenario_id: impl Into<String>,
        engine_version: impl Into<String>,
    ) -> Self {
        Self {
            run_id,
            scenario_id: scenario_id.into(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            engine_version: engine_version.into(),
        }
    }
}

/// Everything a calculation produced, as stored in `result.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    pub light: LightRecord,
    pub equilibrium: EquilibriumRecord,
    pub milestones: MilestoneRecord,
    pub transient: TransientInfo,
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightRecord {
    pub irradiance_w_m2: f64,
    pub illuminated_area_m2: f64,
    pub incidence_multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot: Option<SpotRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpotRecord {
    pub side_m: f64,
    pub area_m2: f64,
    pub concentration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquilibriumRecord {
    pub temperature_k: f64,
    pub absorbed_w: f64,
    pub convection_w: f64,
    pub radiation_w: f64,
    pub total_loss_w: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneRecord {
    pub t50_s: f64,
    pub t90_s: f64,
    pub t95_s: f64,
    pub t99_s: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransientInfo {
    pub horizon_s: f64,
    pub time_step_s: f64,
    pub steps: usize,
    pub settled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub time_s: f64,
    pub temperature_k: f64,
}
