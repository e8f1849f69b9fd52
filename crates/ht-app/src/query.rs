//! Query helpers for stored runs.

use std::fmt::Write as _;

use ht_core::kelvin_to_celsius;
use ht_results::RunRecord;

use crate::error::{AppError, AppResult};

/// Summary of a run's series and outcome.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub point_count: usize,
    pub time_range: (f64, f64),
    pub peak_temperature_k: f64,
    pub equilibrium_k: f64,
    pub settled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Kelvin,
    Celsius,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "C",
        }
    }

    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => kelvin,
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
        }
    }
}

pub fn get_run_summary(record: &RunRecord) -> AppResult<RunSummary> {
    let (first, last) = match (record.series.first(), record.series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AppError::InvalidInput("No points in run".to_string())),
    };

    let peak = record
        .series
        .iter()
        .map(|p| p.temperature_k)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(RunSummary {
        point_count: record.series.len(),
        time_range: (first.time_s, last.time_s),
        peak_temperature_k: peak,
        equilibrium_k: record.equilibrium.temperature_k,
        settled: record.transient.settled,
    })
}

/// (time s, temperature) pairs in the requested unit.
pub fn temperature_series(record: &RunRecord, unit: TemperatureUnit) -> Vec<(f64, f64)> {
    record
        .series
        .iter()
        .map(|p| (p.time_s, unit.from_kelvin(p.temperature_k)))
        .collect()
}

/// Two-column CSV with a header row.
pub fn series_to_csv(series: &[(f64, f64)], unit: TemperatureUnit) -> String {
    let mut out = format!("time_s,temperature_{}\n", unit.symbol());
    for (t, temp) in series {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{t},{temp}");
    }
    out
}
