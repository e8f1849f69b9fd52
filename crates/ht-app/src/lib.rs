//! Shared application service layer for heliotherm.
//!
//! Centralizes the work behind the command-line front end: loading scenario
//! files, compiling scenarios into engine inputs, running and caching
//! calculations, and querying stored results.

pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;
pub mod scenario_compile;

pub use error::{AppError, AppResult};
pub use project_service::{
    ScenarioSummary, get_scenario, list_scenarios, load_project, save_project, validate_project,
};
pub use query::{RunSummary, TemperatureUnit, get_run_summary, series_to_csv, temperature_series};
pub use run_service::{
    RunOptions, RunRequest, RunResponse, RunTimingSummary, ScenarioOutcome, build_record,
    calculate_scenario, delete_run, ensure_run, list_runs, load_run,
};
pub use scenario_compile::{CompiledScenario, compile_scenario, light_input};
