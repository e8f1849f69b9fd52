//! Run execution and caching service.

use std::path::Path;

use ht_core::timing::Timer;
use ht_optics::NormalizedLight;
use ht_project::schema::ScenarioDef;
use ht_results::{
    EquilibriumRecord, LightRecord, MilestoneRecord, RunManifest, RunRecord, RunStore, SeriesPoint,
    SpotRecord, TransientInfo,
};
use ht_sim::{CalculationResult, calculate};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::project_service;
use crate::scenario_compile::{CompiledScenario, compile_scenario};

/// Options for running calculations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub engine_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub scenario_id: &'a str,
    pub options: RunOptions,
}

/// Wall-clock breakdown of a run (seconds).
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub compile_time_s: f64,
    pub solve_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub record: RunRecord,
    pub loaded_from_cache: bool,
    pub timing: RunTimingSummary,
}

/// A scenario computed without touching the run cache.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub compiled: CompiledScenario,
    pub result: CalculationResult,
}

impl ScenarioOutcome {
    pub fn record(&self) -> RunRecord {
        build_record(&self.compiled.normalized, &self.result)
    }
}

/// Compile and calculate one scenario.
pub fn calculate_scenario(scenario: &ScenarioDef) -> AppResult<ScenarioOutcome> {
    let compiled = compile_scenario(scenario)?;
    let result = calculate(&compiled.inputs);
    Ok(ScenarioOutcome { compiled, result })
}

/// Execute a run or load it from the project's run cache.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let total = Timer::start();
    let mut timing = RunTimingSummary::default();

    let project = project_service::load_project(request.project_path)?;
    let scenario = project_service::get_scenario(&project, request.scenario_id)?;

    let run_id = ht_results::compute_run_id(scenario, &request.options.engine_version)?;
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let load = Timer::start();
        let (manifest, record) = store.load_run(&run_id)?;
        timing.load_cache_time_s = load.elapsed_s();
        timing.total_time_s = total.elapsed_s();
        info!(run_id = %run_id, scenario = request.scenario_id, "loaded cached run");
        return Ok(RunResponse {
            run_id,
            manifest,
            record,
            loaded_from_cache: true,
            timing,
        });
    }

    let compile = Timer::start();
    let compiled = compile_scenario(scenario)?;
    timing.compile_time_s = compile.elapsed_s();

    let solve = Timer::start();
    let result = calculate(&compiled.inputs);
    timing.solve_time_s = solve.elapsed_s();
    debug!(
        equilibrium_k = result.equilibrium.temperature,
        steps = result.transient.steps,
        "scenario calculated"
    );

    let record = build_record(&compiled.normalized, &result);
    let manifest = RunManifest::new(
        run_id.clone(),
        request.scenario_id,
        request.options.engine_version.as_str(),
    );

    let save = Timer::start();
    store.save_run(&manifest, &record)?;
    timing.save_time_s = save.elapsed_s();
    timing.total_time_s = total.elapsed_s();

    info!(
        run_id = %run_id,
        scenario = request.scenario_id,
        solve_s = timing.solve_time_s,
        "run computed and stored"
    );

    Ok(RunResponse {
        run_id,
        manifest,
        record,
        loaded_from_cache: false,
        timing,
    })
}

/// Flatten engine output into the stored record.
pub fn build_record(light: &NormalizedLight, result: &CalculationResult) -> RunRecord {
    let eq = &result.equilibrium;
    let tr = &result.transient;
    RunRecord {
        light: LightRecord {
            irradiance_w_m2: light.irradiance,
            illuminated_area_m2: light.illuminated_area,
            incidence_multiplier: light.incidence_multiplier,
            spot: light.spot.map(|spot| SpotRecord {
                side_m: spot.side_length,
                area_m2: spot.area,
                concentration: spot.concentration_factor,
            }),
        },
        equilibrium: EquilibriumRecord {
            temperature_k: eq.temperature,
            absorbed_w: eq.absorbed_power,
            convection_w: eq.convection_loss,
            radiation_w: eq.radiation_loss,
            total_loss_w: eq.total_loss,
        },
        milestones: MilestoneRecord {
            t50_s: tr.milestones.time_50,
            t90_s: tr.milestones.time_90,
            t95_s: tr.milestones.time_95,
            t99_s: tr.milestones.time_99,
        },
        transient: TransientInfo {
            horizon_s: tr.horizon,
            time_step_s: tr.time_step,
            steps: tr.steps,
            settled: tr.settled,
        },
        series: tr
            .time_series
            .iter()
            .map(|p| SeriesPoint {
                time_s: p.time,
                temperature_k: p.temperature,
            })
            .collect(),
    }
}

/// Runs stored for a scenario, most recent first.
pub fn list_runs(project_path: &Path, scenario_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(scenario_id)?)
}

pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, RunRecord)> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.load_run(run_id)?)
}

pub fn delete_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let store = RunStore::for_project(project_path)?;
    store.delete_run(run_id)?;
    Ok(())
}
