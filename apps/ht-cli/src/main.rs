use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ht_app::{
    AppError, AppResult, RunOptions, RunRequest, TemperatureUnit, project_service, query,
    run_service,
};
use ht_core::kelvin_to_celsius;
use ht_presets::PresetKind;
use ht_project::schema::{LightModeDef, ScenarioDef};
use ht_results::{RunManifest, RunRecord};

#[derive(Parser)]
#[command(name = "heliotherm")]
#[command(
    about = "Heliotherm - temperature of objects heated by sunlight and mirrors",
    long_about = None
)]
struct Cli {
    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a timing summary after runs (same as HT_TIMING=1)
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project file
    Validate {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// List scenarios in a project
    Scenarios {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
    },
    /// Calculate a scenario, reusing a cached result when available
    Run {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Scenario ID
        scenario_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// One-off calculation from command-line values
    Calc(CalcArgs),
    /// List cached runs for a scenario
    Runs {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Scenario ID to list runs for
        scenario_id: String,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export the temperature history of a run as CSV
    ExportSeries {
        /// Path to the project YAML/JSON file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Temperatures in °C instead of K
        #[arg(long)]
        celsius: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show reference values (all tables, or one kind)
    Presets {
        /// absorptivity, emissivity, convection, specific-heat, irradiance,
        /// k-factor, nd-filter, reflectance, incidence-angle, area, thickness
        kind: Option<String>,
        /// Only presets whose label contains this text
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Direct,
    Lux,
    LuxNd,
}

/// Scenario values; anything omitted keeps the scenario-file default.
#[derive(Args)]
struct CalcArgs {
    #[arg(long, value_enum, default_value = "direct")]
    mode: ModeArg,
    /// Irradiance (W/m²), direct mode
    #[arg(long)]
    irradiance: Option<f64>,
    /// Lux meter reading, lux modes
    #[arg(long)]
    lux: Option<f64>,
    /// Lux per W/m²
    #[arg(long)]
    k_factor: Option<f64>,
    /// ND filter factor; repeat for stacked filters
    #[arg(long = "nd")]
    nd_filters: Vec<f64>,
    /// Angle from the surface normal (degrees)
    #[arg(long)]
    incidence: Option<f64>,
    /// Number of mirrors; enables reflection
    #[arg(long)]
    mirrors: Option<u32>,
    /// Mirror reflectance (%)
    #[arg(long)]
    reflectance: Option<f64>,
    /// Square mirror side (mm)
    #[arg(long)]
    mirror_size_mm: Option<f64>,
    /// Mirror to object distance (m)
    #[arg(long)]
    distance_m: Option<f64>,
    #[arg(long)]
    absorptivity: Option<f64>,
    #[arg(long)]
    emissivity: Option<f64>,
    /// Convection coefficient (W/(m²·K))
    #[arg(long)]
    convection: Option<f64>,
    /// Ambient temperature (°C)
    #[arg(long)]
    ambient_c: Option<f64>,
    #[arg(long)]
    area_cm2: Option<f64>,
    #[arg(long)]
    thickness_mm: Option<f64>,
    #[arg(long)]
    mass_g: Option<f64>,
    /// Specific heat (J/(kg·K)); overrides --material
    #[arg(long)]
    specific_heat: Option<f64>,
    /// Specific-heat preset label, e.g. "Metal (aluminum)"
    #[arg(long)]
    material: Option<String>,
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    fn to_scenario(&self) -> AppResult<ScenarioDef> {
        let mut s = ScenarioDef::new("calc", "Command-line calculation");
        let light = &mut s.light;
        light.mode = match self.mode {
            ModeArg::Direct => LightModeDef::Direct,
            ModeArg::Lux => LightModeDef::Lux,
            ModeArg::LuxNd => LightModeDef::LuxNd,
        };
        set(&mut light.irradiance_w_m2, self.irradiance);
        set(&mut light.lux, self.lux);
        set(&mut light.k_factor, self.k_factor);
        light.nd_filters = self.nd_filters.clone();
        set(&mut light.incidence_angle_deg, self.incidence);
        if let Some(count) = self.mirrors {
            light.reflection.enabled = true;
            light.reflection.reflectors = count;
        }
        set(&mut light.reflection.reflectance_pct, self.reflectance);
        light.reflection.mirror_size_mm = self.mirror_size_mm;
        light.reflection.distance_m = self.distance_m;

        set(&mut s.surface.absorptivity, self.absorptivity);
        set(&mut s.surface.emissivity, self.emissivity);
        set(&mut s.environment.convection_w_m2k, self.convection);
        set(&mut s.environment.ambient_c, self.ambient_c);
        set(&mut s.object.area_cm2, self.area_cm2);
        set(&mut s.object.thickness_mm, self.thickness_mm);
        set(&mut s.object.mass_g, self.mass_g);
        if let Some(label) = &self.material {
            let preset = ht_presets::find(PresetKind::SpecificHeat, label)
                .ok_or_else(|| AppError::InvalidInput(format!("Unknown material: {label}")))?;
            s.object.specific_heat_j_kgk = preset.value;
        }
        set(&mut s.object.specific_heat_j_kgk, self.specific_heat);
        Ok(s)
    }
}

fn set(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if cli.timing {
        ht_core::timing::enable_timing();
    }

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenarios { project_path } => cmd_scenarios(&project_path),
        Commands::Run {
            project_path,
            scenario_id,
            no_cache,
            json,
        } => cmd_run(&project_path, &scenario_id, !no_cache, json),
        Commands::Calc(args) => cmd_calc(&args),
        Commands::Runs {
            project_path,
            scenario_id,
        } => cmd_runs(&project_path, &scenario_id),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::ExportSeries {
            project_path,
            run_id,
            celsius,
            output,
        } => cmd_export_series(&project_path, &run_id, celsius, output.as_deref()),
        Commands::Presets { kind, search, json } => {
            cmd_presets(kind.as_deref(), search.as_deref(), json)
        }
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid ({} scenarios)", project.scenarios.len());
    Ok(())
}

fn cmd_scenarios(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let scenarios = project_service::list_scenarios(&project);

    if scenarios.is_empty() {
        println!("No scenarios found in project");
    } else {
        println!("Scenarios in project '{}':", project.name);
        for s in scenarios {
            let mirrors = match s.mirrors {
                0 => String::new(),
                n => format!(", {n} mirror(s)"),
            };
            println!("  {} - {} ({}{})", s.id, s.name, s.light_mode, mirrors);
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, scenario_id: &str, use_cache: bool, json: bool) -> AppResult<()> {
    let request = RunRequest {
        project_path,
        scenario_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if json {
        return print_json(&response.record);
    }

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Calculation completed: {}", response.run_id);
    }
    print_record(&response.record);
    if ht_core::timing::is_enabled() {
        print_timing_summary(&response.timing);
    }
    Ok(())
}

fn cmd_calc(args: &CalcArgs) -> AppResult<()> {
    let scenario = args.to_scenario()?;
    let outcome = run_service::calculate_scenario(&scenario)?;
    let record = outcome.record();
    if args.json {
        return print_json(&record);
    }
    print_record(&record);
    Ok(())
}

fn print_json(record: &RunRecord) -> AppResult<()> {
    let text = serde_json::to_string_pretty(record)
        .map_err(|e| AppError::InvalidInput(format!("cannot encode result: {e}")))?;
    println!("{text}");
    Ok(())
}

fn print_record(record: &RunRecord) {
    let light = &record.light;
    println!("\nLight:");
    println!("  Effective irradiance: {:.1} W/m²", light.irradiance_w_m2);
    println!(
        "  Illuminated area:     {:.1} cm²",
        light.illuminated_area_m2 * 1.0e4
    );
    println!("  Incidence multiplier: {:.3}", light.incidence_multiplier);
    if let Some(spot) = &light.spot {
        println!(
            "  Mirror spot:          {:.1} mm side, {:.1} cm², concentration {:.3}",
            spot.side_m * 1.0e3,
            spot.area_m2 * 1.0e4,
            spot.concentration
        );
    }

    let eq = &record.equilibrium;
    println!("\nEquilibrium:");
    println!(
        "  Temperature: {:.2} K ({:.1} °C)",
        eq.temperature_k,
        kelvin_to_celsius(eq.temperature_k)
    );
    println!("  Absorbed:    {:.3} W", eq.absorbed_w);
    println!("  Convection:  {:.3} W", eq.convection_w);
    println!("  Radiation:   {:.3} W", eq.radiation_w);
    println!("  Total loss:  {:.3} W", eq.total_loss_w);

    let m = &record.milestones;
    let horizon = record.transient.horizon_s;
    println!("\nWarm-up:");
    for (label, t) in [("50%", m.t50_s), ("90%", m.t90_s), ("95%", m.t95_s), ("99%", m.t99_s)] {
        let note = if horizon > 0.0 && t >= horizon { "  (not reached)" } else { "" };
        println!("  {label}: {}{note}", format_duration(t));
    }
    println!(
        "  Simulated {} in steps of {:.2} s ({} steps{})",
        format_duration(horizon),
        record.transient.time_step_s,
        record.transient.steps,
        if record.transient.settled { ", settled early" } else { "" }
    );
}

fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1} s")
    } else {
        let minutes = (seconds / 60.0).floor();
        format!("{minutes:.0} min {:.0} s", seconds - minutes * 60.0)
    }
}

fn print_timing_summary(timing: &ht_app::RunTimingSummary) {
    println!("\nTiming summary:");
    println!("  Compile: {:.4}s", timing.compile_time_s);
    println!("  Solve:   {:.4}s", timing.solve_time_s);
    println!("  Save:    {:.4}s", timing.save_time_s);
    if timing.load_cache_time_s > 0.0 {
        println!("  Cache load: {:.4}s", timing.load_cache_time_s);
    }
    println!("  Total:   {:.4}s", timing.total_time_s);
}

fn cmd_runs(project_path: &Path, scenario_id: &str) -> AppResult<()> {
    let runs = run_service::list_runs(project_path, scenario_id)?;

    if runs.is_empty() {
        println!("No cached runs found for scenario: {}", scenario_id);
    } else {
        println!("Cached runs for scenario '{}':", scenario_id);
        for manifest in runs {
            print_manifest_line(&manifest);
        }
    }
    Ok(())
}

fn print_manifest_line(manifest: &RunManifest) {
    println!(
        "  {} ({}, engine {})",
        manifest.run_id, manifest.timestamp, manifest.engine_version
    );
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let (manifest, record) = run_service::load_run(project_path, run_id)?;
    let summary = query::get_run_summary(&record)?;

    println!("Run {}", manifest.run_id);
    println!("  Scenario:  {}", manifest.scenario_id);
    println!("  Timestamp: {}", manifest.timestamp);
    println!("  Points:    {}", summary.point_count);
    println!(
        "  Time range: {:.1} - {:.1} s",
        summary.time_range.0, summary.time_range.1
    );
    println!(
        "  Peak temperature: {:.2} K ({:.1} °C)",
        summary.peak_temperature_k,
        kelvin_to_celsius(summary.peak_temperature_k)
    );
    print_record(&record);
    Ok(())
}

fn cmd_export_series(
    project_path: &Path,
    run_id: &str,
    celsius: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, record) = run_service::load_run(project_path, run_id)?;
    let unit = if celsius {
        TemperatureUnit::Celsius
    } else {
        TemperatureUnit::Kelvin
    };
    let csv = query::series_to_csv(&query::temperature_series(&record, unit), unit);
    debug!(run_id, points = record.series.len(), "exporting series");

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("✓ Exported {} points to {}", record.series.len(), path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

fn cmd_presets(kind: Option<&str>, search: Option<&str>, json: bool) -> AppResult<()> {
    let kinds: Vec<PresetKind> = match kind {
        Some(name) => {
            let kind = PresetKind::parse(name)
                .ok_or_else(|| AppError::InvalidInput(format!("Unknown preset kind: {name}")))?;
            vec![kind]
        }
        None => PresetKind::ALL.to_vec(),
    };

    if let Some(query) = search {
        return print_search_hits(&kinds, query, json);
    }

    if json {
        let tables: serde_json::Map<String, serde_json::Value> = kinds
            .iter()
            .map(|k| {
                let value = serde_json::to_value(k.presets()).unwrap_or(serde_json::Value::Null);
                (k.as_str().to_string(), value)
            })
            .collect();
        println!("{}", serde_json::Value::Object(tables));
        return Ok(());
    }

    for kind in kinds {
        println!("{} [{}]", kind, kind.unit());
        if let Some(help) = kind.help() {
            println!("  {help}");
        }
        for preset in kind.presets() {
            let range = preset
                .range
                .map(|r| format!("  ({} - {})", r.min, r.max))
                .unwrap_or_default();
            println!("  {:<38} {:>8}{}  {}", preset.label, preset.value, range, preset.description);
        }
        if let Some(default) = kind.default_value() {
            println!("  default: {default}");
        }
        println!();
    }
    Ok(())
}

fn print_search_hits(kinds: &[PresetKind], query: &str, json: bool) -> AppResult<()> {
    let hits: Vec<_> = ht_presets::search(query)
        .into_iter()
        .filter(|(kind, _)| kinds.contains(kind))
        .collect();

    if json {
        let rows: Vec<serde_json::Value> = hits
            .iter()
            .map(|(kind, preset)| {
                serde_json::json!({
                    "kind": kind.as_str(),
                    "label": preset.label,
                    "value": preset.value,
                    "unit": kind.unit(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(rows));
        return Ok(());
    }

    if hits.is_empty() {
        println!("No presets match '{query}'");
    }
    for (kind, preset) in hits {
        let (label, value, unit) = (preset.label, preset.value, kind.unit());
        println!("  {:<16} {label:<38} {value:>8} {unit}", kind.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_and_calc() {
        let cli =
            Cli::try_parse_from(["heliotherm", "run", "p.yaml", "plate", "--no-cache"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { no_cache: true, json: false, .. }));

        let cli = Cli::try_parse_from([
            "heliotherm", "calc", "--mode", "lux-nd", "--lux", "1000", "--nd", "64", "--nd", "4",
            "--mirrors", "2",
        ])
        .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let s = args.to_scenario().unwrap();
        assert_eq!(s.light.mode, LightModeDef::LuxNd);
        assert_eq!(s.light.nd_filters, vec![64.0, 4.0]);
        assert!(s.light.reflection.enabled);
        assert_eq!(s.light.reflection.reflectors, 2);
        assert_eq!(s.object.specific_heat_j_kgk, 500.0);
    }

    #[test]
    fn material_preset_sets_specific_heat() {
        let cli = Cli::try_parse_from(["heliotherm", "calc", "--material", "metal (ALUMINUM)"])
            .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.to_scenario().unwrap().object.specific_heat_j_kgk, 900.0);

        let cli = Cli::try_parse_from([
            "heliotherm", "calc", "--material", "Wood", "--specific-heat", "1700",
        ])
        .unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.to_scenario().unwrap().object.specific_heat_j_kgk, 1700.0);
    }

    #[test]
    fn unknown_material_is_rejected() {
        let cli = Cli::try_parse_from(["heliotherm", "calc", "--material", "unobtainium"]).unwrap();
        let Commands::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert!(matches!(args.to_scenario(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn presets_accept_search_and_timing() {
        let cli = Cli::try_parse_from([
            "heliotherm", "presets", "irradiance", "--search", "london", "--timing",
        ])
        .unwrap();
        assert!(cli.timing);
        assert!(matches!(
            cli.command,
            Commands::Presets { kind: Some(_), search: Some(_), json: false }
        ));
        assert!(cmd_presets(Some("irradiance"), Some("london"), true).is_ok());
        assert!(cmd_presets(Some("colour"), Some("london"), false).is_err());
    }

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(42.0), "42.0 s");
        assert_eq!(format_duration(150.0), "2 min 30 s");
    }
}
