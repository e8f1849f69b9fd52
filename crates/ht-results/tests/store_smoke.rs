use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ht_results::*;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn record(peak: f64) -> RunRecord {
    RunRecord {
        light: LightRecord {
            irradiance_w_m2: 866.0,
            illuminated_area_m2: 0.01,
            incidence_multiplier: 0.866,
            spot: None,
        },
        equilibrium: EquilibriumRecord {
            temperature_k: peak,
            absorbed_w: 7.4,
            convection_w: 4.0,
            radiation_w: 3.4,
            total_loss_w: 7.4,
        },
        milestones: MilestoneRecord {
            t50_s: 80.0,
            t90_s: 270.0,
            t95_s: 350.0,
            t99_s: 560.0,
        },
        transient: TransientInfo {
            horizon_s: 1040.0,
            time_step_s: 0.1,
            steps: 9000,
            settled: true,
        },
        series: vec![
            SeriesPoint { time_s: 0.0, temperature_k: 293.15 },
            SeriesPoint { time_s: 1040.0, temperature_k: peak },
        ],
    }
}

#[test]
fn save_list_load_delete() {
    let project_dir = unique_temp_dir("ht_results_project");
    fs::create_dir_all(&project_dir).unwrap();
    let project_path = project_dir.join("project.yaml");
    fs::write(&project_path, "version: 1\nname: test\n").unwrap();

    let store = RunStore::for_project(&project_path).unwrap();
    assert!(store.root_dir().ends_with(".heliotherm/runs"));

    let manifest = RunManifest {
        run_id: "abc123".to_string(),
        scenario_id: "plate".to_string(),
        timestamp: "2026-03-01T12:00:00.000Z".to_string(),
        engine_version: "0.1.0".to_string(),
    };
    assert!(!store.has_run("abc123"));
    store.save_run(&manifest, &record(315.0)).unwrap();
    assert!(store.has_run("abc123"));

    let (loaded_manifest, loaded_record) = store.load_run("abc123").unwrap();
    assert_eq!(loaded_manifest, manifest);
    assert_eq!(loaded_record, record(315.0));

    assert_eq!(store.list_runs("plate").unwrap().len(), 1);
    assert!(store.list_runs("other").unwrap().is_empty());

    store.delete_run("abc123").unwrap();
    assert!(!store.has_run("abc123"));
    assert!(matches!(
        store.load_manifest("abc123"),
        Err(ResultsError::RunNotFound { .. })
    ));
}

#[test]
fn newest_run_listed_first() {
    let store = RunStore::new(unique_temp_dir("ht_results_order")).unwrap();
    for (id, stamp) in [("old", "2026-01-01T00:00:00.000Z"), ("new", "2026-02-01T00:00:00.000Z")] {
        let manifest = RunManifest {
            run_id: id.to_string(),
            scenario_id: "plate".to_string(),
            timestamp: stamp.to_string(),
            engine_version: "0.1.0".to_string(),
        };
        store.save_run(&manifest, &record(300.0)).unwrap();
    }
    let ids: Vec<_> = store.list_all().unwrap().into_iter().map(|m| m.run_id).collect();
    assert_eq!(ids, vec!["new", "old"]);
}

#[test]
fn path_like_run_ids_rejected() {
    let store = RunStore::new(unique_temp_dir("ht_results_paths")).unwrap();
    let manifest = RunManifest::new("../escape".to_string(), "plate", "0.1.0");
    assert!(matches!(
        store.save_run(&manifest, &record(300.0)),
        Err(ResultsError::InvalidPath { .. })
    ));
}

#[test]
fn fresh_manifest_has_rfc3339_timestamp() {
    let manifest = RunManifest::new("id".to_string(), "plate", "0.1.0");
    assert!(chrono::DateTime::parse_from_rfc3339(&manifest.timestamp).is_ok());
    assert!(manifest.timestamp.ends_with('Z'));
}
