//! Project loading, saving, validation, and introspection.

use std::path::Path;

use ht_project::schema::{LightModeDef, Project, ScenarioDef};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub light_mode: &'static str,
    pub mirrors: u32,
}

/// Load a project file (YAML, or JSON by extension), migrated and validated.
pub fn load_project(path: &Path) -> AppResult<Project> {
    if !path.exists() {
        return Err(AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    Ok(ht_project::load_any(path)?)
}

pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    Ok(ht_project::save_any(path, project)?)
}

/// Validate project structure and value ranges.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.scenarios.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one scenario".to_string(),
        ));
    }
    ht_project::validate_project(project)?;
    Ok(())
}

pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            light_mode: match scenario.light.mode {
                LightModeDef::Direct => "direct",
                LightModeDef::Lux => "lux",
                LightModeDef::LuxNd => "lux-nd",
            },
            mirrors: if scenario.light.reflection.enabled {
                scenario.light.reflection.reflectors
            } else {
                0
            },
        })
        .collect()
}

pub fn get_scenario<'a>(project: &'a Project, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    project
        .scenario(scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}
