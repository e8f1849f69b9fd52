//! Content-based hashing for run IDs.

use ht_project::schema::ScenarioDef;
use sha2::{Digest, Sha256};

use crate::ResultsResult;

/// SHA-256 over the scenario's JSON form and the engine version.
///
/// The scenario id and display name take part in the hash, so renaming a
/// scenario starts a fresh cache entry.
pub fn compute_run_id(scenario: &ScenarioDef, engine_version: &str) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_vec(scenario)?;
    hasher.update(&scenario_json);
    hasher.update(engine_version.as_bytes());

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let scenario = ScenarioDef::new("s1", "Plate");
        let hash1 = compute_run_id(&scenario, "v1").unwrap();
        let hash2 = compute_run_id(&scenario.clone(), "v1").unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert!(hash1.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_follows_inputs_and_version() {
        let base = ScenarioDef::new("s1", "Plate");
        let mut heavier = base.clone();
        heavier.object.mass_g = 200.0;

        let h = compute_run_id(&base, "v1").unwrap();
        assert_ne!(h, compute_run_id(&heavier, "v1").unwrap());
        assert_ne!(h, compute_run_id(&base, "v2").unwrap());
    }

    #[test]
    fn non_finite_values_still_hash() {
        let mut scenario = ScenarioDef::new("s1", "Plate");
        scenario.object.mass_g = f64::NAN;
        let id = compute_run_id(&scenario, "v1").unwrap();
        assert_eq!(id.len(), 64);
        assert_ne!(id, compute_run_id(&ScenarioDef::new("s1", "Plate"), "v1").unwrap());
    }
}
