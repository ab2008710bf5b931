//! Loading profiles from disk

use std::io::Write;

use aeromist_profiles::{Profile, ProfileError, ProfileRegistry, ProfileValidator, GLOBAL_REGISTRY};
use tempfile::NamedTempFile;

fn write_profile(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_profile_from_file() {
    let file = write_profile(
        r#"{
            "name": "greenhouse_a",
            "description": "Bench A, high-pressure nozzles",
            "parameters": {
                "droplet_diameter_um": 40.0,
                "nutrient_concentration_mg_per_l": 1200.0,
                "mist_velocity_m_per_s": 1.5
            }
        }"#,
    );

    let profile = Profile::from_path(file.path()).unwrap();
    assert_eq!(profile.name, "greenhouse_a");
    assert_eq!(profile.parameters.droplet_diameter_um, 40.0);

    let q = profile.evaluate().unwrap();
    assert!(q.impaction_efficiency > 0.99);
    // ml/min × mg/L = µg/min
    let expected_mg = q.absorption_rate_ml_per_min * 1200.0 / 1000.0;
    assert!((q.nutrients_absorbed_rate_mg_per_min - expected_mg).abs() < 1e-12);
}

#[test]
fn saved_profile_loads_back() {
    let original = GLOBAL_REGISTRY.get("notebook_defaults").unwrap();
    let file = write_profile(&original.to_json().unwrap());

    let loaded = Profile::from_path(file.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Profile::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ProfileError::Io(_)));
}

#[test]
fn invalid_file_names_field() {
    let file = write_profile(
        r#"{"name": "bad", "parameters": {"mist_velocity_m_per_s": 500.0}}"#,
    );

    let err = Profile::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("mist_velocity_m_per_s"));
}

#[test]
fn file_profiles_join_defaults() {
    let registry = ProfileRegistry::new();
    registry.load_defaults().unwrap();

    let file = write_profile(r#"{"name": "custom", "parameters": {}}"#);
    registry.register(Profile::from_path(file.path()).unwrap()).unwrap();

    assert_eq!(registry.names().len(), 4);
    assert!(registry.get("custom").unwrap().evaluate().is_ok());
}

#[test]
fn fine_fog_is_flagged() {
    let profile = GLOBAL_REGISTRY.get("fine_fog").unwrap();
    let report = ProfileValidator::default().validate(&profile);

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 2);
    assert!(profile.evaluate().unwrap().impaction_efficiency < 0.1);
}
