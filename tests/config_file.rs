//! 설정 파일 생성/로드 테스트.
use std::path::Path;

use esp_design_toolbox::app::{execute, load_well_inputs, AppError, Command};
use esp_design_toolbox::config::{load_or_default, Config, ConfigError, OutputFormat};
use esp_design_toolbox::esp::WellInputs;
use esp_design_toolbox::sweep::SweepParameter;
use tempfile::tempdir;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("esp_config.toml");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = load_or_default(&path).unwrap();
    assert_eq!(reloaded, cfg);
}

#[test]
fn saved_changes_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("esp_config.toml");
    let mut cfg = Config::default();
    cfg.equipment.tubing_inner_diameter_m = 0.0762;
    cfg.equipment.efficiencies.vsd = 0.97;
    cfg.report.format = OutputFormat::Csv;
    cfg.save(&path).unwrap();

    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn invalid_equipment_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("esp_config.toml");
    std::fs::write(&path, "[equipment]\nhead_per_stage_m = -1.0\n").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn calc_command_uses_well_file_and_format() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("esp_config.toml");
    let well_path = dir.path().join("well.toml");
    std::fs::write(
        &well_path,
        r#"
        well_depth_m = 2500.0
        pump_depth_m = 2200.0
        reservoir_pressure_bar = 180.0
        bottomhole_temperature_c = 90.0
        wellhead_pressure_bar = 20.0
        productivity_index_m3_per_day_per_bar = 5.0
        desired_flow_rate_m3_per_day = 150.0
        water_cut = 0.4
        gas_oil_ratio = 50.0
        oil_api = 35.0
        "#,
    )
    .unwrap();

    let out = execute(
        &Command::Calc {
            well: Some(well_path),
            format: Some(OutputFormat::Json),
        },
        &config_path,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["stages"]["estimated_stages"], 78);
    assert!(config_path.exists());
}

#[test]
fn sweep_command_renders_one_row_per_step() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("esp_config.toml");
    let out = execute(
        &Command::Sweep {
            param: SweepParameter::FlowRate,
            from: 100.0,
            to: 200.0,
            steps: 3,
            well: None,
            format: Some(OutputFormat::Csv),
        },
        &config_path,
    )
    .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("desired_flow_rate_m3_per_day,"));
    assert!(lines[0].ends_with(",error"));
    assert!(lines[1].starts_with("100.00,"));
    assert!(lines[3].starts_with("200.00,"));
}

#[test]
fn sweep_command_with_zero_steps_is_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("esp_config.toml");
    let result = execute(
        &Command::Sweep {
            param: SweepParameter::WaterCut,
            from: 0.0,
            to: 1.0,
            steps: 0,
            well: None,
            format: None,
        },
        &config_path,
    );
    assert!(matches!(result, Err(AppError::EmptySweep)));
    assert!(!config_path.exists());
}

#[test]
fn init_config_command_writes_default_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("esp_config.toml");
    let out = execute(&Command::InitConfig, &config_path).unwrap();
    assert!(out.contains("esp_config.toml"));
    assert!(config_path.exists());
    assert_eq!(load_or_default(&config_path).unwrap(), Config::default());
}

#[test]
fn demo_well_file_matches_reference_case() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/well.toml");
    let input = load_well_inputs(Some(&path)).unwrap();
    assert_eq!(input, WellInputs::reference_case());
}
