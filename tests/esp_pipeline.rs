//! 참조 사례와 분기/경계 조건에 대한 전체 계산 회귀 테스트.
use approx::assert_relative_eq;
use esp_design_toolbox::esp::{
    self, head, CalcError, EquipmentConfig, FlowRegime, WellInputs,
};

fn run(input: &WellInputs) -> esp::CalculationResult {
    esp::calculate(input, &EquipmentConfig::default()).expect("calculation")
}

fn with_flow(rate: f64) -> WellInputs {
    WellInputs {
        desired_flow_rate_m3_per_day: rate,
        ..WellInputs::reference_case()
    }
}

#[test]
fn reference_case_end_to_end() {
    let res = run(&WellInputs::reference_case());

    // 150 m³/day ÷ 5 m³/day/bar = 30 bar 강하
    let fbhp_bar = res.get("pressures.flowing_bottomhole_pressure_bar").unwrap();
    assert_relative_eq!(fbhp_bar, 150.0, max_relative = 1e-9);
    assert!(fbhp_bar < 180.0);

    let oil = 141.5 / 166.5 * 1000.0;
    assert_relative_eq!(
        res.fluid_properties.mixture_density_kg_m3,
        0.6 * oil + 0.4 * 1050.0,
        max_relative = 1e-12
    );
    assert!(res.fluid_properties.mixture_density_kg_m3 > oil);
    assert!(res.fluid_properties.mixture_density_kg_m3 < 1050.0);

    assert_eq!(res.head.flow_regime, FlowRegime::Turbulent);
    assert_relative_eq!(res.head.reynolds_number, 5100.3, max_relative = 1e-4);
    assert_relative_eq!(res.head.vertical_lift_m, 555.70, max_relative = 1e-4);
    assert_relative_eq!(res.head.friction_loss_m, 3.8519, max_relative = 1e-3);
    assert_relative_eq!(res.head.surface_pressure_head_m, 219.24, max_relative = 1e-4);
    assert_relative_eq!(res.head.total_dynamic_head_m, 778.79, max_relative = 1e-4);

    let stages = res.get("stages.estimated_stages").unwrap();
    assert_eq!(stages, (res.head.total_dynamic_head_m / 10.0).ceil());
    assert_eq!(res.stages.estimated_stages, 78);

    let hp = res.get("power.surface_power_required_hp").unwrap();
    assert!(hp > 0.0);
    assert_relative_eq!(hp, 32.05, max_relative = 1e-3);
}

#[test]
fn reference_case_reports_short_fluid_column() {
    let res = run(&WellInputs::reference_case());
    assert!(!res.pressures.intake.column_reaches_pump);
    assert!(res.pressures.intake.fluid_level_m < 2200.0);
    assert_eq!(res.pressures.intake.excess_pressure_pa, 0.0);
    let rho_g = res.fluid_properties.mixture_density_kg_m3 * 9.81;
    assert_relative_eq!(
        res.pressures.intake.pump_intake_pressure_pa,
        rho_g * res.pressures.intake.fluid_level_m,
        max_relative = 1e-12
    );
    assert_eq!(res.warnings.len(), 1);
    assert!(res.warnings[0].contains("액주 높이"));
}

#[test]
fn high_reservoir_pressure_fills_column_to_pump() {
    let input = WellInputs {
        reservoir_pressure_bar: 300.0,
        pump_depth_m: 1500.0,
        ..WellInputs::reference_case()
    };
    let res = run(&input);
    let rho_g = res.fluid_properties.mixture_density_kg_m3 * 9.81;
    assert!(res.pressures.intake.column_reaches_pump);
    assert_eq!(res.pressures.intake.fluid_level_m, 1500.0);
    assert!(res.pressures.intake.excess_pressure_pa > 0.0);
    assert!(res.pressures.intake.pump_intake_pressure_pa > rho_g * 1500.0);
    assert_eq!(res.head.vertical_lift_m, 0.0);
    assert!(res.warnings.is_empty(), "{:?}", res.warnings);
}

#[test]
fn discharge_pressure_adds_pump_head() {
    let res = run(&WellInputs::reference_case());
    let rho_g = res.fluid_properties.mixture_density_kg_m3 * 9.81;
    assert_relative_eq!(
        res.discharge.discharge_pressure_pa,
        res.pressures.intake.pump_intake_pressure_pa + rho_g * res.head.total_dynamic_head_m,
        max_relative = 1e-12
    );
}

#[test]
fn friction_factor_boundary_in_pipeline_terms() {
    let rel = EquipmentConfig::default().relative_roughness();
    let (laminar, regime_low) = head::friction_factor(1999.0, rel).unwrap();
    let (turbulent, regime_high) = head::friction_factor(2001.0, rel).unwrap();
    assert_eq!(regime_low, FlowRegime::Laminar);
    assert_eq!(regime_high, FlowRegime::Turbulent);
    assert_eq!(laminar, 64.0 / 1999.0);
    let x = (rel / 3.7 + 5.74 / 2001.0_f64.powf(0.9)).log10();
    assert_eq!(turbulent, 0.25 / (x * x));
}

#[test]
fn low_rate_runs_in_laminar_regime() {
    // 이 유체/튜빙 조합에서는 약 58.8 m³/day 미만이 층류
    let res = run(&with_flow(40.0));
    assert_eq!(res.head.flow_regime, FlowRegime::Laminar);
    assert_eq!(res.head.friction_factor, 64.0 / res.head.reynolds_number);
    assert!(res.warnings.iter().any(|w| w.contains("층류")));
    assert!(!res.warnings.iter().any(|w| w.contains("가스 간섭")));
}

#[test]
fn rate_near_open_flow_warns_about_low_intake_pressure() {
    // 180 − 860/5 = 8 bar
    let res = run(&with_flow(860.0));
    assert_relative_eq!(
        res.get("pressures.pump_intake_pressure_bar").unwrap(),
        8.0,
        max_relative = 1e-9
    );
    assert_eq!(res.head.flow_regime, FlowRegime::Turbulent);
    assert!(res.warnings.iter().any(|w| w.contains("가스 간섭")));
    assert!(!res.warnings.iter().any(|w| w.contains("층류")));
}

#[test]
fn turbulent_reference_case_has_no_flow_or_intake_warnings() {
    let res = run(&WellInputs::reference_case());
    assert!(!res.warnings.iter().any(|w| w.contains("층류")));
    assert!(!res.warnings.iter().any(|w| w.contains("가스 간섭")));
}

#[test]
fn head_and_power_increase_with_rate() {
    for rates in [
        &[10.0, 20.0, 30.0, 40.0, 50.0][..],
        &[100.0, 150.0, 200.0, 300.0, 400.0][..],
    ] {
        let results: Vec<_> = rates.iter().map(|&q| run(&with_flow(q))).collect();
        let regime = results[0].head.flow_regime;
        for pair in results.windows(2) {
            assert_eq!(pair[1].head.flow_regime, regime);
            assert!(pair[1].head.total_dynamic_head_m > pair[0].head.total_dynamic_head_m);
            assert!(
                pair[1].power.surface_power_required_w > pair[0].power.surface_power_required_w
            );
        }
    }
}

#[test]
fn power_chain_identity_holds() {
    for input in [
        WellInputs::reference_case(),
        with_flow(40.0),
        WellInputs {
            water_cut: 0.95,
            oil_api: 20.0,
            ..WellInputs::reference_case()
        },
    ] {
        let cfg = EquipmentConfig::default();
        let res = esp::calculate(&input, &cfg).unwrap();
        let e = cfg.efficiencies;
        let recovered =
            res.power.surface_power_required_w * e.cable * e.transformer * e.vsd * e.motor * e.pump;
        assert_relative_eq!(recovered, res.power.hydraulic_power_w, max_relative = 1e-12);
    }
}

#[test]
fn fbhp_never_exceeds_reservoir_pressure() {
    for rate in [0.5, 10.0, 150.0, 800.0] {
        let res = run(&with_flow(rate));
        assert!(
            res.pressures.flowing_bottomhole_pressure_pa
                <= res.normalized_inputs.reservoir_pressure_pa
        );
    }
}

#[test]
fn zero_rate_is_numerically_degenerate() {
    let err = esp::calculate(&with_flow(0.0), &EquipmentConfig::default()).unwrap_err();
    assert!(matches!(err, CalcError::NumericDegenerate(_)), "{err}");
}

#[test]
fn rate_above_open_flow_is_rejected() {
    // AOF = 180 bar × 5 m³/day/bar = 900 m³/day
    let err = esp::calculate(&with_flow(1000.0), &EquipmentConfig::default()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)), "{err}");
}

#[test]
fn invalid_equipment_fails_before_inputs() {
    let mut cfg = EquipmentConfig::default();
    cfg.efficiencies.motor = 0.0;
    let mut input = WellInputs::reference_case();
    input.water_cut = 2.0;
    let err = esp::calculate(&input, &cfg).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(ref m) if m.contains("모터")), "{err}");
}

#[test]
fn custom_head_per_stage_changes_stage_count() {
    let cfg = EquipmentConfig {
        head_per_stage_m: 6.0,
        ..EquipmentConfig::default()
    };
    let res = esp::calculate(&WellInputs::reference_case(), &cfg).unwrap();
    assert_eq!(
        res.stages.estimated_stages,
        (res.head.total_dynamic_head_m / 6.0).ceil() as u32
    );
}

#[test]
fn key_set_is_stable_across_runs() {
    let a: Vec<String> = run(&WellInputs::reference_case())
        .to_flat_map()
        .into_keys()
        .collect();
    let b: Vec<String> = run(&with_flow(40.0)).to_flat_map().into_keys().collect();
    assert_eq!(a, b);
    for key in [
        "input_data.water_cut",
        "pressures.pump_intake_pressure_pa",
        "pressures.pump_intake_pressure_bar",
        "pressures.discharge_pressure_bar",
        "head.total_dynamic_head_m",
        "power.hydraulic_power_w",
        "power.surface_power_required_hp",
        "stages.estimated_stages",
    ] {
        assert!(a.iter().any(|k| k == key), "missing {key}");
    }
}

#[test]
fn results_serialize_to_json() {
    let res = run(&WellInputs::reference_case());
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["input_data"]["water_cut"], 0.4);
    assert_eq!(json["head"]["flow_regime"], "Turbulent");
    assert_eq!(json["stages"]["estimated_stages"], 78);
}
