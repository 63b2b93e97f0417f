use serde::Serialize;
use tracing::debug;

use super::equipment::EquipmentConfig;
use super::fluid::FluidProperties;
use super::inputs::NormalizedInputs;

/// 유체동력부터 지상 소요동력까지의 동력 사슬 [W].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerBreakdown {
    /// Q·ρ·g·H
    pub hydraulic_power_w: f64,
    /// 펌프 축동력
    pub shaft_power_w: f64,
    /// 모터 입력 전력
    pub motor_power_w: f64,
    /// 케이블·변압기·VSD 손실을 포함한 지상 소요 전력
    pub surface_power_required_w: f64,
}

/// 효율 사슬을 따라 동력을 계산한다.
///
/// 효율은 `EquipmentConfig::validate`에서 (0, 1] 범위가 보장된다.
pub fn compute_power(
    input: &NormalizedInputs,
    fluid: &FluidProperties,
    total_dynamic_head_m: f64,
    equipment: &EquipmentConfig,
) -> PowerBreakdown {
    let eff = &equipment.efficiencies;
    let hydraulic = input.flow_rate_m3_s
        * fluid.mixture_density_kg_m3
        * equipment.gravity_m_s2
        * total_dynamic_head_m;
    let shaft = hydraulic / eff.pump;
    let motor = shaft / eff.motor;
    let surface = motor / eff.electrical_chain();

    debug!(
        hydraulic_w = hydraulic,
        surface_w = surface,
        "power chain computed"
    );
    PowerBreakdown {
        hydraulic_power_w: hydraulic,
        shaft_power_w: shaft,
        motor_power_w: motor,
        surface_power_required_w: surface,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esp::fluid::compute_fluid_properties;
    use crate::esp::inputs::{normalize, WellInputs};

    #[test]
    fn chain_divides_by_each_efficiency() {
        let equipment = EquipmentConfig::default();
        let n = normalize(&WellInputs::reference_case()).unwrap();
        let fluid = compute_fluid_properties(&n, &equipment);
        let p = compute_power(&n, &fluid, 800.0, &equipment);
        let eff = equipment.efficiencies;
        assert!((p.shaft_power_w * eff.pump - p.hydraulic_power_w).abs() < 1e-9);
        assert!((p.motor_power_w * eff.motor - p.shaft_power_w).abs() < 1e-9);
        let electrical = eff.cable * eff.transformer * eff.vsd;
        assert!((p.surface_power_required_w * electrical - p.motor_power_w).abs() < 1e-9);
    }

    #[test]
    fn zero_head_needs_no_power() {
        let equipment = EquipmentConfig::default();
        let n = normalize(&WellInputs::reference_case()).unwrap();
        let fluid = compute_fluid_properties(&n, &equipment);
        let p = compute_power(&n, &fluid, 0.0, &equipment);
        assert_eq!(p.surface_power_required_w, 0.0);
    }
}
