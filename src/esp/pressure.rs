use serde::Serialize;
use tracing::debug;

use super::equipment::EquipmentConfig;
use super::error::{CalcError, Result};
use super::fluid::FluidProperties;
use super::inputs::NormalizedInputs;

/// 유동 공저압과 펌프 흡입압 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureProfile {
    /// 유동 공저압(FBHP) [Pa]
    pub flowing_bottomhole_pressure_pa: f64,
    /// FBHP에 해당하는 정수두 [m]
    pub static_fluid_head_m: f64,
    #[serde(flatten)]
    pub intake: IntakeCondition,
}

/// 펌프 흡입부 액주 상태.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntakeCondition {
    /// 유체 액면 [m]. 펌프 심도를 넘지 않는다.
    pub fluid_level_m: f64,
    /// 액주가 펌프 심도까지 차 있을 때 남는 초과 압력 [Pa]. 아니면 0.
    pub excess_pressure_pa: f64,
    /// 펌프 흡입압(PIP) [Pa]
    pub pump_intake_pressure_pa: f64,
    /// 액주가 펌프 흡입부까지 도달하는지 여부
    pub column_reaches_pump: bool,
}

/// 펌프 토출측 압력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DischargePressure {
    /// 토출압 = PIP + ρ·g·TDH [Pa]
    pub discharge_pressure_pa: f64,
    /// 펌프 차압 [Pa]
    pub pump_differential_pressure_pa: f64,
}

/// 선형 IPR로 유동 공저압을 구한다: FBHP = Pr − Q/PI.
///
/// 단위는 Pa, m³/s, m³/s/Pa 로 일치해야 한다.
pub fn flowing_bottomhole_pressure(
    reservoir_pressure_pa: f64,
    flow_rate_m3_s: f64,
    productivity_index_si: f64,
) -> Result<f64> {
    if !(productivity_index_si > 0.0) {
        return Err(CalcError::InvalidInput(format!(
            "생산성 지수는 0보다 커야 합니다 (입력: {productivity_index_si})"
        )));
    }
    Ok(reservoir_pressure_pa - flow_rate_m3_s / productivity_index_si)
}

/// 유체 액면과 펌프 흡입압을 계산한다.
///
/// 정수두가 펌프 심도 이상이면 액면을 펌프 심도로 두고 초과 압력을 이월한다.
/// 정수두가 펌프 심도에 못 미치면 액면 = 정수두, 초과 압력 = 0 이다.
/// 두 경우 모두 흡입압 = 초과 압력 + ρ·g·액면.
pub fn intake_condition(
    static_head_m: f64,
    fbhp_pa: f64,
    pump_depth_m: f64,
    rho_g: f64,
) -> IntakeCondition {
    let (fluid_level, excess) = if static_head_m < pump_depth_m {
        (static_head_m, 0.0)
    } else {
        (pump_depth_m, fbhp_pa - rho_g * pump_depth_m)
    };
    IntakeCondition {
        fluid_level_m: fluid_level,
        excess_pressure_pa: excess,
        pump_intake_pressure_pa: excess + rho_g * fluid_level,
        column_reaches_pump: static_head_m >= pump_depth_m,
    }
}

/// 혼합 밀도와 중력가속도의 곱(ρ·g)을 구한다. 0 이하이면 수두 환산이 불가능하다.
pub(crate) fn hydrostatic_gradient(density_kg_m3: f64, gravity_m_s2: f64) -> Result<f64> {
    let rho_g = density_kg_m3 * gravity_m_s2;
    if !(rho_g > 0.0) || !rho_g.is_finite() {
        return Err(CalcError::NumericDegenerate(format!(
            "정수압 구배 ρ·g가 0 이하입니다 (ρ={density_kg_m3}, g={gravity_m_s2})"
        )));
    }
    Ok(rho_g)
}

/// FBHP, 정수두, 액면, 펌프 흡입압을 순서대로 계산한다.
pub fn compute_pressure_profile(
    input: &NormalizedInputs,
    fluid: &FluidProperties,
    equipment: &EquipmentConfig,
) -> Result<PressureProfile> {
    let fbhp = flowing_bottomhole_pressure(
        input.reservoir_pressure_pa,
        input.flow_rate_m3_s,
        input.productivity_index_si,
    )?;
    if fbhp < 0.0 {
        // 목표 유량이 절대 개방 유량(AOF = Pr·PI)을 넘는 경우
        return Err(CalcError::InvalidInput(format!(
            "목표 유량이 유정의 최대 유입량을 초과합니다 (FBHP={:.2} bar)",
            fbhp / crate::units::pressure::PA_PER_BAR
        )));
    }
    let rho_g = hydrostatic_gradient(fluid.mixture_density_kg_m3, equipment.gravity_m_s2)?;
    let static_head = fbhp / rho_g;
    let intake = intake_condition(static_head, fbhp, input.pump_depth_m, rho_g);

    debug!(
        fbhp_pa = fbhp,
        static_head_m = static_head,
        fluid_level_m = intake.fluid_level_m,
        pip_pa = intake.pump_intake_pressure_pa,
        column_reaches_pump = intake.column_reaches_pump,
        "pressure profile computed"
    );
    Ok(PressureProfile {
        flowing_bottomhole_pressure_pa: fbhp,
        static_fluid_head_m: static_head,
        intake,
    })
}

/// 총 동양정으로부터 토출압과 펌프 차압을 구한다.
pub fn compute_discharge_pressure(
    profile: &PressureProfile,
    fluid: &FluidProperties,
    total_dynamic_head_m: f64,
    equipment: &EquipmentConfig,
) -> Result<DischargePressure> {
    let rho_g = hydrostatic_gradient(fluid.mixture_density_kg_m3, equipment.gravity_m_s2)?;
    let differential = rho_g * total_dynamic_head_m;
    Ok(DischargePressure {
        discharge_pressure_pa: profile.intake.pump_intake_pressure_pa + differential,
        pump_differential_pressure_pa: differential,
    })
}
