//! 총 동양정(TDH) 계산.
//!
//! 튜빙 마찰손실은 Darcy-Weisbach 식으로 구한다. 난류 마찰계수는
//! `f = 0.25 / log10(ε/D/3.7 + 5.74/Re^0.9)²` 형태의 명시적 근사(Swamee-Jain)이며,
//! Colebrook-White 반복해를 대체하는 간이식이다.

use serde::Serialize;
use tracing::debug;

use super::equipment::EquipmentConfig;
use super::error::{CalcError, Result};
use super::fluid::FluidProperties;
use super::inputs::NormalizedInputs;
use super::pressure::{hydrostatic_gradient, PressureProfile};

/// 층류/난류 경계 레이놀즈수. 이 값 미만이면 층류로 본다.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2000.0;

/// 튜빙 내 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

/// 양정 구성 요소.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadBreakdown {
    pub flow_velocity_m_per_s: f64,
    pub reynolds_number: f64,
    pub flow_regime: FlowRegime,
    pub friction_factor: f64,
    /// 펌프 심도 구간 튜빙 마찰손실 [m]
    pub friction_loss_m: f64,
    /// 순수 양정 = 펌프 심도 − 액면 [m]
    pub vertical_lift_m: f64,
    /// 정두압 환산 수두 [m]
    pub surface_pressure_head_m: f64,
    pub total_dynamic_head_m: f64,
}

/// 레이놀즈수 ρ·v·D/μ.
pub fn reynolds_number(
    density_kg_m3: f64,
    velocity_m_s: f64,
    diameter_m: f64,
    viscosity_pa_s: f64,
) -> Result<f64> {
    if !(viscosity_pa_s > 0.0) {
        return Err(CalcError::NumericDegenerate(format!(
            "점도가 0 이하라 레이놀즈수를 계산할 수 없습니다 (μ={viscosity_pa_s})"
        )));
    }
    Ok(density_kg_m3 * velocity_m_s * diameter_m / viscosity_pa_s)
}

/// 레이놀즈수와 상대 거칠기로 Darcy 마찰계수를 구한다.
///
/// Re < 2000 이면 층류 `64/Re`, 그 외에는 난류 근사식을 쓴다.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> Result<(f64, FlowRegime)> {
    if !(reynolds > 0.0) || !reynolds.is_finite() {
        return Err(CalcError::NumericDegenerate(format!(
            "레이놀즈수가 0 이하입니다 (Re={reynolds}). 유량이 0인지 확인하세요"
        )));
    }
    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        return Ok((64.0 / reynolds, FlowRegime::Laminar));
    }
    let log_term = (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    let f = 0.25 / (log_term * log_term);
    if !f.is_finite() {
        return Err(CalcError::NumericDegenerate(format!(
            "난류 마찰계수를 계산할 수 없습니다 (Re={reynolds}, ε/D={relative_roughness})"
        )));
    }
    Ok((f, FlowRegime::Turbulent))
}

/// Darcy-Weisbach 마찰손실 수두 h_f = f·(L/D)·v²/(2g).
pub fn darcy_head_loss(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    velocity_m_s: f64,
    gravity_m_s2: f64,
) -> f64 {
    friction_factor * (length_m / diameter_m) * velocity_m_s * velocity_m_s / (2.0 * gravity_m_s2)
}

/// 마찰손실, 순수 양정, 정두압 수두를 합해 총 동양정을 구한다.
pub fn compute_head(
    input: &NormalizedInputs,
    fluid: &FluidProperties,
    pressure: &PressureProfile,
    equipment: &EquipmentConfig,
) -> Result<HeadBreakdown> {
    let diameter = equipment.tubing_inner_diameter_m;
    let velocity = input.flow_rate_m3_s / equipment.tubing_area_m2();
    let reynolds = reynolds_number(
        fluid.mixture_density_kg_m3,
        velocity,
        diameter,
        fluid.mixture_viscosity_pa_s,
    )?;
    let (f, regime) = friction_factor(reynolds, equipment.relative_roughness())?;
    let friction_loss = darcy_head_loss(
        f,
        input.pump_depth_m,
        diameter,
        velocity,
        equipment.gravity_m_s2,
    );

    let rho_g = hydrostatic_gradient(fluid.mixture_density_kg_m3, equipment.gravity_m_s2)?;
    let vertical_lift = input.pump_depth_m - pressure.intake.fluid_level_m;
    let surface_head = input.wellhead_pressure_pa / rho_g;
    let total = vertical_lift + friction_loss + surface_head;

    debug!(
        reynolds,
        ?regime,
        friction_factor = f,
        friction_loss_m = friction_loss,
        vertical_lift_m = vertical_lift,
        total_dynamic_head_m = total,
        "head computed"
    );
    Ok(HeadBreakdown {
        flow_velocity_m_per_s: velocity,
        reynolds_number: reynolds,
        flow_regime: regime,
        friction_factor: f,
        friction_loss_m: friction_loss,
        vertical_lift_m: vertical_lift,
        surface_pressure_head_m: surface_head,
        total_dynamic_head_m: total,
    })
}
