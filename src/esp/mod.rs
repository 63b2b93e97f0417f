//! ESP(전기 수중 펌프) 사이징 계산 모듈.
//! 입력 정규화 → 유체 물성 → 압력 → 양정 → 동력 → 단수 순으로 계산한다.

pub mod equipment;
pub mod error;
pub mod fluid;
pub mod head;
pub mod inputs;
pub mod power;
pub mod pressure;
pub mod result;
pub mod stages;

pub use equipment::{Efficiencies, EquipmentConfig};
pub use error::CalcError;
pub use fluid::FluidProperties;
pub use head::{FlowRegime, HeadBreakdown};
pub use inputs::{NormalizedInputs, WellInputs};
pub use power::PowerBreakdown;
pub use pressure::{DischargePressure, IntakeCondition, PressureProfile};
pub use result::{CalculationResult, CalculationResultBuilder, ResultEntry, ResultSection};
pub use stages::StageEstimate;

use tracing::{debug, warn};

use crate::units::{pressure as pressure_units, PressureUnit};

/// 이 값보다 낮은 흡입압에서는 가스 간섭 가능성을 경고한다 [bar]
const LOW_INTAKE_PRESSURE_BAR: f64 = 10.0;

/// 입력값과 장비 설정으로 ESP 사이징 전 과정을 계산한다.
///
/// 장비 설정을 먼저 검증하고, 이후 각 단계의 전제 조건을 위반하면 그 자리에서 중단한다.
pub fn calculate(
    input: &WellInputs,
    equipment: &EquipmentConfig,
) -> Result<CalculationResult, CalcError> {
    equipment.validate()?;

    let normalized = inputs::normalize(input)?;
    let fluid = fluid::compute_fluid_properties(&normalized, equipment);
    let profile = pressure::compute_pressure_profile(&normalized, &fluid, equipment)?;
    let head = head::compute_head(&normalized, &fluid, &profile, equipment)?;
    let discharge =
        pressure::compute_discharge_pressure(&profile, &fluid, head.total_dynamic_head_m, equipment)?;
    let power = power::compute_power(&normalized, &fluid, head.total_dynamic_head_m, equipment);
    let stages = stages::estimate_stages(head.total_dynamic_head_m, equipment.head_per_stage_m)?;

    let warnings = collect_warnings(&profile, &head);
    for w in &warnings {
        warn!("{w}");
    }

    let mut builder = CalculationResultBuilder::new()
        .inputs(input.clone(), normalized)?
        .fluid_properties(fluid)?
        .pressures(profile)?
        .head(head)?
        .discharge(discharge)?
        .power(power)?
        .stages(equipment.head_per_stage_m, stages)?;
    for w in warnings {
        builder = builder.warning(w);
    }
    let result = builder.build()?;
    debug!(
        total_dynamic_head_m = result.head.total_dynamic_head_m,
        estimated_stages = result.stages.estimated_stages,
        "calculation finished"
    );
    Ok(result)
}

fn collect_warnings(profile: &PressureProfile, head: &HeadBreakdown) -> Vec<String> {
    let mut warnings = Vec::new();
    if !profile.intake.column_reaches_pump {
        warnings.push(format!(
            "액주 높이 {:.1} m가 펌프 심도에 미치지 못합니다. 펌프 흡입부가 유체에 잠기지 않을 수 있습니다.",
            profile.static_fluid_head_m
        ));
    }
    if head.flow_regime == FlowRegime::Laminar {
        warnings.push(format!(
            "튜빙 내 유동이 층류입니다 (Re={:.0}).",
            head.reynolds_number
        ));
    }
    let pip_bar =
        pressure_units::from_pascal(profile.intake.pump_intake_pressure_pa, PressureUnit::Bar);
    if pip_bar < LOW_INTAKE_PRESSURE_BAR {
        warnings.push(format!(
            "펌프 흡입압 {pip_bar:.2} bar (<{LOW_INTAKE_PRESSURE_BAR} bar). 가스 간섭 위험."
        ));
    }
    warnings
}
