//! 단일 입력 변수를 바꿔가며 계산을 반복하는 민감도 분석.
//!
//! 각 점은 독립된 계산이며 결과 누적기를 공유하지 않는다. 점들은 rayon 스레드 풀에서 병렬 계산한다.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::esp::{self, CalcError, CalculationResult, EquipmentConfig, WellInputs};

/// 민감도 분석 대상 입력 변수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParameter {
    /// 목표 생산량 [m³/day]
    FlowRate,
    /// 함수율 [-]
    WaterCut,
    /// 정두압 [bar]
    WellheadPressure,
    /// 생산성 지수 [m³/day/bar]
    ProductivityIndex,
    /// 저류층 압력 [bar]
    ReservoirPressure,
    /// 펌프 심도 [m]
    PumpDepth,
    /// API 비중
    OilApi,
}

impl SweepParameter {
    /// 입력 맵의 키 이름.
    pub fn key(self) -> &'static str {
        match self {
            SweepParameter::FlowRate => "desired_flow_rate_m3_per_day",
            SweepParameter::WaterCut => "water_cut",
            SweepParameter::WellheadPressure => "wellhead_pressure_bar",
            SweepParameter::ProductivityIndex => "productivity_index_m3_per_day_per_bar",
            SweepParameter::ReservoirPressure => "reservoir_pressure_bar",
            SweepParameter::PumpDepth => "pump_depth_m",
            SweepParameter::OilApi => "oil_api",
        }
    }

    /// 기준 입력의 해당 변수만 바꾼 복사본을 만든다.
    pub fn apply(self, base: &WellInputs, value: f64) -> WellInputs {
        let mut input = base.clone();
        match self {
            SweepParameter::FlowRate => input.desired_flow_rate_m3_per_day = value,
            SweepParameter::WaterCut => input.water_cut = value,
            SweepParameter::WellheadPressure => input.wellhead_pressure_bar = value,
            SweepParameter::ProductivityIndex => {
                input.productivity_index_m3_per_day_per_bar = value
            }
            SweepParameter::ReservoirPressure => input.reservoir_pressure_bar = value,
            SweepParameter::PumpDepth => input.pump_depth_m = value,
            SweepParameter::OilApi => input.oil_api = value,
        }
        input
    }
}

/// 민감도 분석의 한 점.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: Result<CalculationResult, CalcError>,
}

/// `from`~`to` 구간을 `steps`개의 등간격 값으로 나눈다.
pub fn linspace(from: f64, to: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => {
            let step = (to - from) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { to } else { from + step * i as f64 })
                .collect()
        }
    }
}

/// 각 값에 대해 독립적으로 계산하고 입력 순서대로 결과를 돌려준다.
///
/// 한 점의 실패는 다른 점의 계산에 영향을 주지 않는다.
pub fn run_sweep(
    base: &WellInputs,
    parameter: SweepParameter,
    values: &[f64],
    equipment: &EquipmentConfig,
) -> Vec<SweepPoint> {
    info!(parameter = parameter.key(), points = values.len(), "민감도 분석 시작");
    values
        .par_iter()
        .map(|&value| {
            let input = parameter.apply(base, value);
            let outcome = esp::calculate(&input, equipment);
            if let Err(e) = &outcome {
                debug!(value, error = %e, "sweep point failed");
            }
            SweepPoint { value, outcome }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(50.0, 300.0, 6);
        assert_eq!(v, vec![50.0, 100.0, 150.0, 200.0, 250.0, 300.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn apply_changes_only_the_selected_field() {
        let base = WellInputs::reference_case();
        let changed = SweepParameter::WaterCut.apply(&base, 0.9);
        assert_eq!(changed.water_cut, 0.9);
        assert_eq!(changed.desired_flow_rate_m3_per_day, base.desired_flow_rate_m3_per_day);
        assert_eq!(base.water_cut, 0.4);
    }
}
