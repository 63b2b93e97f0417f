use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ensure_non_negative, ensure_positive, CalcError, Result};
use crate::units::{
    convert_flow_rate, convert_productivity_index, pressure, temperature, FlowRateUnit,
    PressureUnit, ProductivityIndexUnit, TemperatureUnit,
};

/// 물 비중 기본값
pub const DEFAULT_WATER_SG: f64 = 1.05;
/// 가스 비중 기본값 (공기 = 1)
pub const DEFAULT_GAS_SG: f64 = 0.65;

fn default_water_sg() -> f64 {
    DEFAULT_WATER_SG
}

fn default_gas_sg() -> f64 {
    DEFAULT_GAS_SG
}

/// 유정/유체 입력값. 현장 단위(m, bar, °C, m³/day)로 받는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInputs {
    /// 유정 심도 [m]
    pub well_depth_m: f64,
    /// 펌프 설치 심도 [m]
    pub pump_depth_m: f64,
    /// 저류층 압력 [bar]
    pub reservoir_pressure_bar: f64,
    /// 공저 온도 [°C]
    pub bottomhole_temperature_c: f64,
    /// 정두압 [bar]
    pub wellhead_pressure_bar: f64,
    /// 생산성 지수 [m³/day/bar]
    pub productivity_index_m3_per_day_per_bar: f64,
    /// 목표 생산량 [m³/day]
    pub desired_flow_rate_m3_per_day: f64,
    /// 함수율 (0~1)
    pub water_cut: f64,
    /// 가스유비 [m³/m³]
    pub gas_oil_ratio: f64,
    /// 원유 API 비중
    pub oil_api: f64,
    #[serde(default = "default_water_sg")]
    pub water_specific_gravity: f64,
    #[serde(default = "default_gas_sg")]
    pub gas_specific_gravity: f64,
}

impl WellInputs {
    /// 참조 사례(심도 2500 m, 펌프 2200 m, 180 bar, 150 m³/day, 함수율 0.4, API 35).
    pub fn reference_case() -> Self {
        Self {
            well_depth_m: 2500.0,
            pump_depth_m: 2200.0,
            reservoir_pressure_bar: 180.0,
            bottomhole_temperature_c: 90.0,
            wellhead_pressure_bar: 20.0,
            productivity_index_m3_per_day_per_bar: 5.0,
            desired_flow_rate_m3_per_day: 150.0,
            water_cut: 0.4,
            gas_oil_ratio: 50.0,
            oil_api: 35.0,
            water_specific_gravity: DEFAULT_WATER_SG,
            gas_specific_gravity: DEFAULT_GAS_SG,
        }
    }
}

/// SI 단위로 정규화된 입력값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedInputs {
    pub well_depth_m: f64,
    pub pump_depth_m: f64,
    pub reservoir_pressure_pa: f64,
    pub bottomhole_temperature_k: f64,
    pub wellhead_pressure_pa: f64,
    /// [m³/s/Pa]
    pub productivity_index_si: f64,
    /// [m³/s]
    pub flow_rate_m3_s: f64,
    pub water_cut: f64,
    pub gas_oil_ratio: f64,
    pub oil_api: f64,
    /// 141.5 / (API + 131.5)
    pub oil_specific_gravity: f64,
    pub water_specific_gravity: f64,
    pub gas_specific_gravity: f64,
}

/// API 비중을 원유 비중으로 변환한다.
pub fn api_to_specific_gravity(api: f64) -> Result<f64> {
    if !api.is_finite() || api + 131.5 <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "API 비중은 -131.5보다 커야 합니다 (입력: {api})"
        )));
    }
    Ok(141.5 / (api + 131.5))
}

/// 입력값을 검증하고 SI 단위로 변환한다.
pub fn normalize(input: &WellInputs) -> Result<NormalizedInputs> {
    ensure_non_negative("유정 심도", input.well_depth_m)?;
    ensure_non_negative("펌프 심도", input.pump_depth_m)?;
    if input.pump_depth_m > input.well_depth_m {
        return Err(CalcError::InvalidInput(format!(
            "펌프 심도({} m)가 유정 심도({} m)보다 깊을 수 없습니다",
            input.pump_depth_m, input.well_depth_m
        )));
    }
    ensure_non_negative("저류층 압력", input.reservoir_pressure_bar)?;
    ensure_non_negative("정두압", input.wellhead_pressure_bar)?;
    ensure_positive("생산성 지수", input.productivity_index_m3_per_day_per_bar)?;
    ensure_non_negative("목표 생산량", input.desired_flow_rate_m3_per_day)?;
    if !input.water_cut.is_finite() || !(0.0..=1.0).contains(&input.water_cut) {
        return Err(CalcError::InvalidInput(format!(
            "함수율은 0~1 범위여야 합니다 (입력: {})",
            input.water_cut
        )));
    }
    ensure_non_negative("가스유비", input.gas_oil_ratio)?;
    ensure_positive("물 비중", input.water_specific_gravity)?;
    ensure_positive("가스 비중", input.gas_specific_gravity)?;
    if !input.bottomhole_temperature_c.is_finite() {
        return Err(CalcError::InvalidInput("공저 온도가 유한한 수가 아닙니다".into()));
    }
    let oil_sg = api_to_specific_gravity(input.oil_api)?;

    let normalized = NormalizedInputs {
        well_depth_m: input.well_depth_m,
        pump_depth_m: input.pump_depth_m,
        reservoir_pressure_pa: pressure::to_pascal(input.reservoir_pressure_bar, PressureUnit::Bar),
        bottomhole_temperature_k: temperature::to_kelvin(
            input.bottomhole_temperature_c,
            TemperatureUnit::Celsius,
        ),
        wellhead_pressure_pa: pressure::to_pascal(input.wellhead_pressure_bar, PressureUnit::Bar),
        productivity_index_si: convert_productivity_index(
            input.productivity_index_m3_per_day_per_bar,
            ProductivityIndexUnit::CubicMeterPerDayPerBar,
            ProductivityIndexUnit::CubicMeterPerSecondPerPascal,
        ),
        flow_rate_m3_s: convert_flow_rate(
            input.desired_flow_rate_m3_per_day,
            FlowRateUnit::CubicMeterPerDay,
            FlowRateUnit::CubicMeterPerSecond,
        ),
        water_cut: input.water_cut,
        gas_oil_ratio: input.gas_oil_ratio,
        oil_api: input.oil_api,
        oil_specific_gravity: oil_sg,
        water_specific_gravity: input.water_specific_gravity,
        gas_specific_gravity: input.gas_specific_gravity,
    };
    debug!(
        flow_rate_m3_s = normalized.flow_rate_m3_s,
        productivity_index_si = normalized.productivity_index_si,
        oil_sg,
        "inputs normalized"
    );
    Ok(normalized)
}
