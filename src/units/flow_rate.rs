use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    CubicMeterPerDay,
    BarrelPerDay,
}

pub const SECONDS_PER_DAY: f64 = 86_400.0;
const CUBIC_METER_PER_BARREL: f64 = 0.158_987_3;

fn to_m3_per_s(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value,
        FlowRateUnit::CubicMeterPerHour => value / 3_600.0,
        FlowRateUnit::CubicMeterPerDay => value / SECONDS_PER_DAY,
        FlowRateUnit::BarrelPerDay => value * CUBIC_METER_PER_BARREL / SECONDS_PER_DAY,
    }
}

fn from_m3_per_s(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value,
        FlowRateUnit::CubicMeterPerHour => value * 3_600.0,
        FlowRateUnit::CubicMeterPerDay => value * SECONDS_PER_DAY,
        FlowRateUnit::BarrelPerDay => value * SECONDS_PER_DAY / CUBIC_METER_PER_BARREL,
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    from_m3_per_s(to_m3_per_s(value, from), to)
}
