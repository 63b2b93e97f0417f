use serde::{Deserialize, Serialize};

/// 길이(깊이·수두) 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Foot,
}

const METER_PER_FOOT: f64 = 0.3048;

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = match from {
        LengthUnit::Meter => value,
        LengthUnit::Foot => value * METER_PER_FOOT,
    };
    match to {
        LengthUnit::Meter => m,
        LengthUnit::Foot => m / METER_PER_FOOT,
    }
}
