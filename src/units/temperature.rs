use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

const KELVIN_OFFSET: f64 = 273.15;

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value_k - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}
