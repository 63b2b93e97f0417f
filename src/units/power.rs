use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    /// 기계 마력(mechanical horsepower)
    Horsepower,
}

pub const WATT_PER_HP: f64 = 745.699_872;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1_000.0,
        PowerUnit::Horsepower => value * WATT_PER_HP,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1_000.0,
        PowerUnit::Horsepower => value_w / WATT_PER_HP,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_watt(to_watt(value, from), to)
}
