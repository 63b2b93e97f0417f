use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 Pa(절대/게이지 구분 없이 차압 기준)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
}

pub const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;

/// 주어진 압력을 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1_000.0,
        PressureUnit::MegaPascal => value * 1_000_000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1_000.0,
        PressureUnit::MegaPascal => value_pa / 1_000_000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pascal(to_pascal(value, from), to)
}
