use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    Centipoise,
}

const CP_PER_PAS: f64 = 1_000.0;

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let pas = match from {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::Centipoise => value / CP_PER_PAS,
    };
    match to {
        ViscosityUnit::PascalSecond => pas,
        ViscosityUnit::Centipoise => pas * CP_PER_PAS,
    }
}
