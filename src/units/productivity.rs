use serde::{Deserialize, Serialize};

use super::flow_rate::{convert_flow_rate, FlowRateUnit};
use super::pressure::{to_pascal, PressureUnit};

/// 생산성 지수(PI) 단위. 내부 기준은 m³/s/Pa 이다.
///
/// 유량 단위와 압력 단위의 조합으로 표현되므로 두 변환기를 재사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductivityIndexUnit {
    CubicMeterPerSecondPerPascal,
    CubicMeterPerDayPerBar,
    BarrelPerDayPerPsi,
}

impl ProductivityIndexUnit {
    fn parts(self) -> (FlowRateUnit, PressureUnit) {
        match self {
            ProductivityIndexUnit::CubicMeterPerSecondPerPascal => {
                (FlowRateUnit::CubicMeterPerSecond, PressureUnit::Pascal)
            }
            ProductivityIndexUnit::CubicMeterPerDayPerBar => {
                (FlowRateUnit::CubicMeterPerDay, PressureUnit::Bar)
            }
            ProductivityIndexUnit::BarrelPerDayPerPsi => {
                (FlowRateUnit::BarrelPerDay, PressureUnit::Psi)
            }
        }
    }
}

/// 생산성 지수를 변환한다.
pub fn convert_productivity_index(
    value: f64,
    from: ProductivityIndexUnit,
    to: ProductivityIndexUnit,
) -> f64 {
    let (from_q, from_p) = from.parts();
    let (to_q, to_p) = to.parts();
    // 분자(유량)는 그대로 환산하고, 분모(압력)는 1 단위당 Pa 비율로 보정
    let q = convert_flow_rate(value, from_q, to_q);
    q * to_pascal(1.0, to_p) / to_pascal(1.0, from_p)
}
