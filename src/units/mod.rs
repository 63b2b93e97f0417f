//! 단위 정의 및 변환 모듈 모음. 계산 내부는 항상 SI 기준 단위를 사용한다.

pub mod flow_rate;
pub mod length;
pub mod power;
pub mod pressure;
pub mod productivity;
pub mod temperature;
pub mod viscosity;

pub use flow_rate::{convert_flow_rate, FlowRateUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use productivity::{convert_productivity_index, ProductivityIndexUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
