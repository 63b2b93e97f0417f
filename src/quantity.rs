use serde::Serialize;

/// 결과 항목이 나타내는 물리량 종류와 표시 단위를 나타낸다.
///
/// 같은 물리량이라도 SI 값과 표시용 값을 함께 싣기 때문에 단위까지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuantityKind {
    LengthM,
    LengthFt,
    PressurePa,
    PressureBar,
    TemperatureC,
    TemperatureK,
    FlowRateM3PerDay,
    FlowRateM3PerS,
    ProductivityM3PerDayPerBar,
    ProductivitySi,
    DensityKgM3,
    ViscosityCp,
    ViscosityPaS,
    VelocityMPerS,
    PowerW,
    PowerKw,
    PowerHp,
    GasOilRatio,
    Fraction,
    Dimensionless,
    Count,
}

impl QuantityKind {
    /// 보고서에 붙일 단위 문자열.
    pub fn unit_label(self) -> &'static str {
        match self {
            QuantityKind::LengthM => "m",
            QuantityKind::LengthFt => "ft",
            QuantityKind::PressurePa => "Pa",
            QuantityKind::PressureBar => "bar",
            QuantityKind::TemperatureC => "°C",
            QuantityKind::TemperatureK => "K",
            QuantityKind::FlowRateM3PerDay => "m³/day",
            QuantityKind::FlowRateM3PerS => "m³/s",
            QuantityKind::ProductivityM3PerDayPerBar => "m³/day/bar",
            QuantityKind::ProductivitySi => "m³/s/Pa",
            QuantityKind::DensityKgM3 => "kg/m³",
            QuantityKind::ViscosityCp => "cP",
            QuantityKind::ViscosityPaS => "Pa·s",
            QuantityKind::VelocityMPerS => "m/s",
            QuantityKind::PowerW => "W",
            QuantityKind::PowerKw => "kW",
            QuantityKind::PowerHp => "HP",
            QuantityKind::GasOilRatio => "m³/m³",
            QuantityKind::Fraction => "-",
            QuantityKind::Dimensionless => "",
            QuantityKind::Count => "ea",
        }
    }

    /// 키 이름의 접미사로부터 물리량 종류를 추정한다. 알 수 없으면 `None`.
    ///
    /// 보고서가 외부에서 받은 평면 맵만으로 단위를 붙일 때 사용한다.
    pub fn from_key_suffix(key: &str) -> Option<QuantityKind> {
        const SUFFIXES: &[(&str, QuantityKind)] = &[
            ("_m3_per_day_per_bar", QuantityKind::ProductivityM3PerDayPerBar),
            ("_m3_per_s_per_pa", QuantityKind::ProductivitySi),
            ("_m3_per_day", QuantityKind::FlowRateM3PerDay),
            ("_m3_per_s", QuantityKind::FlowRateM3PerS),
            ("_kg_m3", QuantityKind::DensityKgM3),
            ("_pa_s", QuantityKind::ViscosityPaS),
            ("_cp", QuantityKind::ViscosityCp),
            ("_m_per_s", QuantityKind::VelocityMPerS),
            ("_pa", QuantityKind::PressurePa),
            ("_bar", QuantityKind::PressureBar),
            ("_ft", QuantityKind::LengthFt),
            ("_m", QuantityKind::LengthM),
            ("_c", QuantityKind::TemperatureC),
            ("_k", QuantityKind::TemperatureK),
            ("_kw", QuantityKind::PowerKw),
            ("_hp", QuantityKind::PowerHp),
            ("_w", QuantityKind::PowerW),
        ];
        SUFFIXES
            .iter()
            .find(|(suffix, _)| key.ends_with(suffix))
            .map(|(_, kind)| *kind)
    }
}
