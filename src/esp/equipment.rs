use serde::{Deserialize, Serialize};

use super::error::{ensure_non_negative, ensure_positive, CalcError, Result};

/// 표준 중력가속도 근사값 [m/s²]
pub const DEFAULT_GRAVITY_M_S2: f64 = 9.81;

/// 지상까지 전력을 전달하는 각 구간의 효율. 모두 (0, 1] 범위여야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Efficiencies {
    pub pump: f64,
    pub motor: f64,
    pub cable: f64,
    pub transformer: f64,
    /// 가변속 드라이브(VSD)
    pub vsd: f64,
}

impl Default for Efficiencies {
    fn default() -> Self {
        Self {
            pump: 0.65,
            motor: 0.87,
            cable: 0.97,
            transformer: 0.98,
            vsd: 0.96,
        }
    }
}

impl Efficiencies {
    /// 모터 단자에서 지상 전원까지의 전기 계통 효율 (케이블 × 변압기 × VSD).
    pub fn electrical_chain(&self) -> f64 {
        self.cable * self.transformer * self.vsd
    }

    /// 유체동력에서 지상 소요동력까지의 전체 효율.
    pub fn overall(&self) -> f64 {
        self.pump * self.motor * self.electrical_chain()
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("펌프 효율", self.pump),
            ("모터 효율", self.motor),
            ("케이블 효율", self.cable),
            ("변압기 효율", self.transformer),
            ("VSD 효율", self.vsd),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(CalcError::InvalidInput(format!(
                    "{name}은(는) 0 초과 1 이하여야 합니다 (입력: {value})"
                )));
            }
        }
        Ok(())
    }
}

/// 장비·물성 상수 설정.
///
/// 튜빙 규격, 거칠기, 효율, 단당 양정 등 계산에 쓰이는 고정 상수를 모두 여기서 관리한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentConfig {
    /// 튜빙 내경 [m] (3.5in 튜빙 기준 0.0889)
    pub tubing_inner_diameter_m: f64,
    /// 튜빙 절대 거칠기 [m]
    pub absolute_roughness_m: f64,
    /// 펌프 단(stage)당 양정 [m]
    pub head_per_stage_m: f64,
    /// 중력가속도 [m/s²]
    pub gravity_m_s2: f64,
    /// 물 점도 [cP] (온도 무관 고정값)
    pub water_viscosity_cp: f64,
    pub efficiencies: Efficiencies,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            tubing_inner_diameter_m: 0.0889,
            absolute_roughness_m: 0.0001,
            head_per_stage_m: 10.0,
            gravity_m_s2: DEFAULT_GRAVITY_M_S2,
            water_viscosity_cp: 0.5,
            efficiencies: Efficiencies::default(),
        }
    }
}

impl EquipmentConfig {
    /// 설정값의 유효성을 검사한다. 계산 전에 반드시 호출된다.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("튜빙 내경", self.tubing_inner_diameter_m)?;
        ensure_non_negative("절대 거칠기", self.absolute_roughness_m)?;
        self.efficiencies.validate()?;
        ensure_positive("단당 양정", self.head_per_stage_m)?;
        ensure_positive("중력가속도", self.gravity_m_s2)?;
        ensure_positive("물 점도", self.water_viscosity_cp)?;
        Ok(())
    }

    /// 튜빙 단면적 [m²]
    pub fn tubing_area_m2(&self) -> f64 {
        std::f64::consts::PI * self.tubing_inner_diameter_m * self.tubing_inner_diameter_m / 4.0
    }

    /// 상대 거칠기 ε/D
    pub fn relative_roughness(&self) -> f64 {
        self.absolute_roughness_m / self.tubing_inner_diameter_m
    }
}
