//! 혼합 유체 물성 모델.
//!
//! 밀도와 점도는 함수율 가중 평균으로 구하는 단순 근사식이다. 원유 점도식
//! `10·SG²` [cP]와 고정 물 점도는 실제 PVT(블랙오일) 상관식이 아니므로, 실무 설계에서는
//! 검증된 상관식으로 대체해야 한다.

use serde::Serialize;
use tracing::debug;

use super::equipment::EquipmentConfig;
use super::inputs::NormalizedInputs;
use crate::units::{convert_viscosity, ViscosityUnit};

/// 물 기준 밀도 [kg/m³] (비중 1.0)
const REFERENCE_WATER_DENSITY_KG_M3: f64 = 1000.0;

/// 혼합 유체 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidProperties {
    pub oil_density_kg_m3: f64,
    pub water_density_kg_m3: f64,
    pub mixture_density_kg_m3: f64,
    pub oil_viscosity_cp: f64,
    pub water_viscosity_cp: f64,
    pub mixture_viscosity_cp: f64,
    pub mixture_viscosity_pa_s: f64,
}

/// 단순 API 기반 원유 점도 근사 [cP]
pub fn oil_viscosity_cp(oil_specific_gravity: f64) -> f64 {
    10.0 * oil_specific_gravity * oil_specific_gravity
}

fn water_cut_weighted(oil: f64, water: f64, water_cut: f64) -> f64 {
    (1.0 - water_cut) * oil + water_cut * water
}

/// 정규화된 입력으로부터 혼합 유체 물성을 계산한다.
pub fn compute_fluid_properties(
    input: &NormalizedInputs,
    equipment: &EquipmentConfig,
) -> FluidProperties {
    let oil_density = input.oil_specific_gravity * REFERENCE_WATER_DENSITY_KG_M3;
    let water_density = input.water_specific_gravity * REFERENCE_WATER_DENSITY_KG_M3;
    let mixture_density = water_cut_weighted(oil_density, water_density, input.water_cut);

    let oil_visc = oil_viscosity_cp(input.oil_specific_gravity);
    let water_visc = equipment.water_viscosity_cp;
    let mixture_visc_cp = water_cut_weighted(oil_visc, water_visc, input.water_cut);
    let mixture_visc_pa_s = convert_viscosity(
        mixture_visc_cp,
        ViscosityUnit::Centipoise,
        ViscosityUnit::PascalSecond,
    );

    debug!(
        mixture_density,
        mixture_visc_cp, "fluid properties computed"
    );
    FluidProperties {
        oil_density_kg_m3: oil_density,
        water_density_kg_m3: water_density,
        mixture_density_kg_m3: mixture_density,
        oil_viscosity_cp: oil_visc,
        water_viscosity_cp: water_visc,
        mixture_viscosity_cp: mixture_visc_cp,
        mixture_viscosity_pa_s: mixture_visc_pa_s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esp::inputs::{normalize, WellInputs};

    fn props_for(water_cut: f64) -> FluidProperties {
        let mut input = WellInputs::reference_case();
        input.water_cut = water_cut;
        let n = normalize(&input).unwrap();
        compute_fluid_properties(&n, &EquipmentConfig::default())
    }

    #[test]
    fn reference_case_mixture_density() {
        let p = props_for(0.4);
        let oil = 141.5 / 166.5 * 1000.0;
        let expected = 0.6 * oil + 0.4 * 1050.0;
        assert!((p.mixture_density_kg_m3 - expected).abs() < 1e-9);
    }

    #[test]
    fn dry_oil_uses_oil_properties_only() {
        let p = props_for(0.0);
        assert_eq!(p.mixture_density_kg_m3, p.oil_density_kg_m3);
        assert_eq!(p.mixture_viscosity_cp, p.oil_viscosity_cp);
    }

    #[test]
    fn pure_water_uses_water_properties_only() {
        let p = props_for(1.0);
        assert_eq!(p.mixture_density_kg_m3, p.water_density_kg_m3);
        assert!((p.mixture_viscosity_pa_s - 0.0005).abs() < 1e-15);
    }

    #[test]
    fn viscosity_converted_from_centipoise() {
        let p = props_for(0.4);
        assert!((p.mixture_viscosity_pa_s * 1000.0 - p.mixture_viscosity_cp).abs() < 1e-12);
    }
}
