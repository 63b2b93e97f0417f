//! 계산 결과 조립.
//!
//! 각 단계는 자신의 섹션을 정확히 한 번만 빌더에 넘기며, `build` 이후의 결과는 변경할 수 없다.

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::{CalcError, Result};
use super::fluid::FluidProperties;
use super::head::{FlowRegime, HeadBreakdown};
use super::inputs::{NormalizedInputs, WellInputs};
use super::power::PowerBreakdown;
use super::pressure::{DischargePressure, PressureProfile};
use super::stages::StageEstimate;
use crate::quantity::QuantityKind;
use crate::units::{
    convert_length, convert_power, pressure, LengthUnit, PowerUnit, PressureUnit,
};

/// 결과 맵의 한 항목.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultEntry {
    pub key: &'static str,
    pub value: f64,
    pub kind: QuantityKind,
}

/// 이름 붙은 결과 섹션. 항목 순서는 항상 동일하다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSection {
    pub name: &'static str,
    pub entries: Vec<ResultEntry>,
}

/// 한 번의 계산 결과. 입력값과 모든 중간/최종 물리량을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub input_data: WellInputs,
    pub normalized_inputs: NormalizedInputs,
    pub fluid_properties: FluidProperties,
    pub pressures: PressureProfile,
    pub head: HeadBreakdown,
    pub discharge: DischargePressure,
    pub power: PowerBreakdown,
    pub head_per_stage_m: f64,
    pub stages: StageEstimate,
    pub warnings: Vec<String>,
}

/// 단계별 결과를 받아 `CalculationResult`를 만든다.
#[derive(Debug, Default)]
pub struct CalculationResultBuilder {
    input_data: Option<WellInputs>,
    normalized_inputs: Option<NormalizedInputs>,
    fluid_properties: Option<FluidProperties>,
    pressures: Option<PressureProfile>,
    head: Option<HeadBreakdown>,
    discharge: Option<DischargePressure>,
    power: Option<PowerBreakdown>,
    stages: Option<(f64, StageEstimate)>,
    warnings: Vec<String>,
}

fn set_once<T>(slot: &mut Option<T>, value: T, section: &'static str) -> Result<()> {
    if slot.is_some() {
        return Err(CalcError::Pipeline(section));
    }
    *slot = Some(value);
    Ok(())
}

fn take<T>(slot: Option<T>, section: &'static str) -> Result<T> {
    slot.ok_or(CalcError::Pipeline(section))
}

impl CalculationResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(mut self, raw: WellInputs, normalized: NormalizedInputs) -> Result<Self> {
        set_once(&mut self.input_data, raw, "input_data 섹션이 이미 설정됨")?;
        set_once(
            &mut self.normalized_inputs,
            normalized,
            "normalized_inputs 섹션이 이미 설정됨",
        )?;
        Ok(self)
    }

    pub fn fluid_properties(mut self, fluid: FluidProperties) -> Result<Self> {
        set_once(
            &mut self.fluid_properties,
            fluid,
            "fluid_properties 섹션이 이미 설정됨",
        )?;
        Ok(self)
    }

    pub fn pressures(mut self, profile: PressureProfile) -> Result<Self> {
        set_once(&mut self.pressures, profile, "pressures 섹션이 이미 설정됨")?;
        Ok(self)
    }

    pub fn head(mut self, head: HeadBreakdown) -> Result<Self> {
        set_once(&mut self.head, head, "head 섹션이 이미 설정됨")?;
        Ok(self)
    }

    pub fn discharge(mut self, discharge: DischargePressure) -> Result<Self> {
        set_once(&mut self.discharge, discharge, "discharge 섹션이 이미 설정됨")?;
        Ok(self)
    }

    pub fn power(mut self, power: PowerBreakdown) -> Result<Self> {
        set_once(&mut self.power, power, "power 섹션이 이미 설정됨")?;
        Ok(self)
    }

    pub fn stages(mut self, head_per_stage_m: f64, stages: StageEstimate) -> Result<Self> {
        set_once(
            &mut self.stages,
            (head_per_stage_m, stages),
            "stages 섹션이 이미 설정됨",
        )?;
        Ok(self)
    }

    pub fn warning(mut self, message: impl Into<String>) -> Self {
        self.warnings.push(message.into());
        self
    }

    /// 모든 섹션이 채워졌는지 확인하고 결과를 확정한다.
    pub fn build(self) -> Result<CalculationResult> {
        let (head_per_stage_m, stages) = take(self.stages, "stages 섹션 누락")?;
        Ok(CalculationResult {
            input_data: take(self.input_data, "input_data 섹션 누락")?,
            normalized_inputs: take(self.normalized_inputs, "normalized_inputs 섹션 누락")?,
            fluid_properties: take(self.fluid_properties, "fluid_properties 섹션 누락")?,
            pressures: take(self.pressures, "pressures 섹션 누락")?,
            head: take(self.head, "head 섹션 누락")?,
            discharge: take(self.discharge, "discharge 섹션 누락")?,
            power: take(self.power, "power 섹션 누락")?,
            head_per_stage_m,
            stages,
            warnings: self.warnings,
        })
    }
}

fn entry(key: &'static str, value: f64, kind: QuantityKind) -> ResultEntry {
    ResultEntry { key, value, kind }
}

fn bar(pa: f64) -> f64 {
    pressure::from_pascal(pa, PressureUnit::Bar)
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn power_entries(
    entries: &mut Vec<ResultEntry>,
    keys: [&'static str; 3],
    watts: f64,
) {
    entries.push(entry(keys[0], watts, QuantityKind::PowerW));
    entries.push(entry(
        keys[1],
        convert_power(watts, PowerUnit::Watt, PowerUnit::Kilowatt),
        QuantityKind::PowerKw,
    ));
    entries.push(entry(
        keys[2],
        convert_power(watts, PowerUnit::Watt, PowerUnit::Horsepower),
        QuantityKind::PowerHp,
    ));
}

impl CalculationResult {
    /// 보고서/차트용 섹션 목록. 성공한 계산이라면 키 구성이 항상 같다.
    pub fn sections(&self) -> Vec<ResultSection> {
        use QuantityKind as K;

        let i = &self.input_data;
        let input_data = vec![
            entry("well_depth_m", i.well_depth_m, K::LengthM),
            entry("pump_depth_m", i.pump_depth_m, K::LengthM),
            entry("reservoir_pressure_bar", i.reservoir_pressure_bar, K::PressureBar),
            entry("bottomhole_temperature_c", i.bottomhole_temperature_c, K::TemperatureC),
            entry("wellhead_pressure_bar", i.wellhead_pressure_bar, K::PressureBar),
            entry(
                "productivity_index_m3_per_day_per_bar",
                i.productivity_index_m3_per_day_per_bar,
                K::ProductivityM3PerDayPerBar,
            ),
            entry(
                "desired_flow_rate_m3_per_day",
                i.desired_flow_rate_m3_per_day,
                K::FlowRateM3PerDay,
            ),
            entry("water_cut", i.water_cut, K::Fraction),
            entry("gas_oil_ratio", i.gas_oil_ratio, K::GasOilRatio),
            entry("oil_api", i.oil_api, K::Dimensionless),
            entry("water_specific_gravity", i.water_specific_gravity, K::Dimensionless),
            entry("gas_specific_gravity", i.gas_specific_gravity, K::Dimensionless),
        ];

        let n = &self.normalized_inputs;
        let normalized = vec![
            entry("reservoir_pressure_pa", n.reservoir_pressure_pa, K::PressurePa),
            entry("wellhead_pressure_pa", n.wellhead_pressure_pa, K::PressurePa),
            entry("bottomhole_temperature_k", n.bottomhole_temperature_k, K::TemperatureK),
            entry(
                "productivity_index_m3_per_s_per_pa",
                n.productivity_index_si,
                K::ProductivitySi,
            ),
            entry("desired_flow_rate_m3_per_s", n.flow_rate_m3_s, K::FlowRateM3PerS),
            entry("oil_specific_gravity", n.oil_specific_gravity, K::Dimensionless),
        ];

        let f = &self.fluid_properties;
        let fluid = vec![
            entry("oil_density_kg_m3", f.oil_density_kg_m3, K::DensityKgM3),
            entry("water_density_kg_m3", f.water_density_kg_m3, K::DensityKgM3),
            entry("mixture_density_kg_m3", f.mixture_density_kg_m3, K::DensityKgM3),
            entry("oil_viscosity_cp", f.oil_viscosity_cp, K::ViscosityCp),
            entry("water_viscosity_cp", f.water_viscosity_cp, K::ViscosityCp),
            entry("mixture_viscosity_cp", f.mixture_viscosity_cp, K::ViscosityCp),
            entry("mixture_viscosity_pa_s", f.mixture_viscosity_pa_s, K::ViscosityPaS),
        ];

        let p = &self.pressures;
        let d = &self.discharge;
        let pressures = vec![
            entry(
                "flowing_bottomhole_pressure_pa",
                p.flowing_bottomhole_pressure_pa,
                K::PressurePa,
            ),
            entry(
                "flowing_bottomhole_pressure_bar",
                bar(p.flowing_bottomhole_pressure_pa),
                K::PressureBar,
            ),
            entry("static_fluid_head_m", p.static_fluid_head_m, K::LengthM),
            entry("fluid_level_m", p.intake.fluid_level_m, K::LengthM),
            entry("column_reaches_pump", flag(p.intake.column_reaches_pump), K::Dimensionless),
            entry("excess_pressure_pa", p.intake.excess_pressure_pa, K::PressurePa),
            entry("excess_pressure_bar", bar(p.intake.excess_pressure_pa), K::PressureBar),
            entry("pump_intake_pressure_pa", p.intake.pump_intake_pressure_pa, K::PressurePa),
            entry(
                "pump_intake_pressure_bar",
                bar(p.intake.pump_intake_pressure_pa),
                K::PressureBar,
            ),
            entry("discharge_pressure_pa", d.discharge_pressure_pa, K::PressurePa),
            entry("discharge_pressure_bar", bar(d.discharge_pressure_pa), K::PressureBar),
            entry(
                "pump_differential_pressure_pa",
                d.pump_differential_pressure_pa,
                K::PressurePa,
            ),
            entry(
                "pump_differential_pressure_bar",
                bar(d.pump_differential_pressure_pa),
                K::PressureBar,
            ),
        ];

        let h = &self.head;
        let head = vec![
            entry("flow_velocity_m_per_s", h.flow_velocity_m_per_s, K::VelocityMPerS),
            entry("reynolds_number", h.reynolds_number, K::Dimensionless),
            entry(
                "laminar_flow",
                flag(h.flow_regime == FlowRegime::Laminar),
                K::Dimensionless,
            ),
            entry("friction_factor", h.friction_factor, K::Dimensionless),
            entry("friction_loss_m", h.friction_loss_m, K::LengthM),
            entry("vertical_lift_m", h.vertical_lift_m, K::LengthM),
            entry("surface_pressure_head_m", h.surface_pressure_head_m, K::LengthM),
            entry("total_dynamic_head_m", h.total_dynamic_head_m, K::LengthM),
            entry(
                "total_dynamic_head_ft",
                convert_length(h.total_dynamic_head_m, LengthUnit::Meter, LengthUnit::Foot),
                K::LengthFt,
            ),
        ];

        let w = &self.power;
        let mut power = Vec::with_capacity(12);
        power_entries(
            &mut power,
            ["hydraulic_power_w", "hydraulic_power_kw", "hydraulic_power_hp"],
            w.hydraulic_power_w,
        );
        power_entries(
            &mut power,
            ["shaft_power_w", "shaft_power_kw", "shaft_power_hp"],
            w.shaft_power_w,
        );
        power_entries(
            &mut power,
            ["motor_power_w", "motor_power_kw", "motor_power_hp"],
            w.motor_power_w,
        );
        power_entries(
            &mut power,
            [
                "surface_power_required_w",
                "surface_power_required_kw",
                "surface_power_required_hp",
            ],
            w.surface_power_required_w,
        );

        let stages = vec![
            entry("head_per_stage_m", self.head_per_stage_m, K::LengthM),
            entry(
                "estimated_stages",
                f64::from(self.stages.estimated_stages),
                K::Count,
            ),
        ];

        vec![
            ResultSection { name: "input_data", entries: input_data },
            ResultSection { name: "normalized_inputs", entries: normalized },
            ResultSection { name: "fluid_properties", entries: fluid },
            ResultSection { name: "pressures", entries: pressures },
            ResultSection { name: "head", entries: head },
            ResultSection { name: "power", entries: power },
            ResultSection { name: "stages", entries: stages },
        ]
    }

    /// `섹션.키` 형식의 평면 맵으로 변환한다.
    pub fn to_flat_map(&self) -> BTreeMap<String, f64> {
        self.sections()
            .into_iter()
            .flat_map(|section| {
                let name = section.name;
                section
                    .entries
                    .into_iter()
                    .map(move |e| (format!("{name}.{}", e.key), e.value))
            })
            .collect()
    }

    /// 평면 맵 키(`섹션.키`)로 값을 찾는다.
    pub fn get(&self, dotted_key: &str) -> Option<f64> {
        let (section, key) = dotted_key.split_once('.')?;
        self.sections()
            .into_iter()
            .find(|s| s.name == section)?
            .entries
            .into_iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
    }
}
