use serde::Serialize;

use super::error::{CalcError, Result};

/// 펌프 단수 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageEstimate {
    pub estimated_stages: u32,
}

/// 총 동양정을 단당 양정으로 나눠 올림한 단수를 구한다.
pub fn estimate_stages(total_dynamic_head_m: f64, head_per_stage_m: f64) -> Result<StageEstimate> {
    if !(head_per_stage_m > 0.0) || !head_per_stage_m.is_finite() {
        return Err(CalcError::InvalidInput(format!(
            "단당 양정은 0보다 커야 합니다 (입력: {head_per_stage_m})"
        )));
    }
    if !total_dynamic_head_m.is_finite() {
        return Err(CalcError::NumericDegenerate(format!(
            "총 동양정이 유한하지 않습니다 ({total_dynamic_head_m})"
        )));
    }
    let stages = (total_dynamic_head_m / head_per_stage_m).ceil().max(0.0);
    if stages > f64::from(u32::MAX) {
        return Err(CalcError::NumericDegenerate(format!(
            "추정 단수가 너무 큽니다 ({stages})"
        )));
    }
    Ok(StageEstimate {
        estimated_stages: stages as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_partial_stage() {
        assert_eq!(estimate_stages(781.2, 10.0).unwrap().estimated_stages, 79);
        assert_eq!(estimate_stages(780.0, 10.0).unwrap().estimated_stages, 78);
    }

    #[test]
    fn custom_head_per_stage() {
        assert_eq!(estimate_stages(100.0, 7.5).unwrap().estimated_stages, 14);
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let first = estimate_stages(654.321, 9.3).unwrap();
        for _ in 0..10 {
            assert_eq!(estimate_stages(654.321, 9.3).unwrap(), first);
        }
    }

    #[test]
    fn non_positive_head_per_stage_rejected() {
        assert!(matches!(
            estimate_stages(100.0, 0.0),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate_stages(100.0, -1.0),
            Err(CalcError::InvalidInput(_))
        ));
    }
}
