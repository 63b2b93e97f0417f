use thiserror::Error;

/// ESP 사이징 계산 중 발생 가능한 오류.
///
/// 모든 오류는 해당 연산 직전에 검출하며, 첫 번째 오류에서 전체 계산을 중단한다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// 입력값 또는 장비 설정이 허용 범위를 벗어난 경우
    #[error("입력 오류: {0}")]
    InvalidInput(String),

    /// 0으로 나누기 등 수치적으로 정의되지 않는 상태
    #[error("수치 오류: {0}")]
    NumericDegenerate(String),

    /// 결과 조립 순서가 어긋난 경우 (섹션 누락/중복)
    #[error("계산 파이프라인 오류: {0}")]
    Pipeline(&'static str),
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// 값이 유한하고 0 이상인지 확인한다.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "{name} 값은 0 이상의 유한한 수여야 합니다 (입력: {value})"
        )));
    }
    Ok(())
}

/// 값이 유한하고 0보다 큰지 확인한다.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "{name} 값은 0보다 커야 합니다 (입력: {value})"
        )));
    }
    Ok(())
}
