use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::esp::{CalcError, EquipmentConfig};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "esp_config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Html,
    Csv,
}

/// 보고서 출력 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// 소수점 자릿수
    pub decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            decimals: 2,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub equipment: EquipmentConfig,
    pub report: ReportConfig,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("잘못된 장비 설정: {0}")]
    Invalid(#[from] CalcError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.equipment.validate()?;
        info!(path = %path.display(), "설정 파일을 불러왔습니다");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "기본 설정 파일을 생성했습니다");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [equipment]
            head_per_stage_m = 8.0

            [equipment.efficiencies]
            pump = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.equipment.head_per_stage_m, 8.0);
        assert_eq!(cfg.equipment.efficiencies.pump, 0.7);
        assert_eq!(cfg.equipment.efficiencies.motor, 0.87);
        assert_eq!(cfg.equipment.tubing_inner_diameter_m, 0.0889);
        assert_eq!(cfg.report, ReportConfig::default());
    }

    #[test]
    fn output_format_is_lowercase_in_toml() {
        let cfg: Config = toml::from_str("[report]\nformat = \"html\"\n").unwrap();
        assert_eq!(cfg.report.format, OutputFormat::Html);
    }
}
