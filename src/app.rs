use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{self, Config, ConfigError, OutputFormat};
use crate::esp::{self, CalcError, WellInputs};
use crate::report;
use crate::sweep::{self, SweepParameter};

/// 민감도 분석 표에 기본으로 싣는 결과 키.
pub const SWEEP_REPORT_KEYS: &[&str] = &[
    "pressures.flowing_bottomhole_pressure_bar",
    "pressures.pump_intake_pressure_bar",
    "head.total_dynamic_head_m",
    "power.surface_power_required_hp",
    "stages.estimated_stages",
];

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("유정 입력 파일 파싱 오류: {0}")]
    WellFile(#[from] toml::de::Error),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("민감도 분석 단계 수는 1 이상이어야 합니다")]
    EmptySweep,
}

/// ESP(전기 수중 펌프) 사이징 계산기.
#[derive(Debug, Parser)]
#[command(name = "esp_design_toolbox_cli", version)]
pub struct Cli {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 한 유정 입력에 대해 전체 사이징을 계산한다.
    Calc {
        /// 유정 입력 TOML 파일. 생략하면 참조 사례를 사용한다.
        #[arg(long)]
        well: Option<PathBuf>,
        /// 출력 형식. 생략하면 설정 파일 값을 따른다.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// 입력 변수 하나를 바꿔가며 민감도 분석을 수행한다.
    Sweep {
        #[arg(long, value_enum)]
        param: SweepParameter,
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        #[arg(long, default_value_t = 6)]
        steps: usize,
        #[arg(long)]
        well: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// 기본 설정 파일을 작성한다 (기존 파일 덮어씀).
    InitConfig,
}

/// 유정 입력 파일을 읽는다. 경로가 없으면 참조 사례를 돌려준다.
pub fn load_well_inputs(path: Option<&Path>) -> Result<WellInputs, AppError> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)?;
            let input: WellInputs = toml::from_str(&content)?;
            info!(path = %p.display(), "유정 입력 파일을 불러왔습니다");
            Ok(input)
        }
        None => {
            info!("유정 입력 파일이 지정되지 않아 참조 사례를 사용합니다");
            Ok(WellInputs::reference_case())
        }
    }
}

/// 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn execute(command: &Command, config_path: &Path) -> Result<String, AppError> {
    match command {
        Command::InitConfig => {
            Config::default().save(config_path)?;
            Ok(format!("기본 설정을 저장했습니다: {}\n", config_path.display()))
        }
        Command::Calc { well, format } => {
            let cfg = config::load_or_default(config_path)?;
            let input = load_well_inputs(well.as_deref())?;
            let result = esp::calculate(&input, &cfg.equipment)?;
            info!(
                stages = result.stages.estimated_stages,
                surface_power_w = result.power.surface_power_required_w,
                "사이징 계산 완료"
            );
            Ok(report::render_result(
                &result,
                format.unwrap_or(cfg.report.format),
                cfg.report.decimals,
            )?)
        }
        Command::Sweep {
            param,
            from,
            to,
            steps,
            well,
            format,
        } => {
            if *steps == 0 {
                return Err(AppError::EmptySweep);
            }
            let cfg = config::load_or_default(config_path)?;
            let base = load_well_inputs(well.as_deref())?;
            let values = sweep::linspace(*from, *to, *steps);
            let points = sweep::run_sweep(&base, *param, &values, &cfg.equipment);
            let failed = points.iter().filter(|p| p.outcome.is_err()).count();
            if failed > 0 {
                warn!(failed, "일부 민감도 분석 점의 계산에 실패했습니다");
            }
            Ok(report::render_sweep(
                param.key(),
                &points,
                SWEEP_REPORT_KEYS,
                format.unwrap_or(cfg.report.format),
                cfg.report.decimals,
            )?)
        }
    }
}

/// CLI 인자를 받아 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let output = execute(&cli.command, &cli.config)?;
    print!("{output}");
    Ok(())
}
