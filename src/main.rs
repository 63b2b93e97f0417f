use clap::Parser;
use esp_design_toolbox::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 로깅을 초기화하고 CLI 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = app::run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
