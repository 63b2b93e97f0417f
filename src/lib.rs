//! ESP(전기 수중 펌프) 사이징 계산 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 재사용한다.

pub mod app;
pub mod config;
pub mod esp;
pub mod quantity;
pub mod report;
pub mod sweep;
pub mod units;
