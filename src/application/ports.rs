//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::infrastructure::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// QLI 프로그램 텍스트를 읽어 오는 포트.
pub trait ProgramSource: Send + Sync {
    fn read(&self, input: &str) -> Result<String>;
}

/// 완성된 SVG 문서를 내보내는 포트. 경로가 없으면 표준 출력을 쓴다.
pub trait SvgSink: Send + Sync {
    fn write(&self, output: Option<&Path>, document: &str) -> Result<()>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
}
