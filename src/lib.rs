//! qli2svg library root.
//! QLI(Galil DMC 부분집합) 프로그램을 파싱해 SVG 문서로 변환한다.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::{Context, Result};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::params::SvgOutputParams;
use domain::parser::{ParseOptions, parse_program};
use domain::tracer::trace_program;
use infrastructure::render::render_svg;

/// 라이브러리 직접 호출용 변환 함수. 설정 파일은 읽지 않는다.
pub fn convert_str(source: &str, params: &SvgOutputParams, options: &ParseOptions) -> Result<String> {
    let program = parse_program(source, options).context("failed to parse QLI program")?;
    let pattern = trace_program(&program);
    Ok(render_svg(&pattern, params)?)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = interface::composition::AppComposition::default();
    composition.inspect_config_usecase().execute()
}
