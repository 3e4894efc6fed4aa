//! QLI 프로그램을 SVG 문서로 변환하는 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{ConfigRepository, ProgramSource, Reporter, SvgSink};
use crate::domain::geometry::Extents;
use crate::domain::params::SvgOutputParams;
use crate::domain::parser::parse_program;
use crate::domain::request::ConvertOptions;
use crate::domain::tracer::trace_program;
use crate::infrastructure::render::render_svg;

/// 변환 결과 요약.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub commands: usize,
    pub paths: usize,
    pub extents: Extents,
}

/// 설정 로딩, 파싱, 추적, 렌더링, 출력까지 변환 흐름을 조율한다.
pub struct ConvertUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub program_source: &'a dyn ProgramSource,
    pub sink: &'a dyn SvgSink,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ConvertUseCase<'a> {
    pub fn execute(&self, options: ConvertOptions) -> Result<ConvertSummary> {
        let config = self.config_repo.load()?;
        let parse_options = config.parse_options(options.needle_bit);
        let params = resolve_params(config.output_params()?, options.params.as_deref())?;

        let source = self.program_source.read(&options.input)?;
        let program = parse_program(&source, &parse_options)
            .with_context(|| format!("failed to parse QLI program {}", options.input))?;
        let pattern = trace_program(&program);
        let document = render_svg(&pattern, &params)
            .with_context(|| format!("failed to render {}", options.input))?;

        self.sink.write(options.output.as_deref(), &document)?;

        let summary = ConvertSummary {
            commands: program.len(),
            paths: pattern.paths.len(),
            extents: pattern.extents,
        };
        info!(
            input = %options.input,
            commands = summary.commands,
            paths = summary.paths,
            "converted qli program"
        );

        let destination = options
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        self.reporter.kv("Input", &options.input);
        self.reporter.kv("Output", &destination);
        self.reporter.status(
            "convert",
            &format!(
                "{} commands, {} paths, extents ({}, {}) .. ({}, {})",
                summary.commands,
                summary.paths,
                summary.extents.min.x,
                summary.extents.min.y,
                summary.extents.max.x,
                summary.extents.max.y,
            ),
        );

        Ok(summary)
    }
}

/// 설정값 위에 명령줄 파라미터 문자열을 덮어쓴다.
pub(crate) fn resolve_params(
    base: SvgOutputParams,
    overrides: Option<&str>,
) -> Result<SvgOutputParams> {
    match overrides {
        Some(text) => base
            .with_overrides(text)
            .with_context(|| format!("invalid --params `{text}`")),
        None => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::usecases::fakes::{
        FakeConfigRepository, MemorySink, MemorySource, SilentReporter,
    };

    const SQUARE: &str = "VMXY\nVP 100,0\nVP 100,50\nCB1\nVP 0,50\nSB1\nVP 0,0\nVE\nEN\n";

    fn options(params: Option<&str>) -> ConvertOptions {
        ConvertOptions {
            input: "square.qli".to_string(),
            output: Some(PathBuf::from("square.svg")),
            params: params.map(ToString::to_string),
            needle_bit: None,
        }
    }

    #[test]
    fn converts_program_and_writes_document() {
        let config_repo = FakeConfigRepository::default();
        let source = MemorySource::with("square.qli", SQUARE);
        let sink = MemorySink::default();
        let usecase = ConvertUseCase {
            config_repo: &config_repo,
            program_source: &source,
            sink: &sink,
            reporter: &SilentReporter,
        };

        let summary = usecase.execute(options(None)).unwrap();
        assert_eq!(summary.commands, 9);
        assert_eq!(summary.paths, 3);

        let written = sink.written.lock().unwrap();
        let (path, document) = &written[0];
        assert_eq!(path.as_deref(), Some(std::path::Path::new("square.svg")));
        let stroke_of = |d: &str| {
            document
                .split("<path ")
                .map(|rest| &rest[..rest.find('>').unwrap_or(rest.len())])
                .find(|tag| tag.contains(&format!("d=\"{d}\"")))
                .map(|tag| tag.contains("stroke=\"black\""))
        };
        assert_eq!(stroke_of("M 0,0 L 100,0 L 100,50"), Some(true));
        assert_eq!(stroke_of("M 100,50 L 0,50"), Some(false));
        assert!(document.contains("stroke=\"red\""));
        assert!(document.contains("stroke=\"blue\""));
    }

    #[test]
    fn cli_params_override_config() {
        let config_repo = FakeConfigRepository {
            config: serde_json::from_str(
                r#"{ "output": { "oncolor": "green", "offcolor": "gray" } }"#,
            )
            .unwrap(),
        };
        let source = MemorySource::with("square.qli", SQUARE);
        let sink = MemorySink::default();
        let usecase = ConvertUseCase {
            config_repo: &config_repo,
            program_source: &source,
            sink: &sink,
            reporter: &SilentReporter,
        };

        usecase.execute(options(Some("navy||||||"))).unwrap_err();
        usecase.execute(options(Some("navy|||||"))).unwrap();

        let written = sink.written.lock().unwrap();
        let document = &written[0].1;
        assert!(document.contains("stroke=\"navy\""));
        assert!(document.contains("stroke=\"gray\""));
        assert!(!document.contains("stroke=\"blue\""));
    }

    #[test]
    fn invalid_config_values_stop_conversion() {
        let config_repo = FakeConfigRepository {
            config: serde_json::from_str(r#"{ "output": { "width": 0 } }"#).unwrap(),
        };
        let source = MemorySource::with("square.qli", SQUARE);
        let sink = MemorySink::default();
        let usecase = ConvertUseCase {
            config_repo: &config_repo,
            program_source: &source,
            sink: &sink,
            reporter: &SilentReporter,
        };

        let err = usecase.execute(options(None)).unwrap_err();
        assert!(format!("{err:#}").contains("width"));
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[test]
    fn parse_errors_name_the_input() {
        let config_repo = FakeConfigRepository::default();
        let source = MemorySource::with("square.qli", "VP 1,2\nZZ\n");
        let sink = MemorySink::default();
        let usecase = ConvertUseCase {
            config_repo: &config_repo,
            program_source: &source,
            sink: &sink,
            reporter: &SilentReporter,
        };

        let err = usecase.execute(options(None)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("square.qli"));
        assert!(message.contains("line 2"));
        assert!(sink.written.lock().unwrap().is_empty());
    }
}
