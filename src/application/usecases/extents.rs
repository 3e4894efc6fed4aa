//! 프로그램이 차지하는 영역만 계산하는 유스케이스.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{ConfigRepository, ProgramSource};
use crate::domain::extents::compute_extents;
use crate::domain::geometry::Extents;
use crate::domain::parser::parse_program;
use crate::domain::request::ExtentsOptions;

#[derive(Debug, Clone, Serialize)]
pub struct ExtentsReport {
    pub input: String,
    pub commands: usize,
    pub extents: Extents,
    pub width: f64,
    pub height: f64,
}

pub struct ExtentsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub program_source: &'a dyn ProgramSource,
}

impl<'a> ExtentsUseCase<'a> {
    pub fn execute(&self, options: ExtentsOptions) -> Result<ExtentsReport> {
        let config = self.config_repo.load()?;
        let parse_options = config.parse_options(options.needle_bit);

        let source = self.program_source.read(&options.input)?;
        let program = parse_program(&source, &parse_options)
            .with_context(|| format!("failed to parse QLI program {}", options.input))?;
        let extents = compute_extents(&program);
        let size = extents.size();

        Ok(ExtentsReport {
            input: options.input,
            commands: program.len(),
            extents,
            width: size.x,
            height: size.y,
        })
    }

    /// 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn execute_pretty_json(&self, options: ExtentsOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.execute(options)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::fakes::{FakeConfigRepository, MemorySource};

    #[test]
    fn reports_extents_and_size() {
        let config_repo = FakeConfigRepository::default();
        let source = MemorySource::with("p.qli", "VP -10,0\nVP 30,20\nSB2\n");
        let usecase = ExtentsUseCase {
            config_repo: &config_repo,
            program_source: &source,
        };

        let report = usecase
            .execute(ExtentsOptions {
                input: "p.qli".to_string(),
                needle_bit: None,
            })
            .unwrap();
        assert_eq!(report.commands, 3);
        assert_eq!(report.width, 40.0);
        assert_eq!(report.height, 20.0);

        let json = usecase
            .execute_pretty_json(ExtentsOptions {
                input: "p.qli".to_string(),
                needle_bit: Some(2),
            })
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["extents"]["min"]["x"], -10.0);
        assert_eq!(value["extents"]["max"]["y"], 20.0);
    }
}
