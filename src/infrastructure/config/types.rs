//! 설정 스키마와 병합/해석 규칙.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::params::{BorderSpec, MarginSpec, SvgOutputParams};
use crate::domain::parser::{DEFAULT_NEEDLE_BIT, ParseOptions};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// SVG 출력 기본값
    #[serde(default)]
    pub output: OutputConfig,
    /// QLI 파서 설정
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    /// `|` 구분 문자열 표기. 개별 필드보다 나중에 적용된다.
    pub params: Option<String>,
    pub oncolor: Option<String>,
    pub offcolor: Option<String>,
    pub line_width: Option<f64>,
    pub margin: Option<MarginSpec>,
    pub width: Option<f64>,
    pub borders: Option<Vec<BorderSpec>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ParserConfig {
    /// 니들 on/off로 해석할 출력 비트
    pub needle_bit: Option<u32>,
}

impl Config {
    /// 기본값 -> 개별 필드 -> `params` 문자열 순으로 출력 파라미터를 해석한다.
    pub fn output_params(&self) -> Result<SvgOutputParams> {
        let out = &self.output;
        let mut params = SvgOutputParams::default();

        if let Some(v) = &out.oncolor {
            params.oncolor = v.clone();
        }
        if let Some(v) = &out.offcolor {
            params.offcolor = v.clone();
        }
        if let Some(v) = out.line_width {
            params.line_width = v;
        }
        if let Some(v) = &out.margin {
            params.margin = v.clone();
        }
        if let Some(v) = out.width {
            params.width = v;
        }
        if let Some(v) = &out.borders {
            params.borders = v.clone();
        }

        params
            .validate()
            .context("invalid output settings in config")?;

        match &out.params {
            Some(text) => params
                .with_overrides(text)
                .with_context(|| format!("invalid output.params `{text}` in config")),
            None => Ok(params),
        }
    }

    pub fn needle_bit(&self) -> u32 {
        self.parser.needle_bit.unwrap_or(DEFAULT_NEEDLE_BIT)
    }

    /// 명령줄에서 준 니들 비트가 있으면 설정값보다 우선한다.
    pub fn parse_options(&self, needle_bit: Option<u32>) -> ParseOptions {
        ParseOptions {
            needle_bit: needle_bit.unwrap_or_else(|| self.needle_bit()),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.output.merge_from(other.output);
        self.parser.merge_from(other.parser);
    }
}

impl OutputConfig {
    pub(crate) fn merge_from(&mut self, other: OutputConfig) {
        if other.params.is_some() {
            self.params = other.params;
        }
        if other.oncolor.is_some() {
            self.oncolor = other.oncolor;
        }
        if other.offcolor.is_some() {
            self.offcolor = other.offcolor;
        }
        if other.line_width.is_some() {
            self.line_width = other.line_width;
        }
        if other.margin.is_some() {
            self.margin = other.margin;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.borders.is_some() {
            self.borders = other.borders;
        }
    }
}

impl ParserConfig {
    pub(crate) fn merge_from(&mut self, other: ParserConfig) {
        if other.needle_bit.is_some() {
            self.needle_bit = other.needle_bit;
        }
    }
}
