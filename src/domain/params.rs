//! SVG 출력 파라미터와 구분자 기반 문자열 표기 파서.
//!
//! 문자열 표기는 `oncolor|offcolor|line_width|margin|width|borders` 순서이며
//! 생략하거나 비워 둔 필드는 기존 값을 유지한다.
//! 예: `black|red|1|50x50|700|blue:1,green:2`

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FIELD_DELIMITER: char = '|';
const MARGIN_DELIMITER: char = 'x';
const BORDER_DELIMITER: char = ':';
const BORDER_SEPARATOR: char = ',';
/// `borders` 필드 위치.
const BORDERS_FIELD: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("invalid number `{value}` for `{field}`")]
    InvalidNumber { field: &'static str, value: String },

    #[error("too many fields in `{text}` (expected at most {max})")]
    TooManyFields { text: String, max: usize },

    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginSpec {
    pub width: f64,
    pub height: f64,
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    pub color: String,
    /// 경계 여백 배율.
    pub border_margin: f64,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            border_margin: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgOutputParams {
    pub oncolor: String,
    pub offcolor: String,
    pub line_width: f64,
    pub margin: MarginSpec,
    /// 여백 안쪽 이미지 폭. 종횡비는 유지된다.
    pub width: f64,
    pub borders: Vec<BorderSpec>,
}

impl Default for SvgOutputParams {
    fn default() -> Self {
        Self {
            oncolor: "black".to_string(),
            offcolor: "red".to_string(),
            line_width: 1.0,
            margin: MarginSpec::default(),
            width: 700.0,
            borders: vec![BorderSpec {
                color: "blue".to_string(),
                border_margin: 1.0,
            }],
        }
    }
}

/// 필드 이름, 기본값, 설명.
const FIELD_HELP: &[(&str, &str, &str)] = &[
    ("oncolor", "black", "The color of the \"on\" path"),
    ("offcolor", "red", "The color of the \"off\" path"),
    ("line_width", "1", "Bigger numbers means thicker lines"),
    ("margin", "50x50", "Margin around image (WIDTHxHEIGHT)"),
    (
        "width",
        "700",
        "The image width (inside margin). Aspect ratio is maintained.",
    ),
    (
        "borders",
        "blue:1",
        "Comma separated list of COLOR[:MARGIN_FACTOR] borders",
    ),
];

impl SvgOutputParams {
    /// 기본값 위에 문자열 표기를 적용한다.
    pub fn parse(text: &str) -> Result<Self, ParamsError> {
        Self::default().with_overrides(text)
    }

    /// 현재 값 위에 문자열 표기를 덮어쓴다.
    pub fn with_overrides(mut self, text: &str) -> Result<Self, ParamsError> {
        let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();
        if fields.len() > FIELD_HELP.len() {
            return Err(ParamsError::TooManyFields {
                text: text.to_string(),
                max: FIELD_HELP.len(),
            });
        }

        for (index, raw) in fields.iter().enumerate() {
            let value = raw.trim();
            if value.is_empty() && index != BORDERS_FIELD {
                continue;
            }
            match index {
                0 => self.oncolor = value.to_string(),
                1 => self.offcolor = value.to_string(),
                2 => self.line_width = positive("line_width", value)?,
                3 => self.margin = parse_margin(value, &self.margin)?,
                4 => self.width = positive("width", value)?,
                // 빈 borders 필드는 "테두리 없음"을 뜻한다. 필드 자체가 없을 때만 기존 값을 유지한다.
                _ => self.borders = parse_borders(value)?,
            }
        }

        Ok(self)
    }

    /// 문자열 표기 외의 경로(설정 파일 등)로 채운 값도 같은 규칙으로 검사한다.
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_positive("line_width", self.line_width)?;
        check_positive("width", self.width)?;
        check_non_negative("margin_width", self.margin.width)?;
        check_non_negative("margin_height", self.margin.height)?;
        Ok(())
    }

    /// 필드 도움말을 사람이 읽기 쉬운 표 형태로 반환한다.
    pub fn describe() -> String {
        let mut out = String::new();
        out.push_str("Fields are separated by '|' in this order; omitted or empty fields keep their default.\n\n");
        for (name, default, help) in FIELD_HELP {
            out.push_str(&format!("  {:<12} {:<10} {}\n", name, default, help));
        }
        out
    }
}

fn parse_margin(text: &str, base: &MarginSpec) -> Result<MarginSpec, ParamsError> {
    let parts: Vec<&str> = text.split(MARGIN_DELIMITER).collect();
    if parts.len() > 2 {
        return Err(ParamsError::TooManyFields {
            text: text.to_string(),
            max: 2,
        });
    }

    let mut margin = base.clone();
    if let Some(w) = parts.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        margin.width = check_non_negative("margin_width", number("margin_width", w)?)?;
    }
    if let Some(h) = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        margin.height = check_non_negative("margin_height", number("margin_height", h)?)?;
    }
    Ok(margin)
}

fn parse_borders(text: &str) -> Result<Vec<BorderSpec>, ParamsError> {
    let mut borders = Vec::new();
    for item in text.split(BORDER_SEPARATOR) {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }

        let parts: Vec<&str> = item.split(BORDER_DELIMITER).collect();
        if parts.len() > 2 {
            return Err(ParamsError::TooManyFields {
                text: item.to_string(),
                max: 2,
            });
        }

        let mut border = BorderSpec::default();
        if let Some(color) = parts.first().map(|s| s.trim()).filter(|s| !s.is_empty()) {
            border.color = color.to_string();
        }
        if let Some(m) = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty()) {
            border.border_margin = number("border_margin", m)?;
        }
        borders.push(border);
    }
    Ok(borders)
}

fn number(field: &'static str, value: &str) -> Result<f64, ParamsError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParamsError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn positive(field: &'static str, value: &str) -> Result<f64, ParamsError> {
    check_positive(field, number(field, value)?)
}

fn check_positive(field: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ParamsError::NotPositive { field, value });
    }
    Ok(value)
}

fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_nan() || value < 0.0 {
        return Err(ParamsError::Negative { field, value });
    }
    Ok(value)
}
