//! 패턴 좌표 계산에 쓰는 기하 유틸리티.
//! 점/벡터/변환은 kurbo 타입을 그대로 사용한다.

use kurbo::{Point, Vec2};
use serde::Serialize;

/// 출력에서 무시할 만큼 작은 값의 상대 크기.
pub const EPSILON: f64 = 1.0e-6;

/// 극좌표(반지름, 라디안)를 벡터로 변환한다.
pub fn polar(radius: f64, angle: f64) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// 원점을 항상 포함하는 축 정렬 경계 사각형.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extents {
    pub min: Point,
    pub max: Point,
}

impl Default for Extents {
    fn default() -> Self {
        Self {
            min: Point::ORIGIN,
            max: Point::ORIGIN,
        }
    }
}

impl Extents {
    pub fn include(&mut self, point: Point) {
        self.min = Point::new(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Point::new(self.max.x.max(point.x), self.max.y.max(point.y));
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn centre(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// 양방향으로 `delta`만큼 넓힌 사각형을 반환한다.
    pub fn expanded(&self, delta: Vec2) -> Self {
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }
}

/// 같은 묶음 안에서 최대 절댓값 대비 `epsilon`보다 작은 값을 0으로 만든다.
/// 회전 행렬의 1e-16 같은 잡음이 출력 파일에 남지 않게 한다.
pub fn condition_floats<const N: usize>(values: [f64; N], epsilon: f64) -> [f64; N] {
    let max_abs = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    values.map(|v| if v.abs() / epsilon < max_abs { 0.0 } else { v })
}

/// `%g` 규칙으로 유효숫자 `significant`자리까지 숫자를 포맷한다.
pub fn format_general(value: f64, significant: usize) -> String {
    format_g(value, significant, false)
}

/// `%G` 규칙(지수 표기 시 대문자 `E`)으로 포맷한다.
pub fn format_general_upper(value: f64, significant: usize) -> String {
    format_g(value, significant, true)
}

fn format_g(value: f64, significant: usize, upper: bool) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = significant.max(1);
    // 반올림 후의 지수로 표기 방식을 결정해야 9.9999999 -> 10 같은 경계를 맞출 수 있다.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        let marker = if upper { 'E' } else { 'e' };
        format!("{mantissa}{marker}{sign}{:02}", exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}
