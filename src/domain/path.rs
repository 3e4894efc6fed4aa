//! SVG 경로 데이터(`d` 속성) 모델.

use kurbo::Point;

use crate::domain::geometry::format_general_upper;

/// 경로 숫자 유효숫자 자릿수.
const PATH_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    /// 회전 없는 원호(rx == ry == radius).
    Arc {
        start: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl Segment {
    pub fn start(&self) -> Point {
        match self {
            Segment::Line { start, .. } | Segment::Arc { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line { end, .. } | Segment::Arc { end, .. } => *end,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<Segment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn line(&mut self, start: Point, end: Point) {
        self.push(Segment::Line { start, end });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// SVG `d` 문자열을 만든다.
    /// 첫 세그먼트 앞과 이전 끝점에서 이어지지 않는 세그먼트 앞에는 `M`을 넣는다.
    pub fn d(&self) -> String {
        let mut parts = Vec::with_capacity(self.segments.len() + 1);
        let mut pen: Option<Point> = None;

        for segment in &self.segments {
            if pen != Some(segment.start()) {
                parts.push(format!("M {}", coord(segment.start())));
            }
            parts.push(match segment {
                Segment::Line { end, .. } => format!("L {}", coord(*end)),
                Segment::Arc {
                    radius,
                    large_arc,
                    sweep,
                    end,
                    ..
                } => {
                    let r = num(*radius);
                    format!(
                        "A {r},{r} 0 {},{} {}",
                        u8::from(*large_arc),
                        u8::from(*sweep),
                        coord(*end)
                    )
                }
            });
            pen = Some(segment.end());
        }

        parts.join(" ")
    }
}

fn num(value: f64) -> String {
    format_general_upper(value, PATH_DIGITS)
}

fn coord(point: Point) -> String {
    format!("{},{}", num(point.x), num(point.y))
}
