//! 추적된 경로 묶음(패턴) 모델.

use kurbo::{Point, Vec2};

use crate::domain::geometry::Extents;
use crate::domain::path::PathData;

/// 니들 상태와 함께 저장되는 경로 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub needle_on: bool,
    pub data: PathData,
    /// 지정되면 니들 상태 색상 대신 사용한다.
    pub color_override: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub extents: Extents,
    pub paths: Vec<StrokedPath>,
}

impl Pattern {
    pub fn new(extents: Extents) -> Self {
        Self {
            extents,
            paths: Vec::new(),
        }
    }

    pub fn push(&mut self, path: StrokedPath) {
        self.paths.push(path);
    }

    /// 패턴 영역을 `offset`만큼 넓힌 사각형 테두리를 추가한다.
    pub fn add_bounding_box(&mut self, color: &str, offset: Vec2) {
        let Extents { min, max } = self.extents.expanded(offset);
        let top_left = Point::new(min.x, max.y);
        let bottom_right = Point::new(max.x, min.y);

        let mut data = PathData::new();
        data.line(min, top_left);
        data.line(top_left, max);
        data.line(max, bottom_right);
        data.line(bottom_right, min);

        self.push(StrokedPath {
            needle_on: false,
            data,
            color_override: Some(color.to_string()),
        });
    }
}
