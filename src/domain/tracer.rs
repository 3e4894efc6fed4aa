//! 프로그램 이동을 니들 상태별 SVG 경로로 추적하는 방문자.

use tracing::trace;

use crate::domain::extents::compute_extents;
use crate::domain::geometry::polar;
use crate::domain::motion::{ArcMotion, MotionState};
use crate::domain::path::{PathData, Segment};
use crate::domain::pattern::{Pattern, StrokedPath};
use crate::domain::program::{AxisMap, Program, ProgramVisitor};

/// 한 번의 SVG 원호 명령으로 그릴 수 있는 최대 각도(도).
const MAX_ARC_PIECE: f64 = 180.0;

pub struct TraceVisitor {
    motion: MotionState,
    needle_on: bool,
    current: PathData,
    pattern: Pattern,
}

impl TraceVisitor {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            motion: MotionState::default(),
            needle_on: true,
            current: PathData::new(),
            pattern,
        }
    }

    /// 열린 경로를 닫고 완성된 패턴을 반환한다.
    pub fn finish(mut self) -> Pattern {
        self.end_path();
        self.pattern
    }

    fn end_path(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.current);
        self.pattern.push(StrokedPath {
            needle_on: self.needle_on,
            data,
            color_override: None,
        });
    }

    fn set_needle(&mut self, state: bool) {
        // 상태가 바뀌기 전까지의 이동은 이전 색으로 남겨야 한다.
        if self.needle_on != state {
            self.end_path();
        }
        self.needle_on = state;
    }

    fn push_arc(&mut self, arc: &ArcMotion) {
        let sweep = arc.angle_range > 0.0;
        let span = arc.angle_range.abs();

        // 끝점이 시작점과 겹치는 원(360도 이상)은 조각으로 나눠야 그려진다.
        if span < 360.0 {
            self.current.push(Segment::Arc {
                start: arc.start,
                radius: arc.radius,
                large_arc: span % 360.0 > 180.0,
                sweep,
                end: arc.end,
            });
            return;
        }

        let pieces = (span / MAX_ARC_PIECE).ceil() as usize;
        let step = (arc.end_angle - arc.start_angle) / pieces as f64;
        let mut start = arc.start;
        for piece in 1..=pieces {
            let end = if piece == pieces {
                arc.end
            } else {
                arc.centre + polar(arc.radius, arc.start_angle + step * piece as f64)
            };
            self.current.push(Segment::Arc {
                start,
                radius: arc.radius,
                large_arc: false,
                sweep,
                end,
            });
            start = end;
        }
    }
}

/// 영역 계산과 경로 추적을 차례로 실행해 패턴을 만든다.
pub fn trace_program(program: &Program) -> Pattern {
    let extents = compute_extents(program);
    let mut visitor = TraceVisitor::new(Pattern::new(extents));
    program.execute(&mut visitor);
    visitor.finish()
}

impl ProgramVisitor for TraceVisitor {
    fn vector_motion(&mut self, index: usize, axes: AxisMap) {
        trace!(index, ?axes, "vector motion");
        self.motion.axes = axes;
    }

    fn vector_position(&mut self, _index: usize, d1: f64, d2: f64) {
        let next = self.motion.target(d1, d2);
        self.current.line(self.motion.current, next);
        self.motion.current = next;
    }

    fn circle(&mut self, _index: usize, radius: f64, start_angle: f64, angle_range: f64) {
        let arc = self.motion.arc(radius, start_angle, angle_range);
        self.push_arc(&arc);
        self.motion.current = arc.end;
    }

    fn vector_sequence_end(&mut self, _index: usize) {
        self.end_path();
        self.motion.end_sequence();
    }

    fn clear_sequence(&mut self, _index: usize) {
        self.motion.clear_sequence();
    }

    fn needle_on(&mut self, _index: usize) {
        self.set_needle(true);
    }

    fn needle_off(&mut self, _index: usize) {
        self.set_needle(false);
    }

    fn end(&mut self, _index: usize) {
        self.end_path();
    }
}
