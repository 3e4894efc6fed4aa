//! 프로그램 실행 결과가 차지하는 영역을 계산하는 방문자.

use std::f64::consts::FRAC_PI_2;

use crate::domain::geometry::{Extents, polar};
use crate::domain::motion::MotionState;
use crate::domain::program::{AxisMap, Program, ProgramVisitor};

/// 원호 하나가 지날 수 있는 사분점(0/90/180/270도) 최대 개수.
const MAX_QUADRANT_POINTS: i32 = 4;

#[derive(Debug, Default)]
pub struct ExtentsVisitor {
    motion: MotionState,
    extents: Extents,
}

impl ExtentsVisitor {
    pub fn extents(&self) -> Extents {
        self.extents
    }
}

/// 프로그램 전체를 실행해 경계 사각형을 구한다.
pub fn compute_extents(program: &Program) -> Extents {
    let mut visitor = ExtentsVisitor::default();
    program.execute(&mut visitor);
    visitor.extents()
}

impl ProgramVisitor for ExtentsVisitor {
    fn vector_motion(&mut self, _index: usize, axes: AxisMap) {
        self.motion.axes = axes;
    }

    fn vector_position(&mut self, _index: usize, d1: f64, d2: f64) {
        let next = self.motion.target(d1, d2);
        self.extents.include(next);
        self.motion.current = next;
    }

    fn circle(&mut self, _index: usize, radius: f64, start_angle: f64, angle_range: f64) {
        let arc = self.motion.arc(radius, start_angle, angle_range);
        self.extents.include(arc.end);

        // 원호 끝점 사이에 있는 사분점만 영역을 넓힐 수 있다.
        let mut lo = arc.start_angle / FRAC_PI_2;
        let mut hi = arc.end_angle / FRAC_PI_2;
        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }
        let lo = lo.floor();
        let mut i = 1;
        while i <= MAX_QUADRANT_POINTS && lo + f64::from(i) < hi {
            let extreme = polar(radius, FRAC_PI_2 * (lo + f64::from(i)));
            self.extents.include(arc.centre + extreme);
            i += 1;
        }

        self.motion.current = arc.end;
    }

    fn vector_sequence_end(&mut self, _index: usize) {
        self.motion.end_sequence();
    }

    fn clear_sequence(&mut self, _index: usize) {
        self.motion.clear_sequence();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::domain::parser::{ParseOptions, parse_program};

    fn extents_of(source: &str) -> Extents {
        let program = parse_program(source, &ParseOptions::default()).unwrap();
        compute_extents(&program)
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual - expected).hypot() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn empty_program_is_just_origin() {
        let extents = extents_of("");
        assert_eq!(extents, Extents::default());
    }

    #[test]
    fn vector_positions_grow_extents() {
        let extents = extents_of("VMXY\nVP 10,5\nVP -3,2\nVE");
        assert_close(extents.min, Point::new(-3.0, 0.0));
        assert_close(extents.max, Point::new(10.0, 5.0));
    }

    #[test]
    fn sequences_chain_from_previous_end() {
        let extents = extents_of("VP 10,10\nVE\nCS\nVP 10,10\nVE");
        assert_close(extents.max, Point::new(20.0, 20.0));
    }

    #[test]
    fn swapped_axes_are_honoured() {
        let extents = extents_of("VM YX\nVP 1,7");
        assert_close(extents.max, Point::new(7.0, 1.0));
    }

    #[test]
    fn half_circle_includes_top_extreme() {
        // 원점에서 시작해 중심 (-10, 0) 기준으로 위쪽 반원을 그린다.
        let extents = extents_of("CR 10,0,180");
        assert_close(extents.min, Point::new(-20.0, 0.0));
        assert_close(extents.max, Point::new(0.0, 10.0));
    }

    #[test]
    fn full_circle_covers_every_side() {
        let extents = extents_of("CR 5,45,360");
        let centre = Point::ORIGIN - polar(5.0, 45f64.to_radians());
        assert_close(extents.min, Point::new(centre.x - 5.0, centre.y - 5.0));
        assert_close(extents.max, Point::new(centre.x + 5.0, centre.y + 5.0));
    }

    #[test]
    fn clockwise_arc_uses_same_quadrants() {
        let extents = extents_of("CR 10,90,-180");
        // 중심 (0, -10), 90도에서 -90도까지 시계 방향: 오른쪽 끝 (10, -10)을 지난다.
        assert_close(extents.max, Point::new(10.0, 0.0));
        assert_close(extents.min, Point::new(0.0, -20.0));
    }
}
