//! 방문자들이 공유하는 벡터 이동 상태.

use kurbo::Point;

use crate::domain::geometry::polar;
use crate::domain::program::AxisMap;

/// `CR` 한 번이 만드는 원호의 기하 정보.
#[derive(Debug, Clone, Copy)]
pub struct ArcMotion {
    pub start: Point,
    pub end: Point,
    pub centre: Point,
    pub radius: f64,
    /// 라디안.
    pub start_angle: f64,
    /// 라디안.
    pub end_angle: f64,
    /// 도(degree). 양수면 반시계 방향.
    pub angle_range: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MotionState {
    pub axes: AxisMap,
    pub current: Point,
    /// 직전 `VE` 시점 위치. 다음 시퀀스의 `VP` 기준점이 된다.
    pub relative: Point,
}

impl MotionState {
    /// `VP` 인자를 절대 좌표로 변환한다.
    pub fn target(&self, d1: f64, d2: f64) -> Point {
        let (x, y) = self.axes.pick(d1, d2);
        Point::new(x + self.relative.x, y + self.relative.y)
    }

    /// 현재 위치에서 시작하는 `CR` 원호를 계산한다.
    pub fn arc(&self, radius: f64, start_angle: f64, angle_range: f64) -> ArcMotion {
        let sa = start_angle.to_radians();
        let ea = sa + angle_range.to_radians();
        let sp = polar(radius, sa);
        let ep = polar(radius, ea);
        ArcMotion {
            start: self.current,
            end: self.current + (ep - sp),
            centre: self.current - sp,
            radius,
            start_angle: sa,
            end_angle: ea,
            angle_range,
        }
    }

    pub fn clear_sequence(&mut self) {
        self.current = Point::ORIGIN;
    }

    pub fn end_sequence(&mut self) {
        self.relative = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn target_is_offset_by_previous_sequence() {
        let mut state = MotionState {
            current: Point::new(5.0, 5.0),
            ..MotionState::default()
        };
        state.end_sequence();
        assert_eq!(state.target(1.0, 2.0), Point::new(6.0, 7.0));

        state.clear_sequence();
        assert_eq!(state.current, Point::ORIGIN);
        assert_eq!(state.relative, Point::new(5.0, 5.0));
    }

    #[test]
    fn quarter_arc_from_origin() {
        let state = MotionState::default();
        let arc = state.arc(10.0, 0.0, 90.0);
        assert!(approx(arc.centre, Point::new(-10.0, 0.0)));
        assert!(approx(arc.end, Point::new(-10.0, 10.0)));
    }
}
