//! Domain layer
//! QLI 프로그램 모델, 파서, 기하 계산, 경로 추적 규칙을 외부 I/O 없이 표현한다.

pub mod extents;
pub mod geometry;
pub mod motion;
pub mod params;
pub mod parser;
pub mod path;
pub mod pattern;
pub mod program;
pub mod request;
pub mod tracer;
