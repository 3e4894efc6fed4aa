//! Infrastructure layer
//! 파일시스템/표준 입출력/설정 파일과 직접 통신하는 구현체와 SVG 렌더러.

pub mod adapters;
pub mod config;
pub mod render;
