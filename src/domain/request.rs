//! 유스케이스 입력 값 객체.

use std::path::PathBuf;

/// 입력 경로가 이 값이면 표준 입력을 읽는다.
pub const STDIN_INPUT: &str = "-";

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// QLI 파일 경로 또는 `-`
    pub input: String,
    /// 없으면 표준 출력으로 쓴다.
    pub output: Option<PathBuf>,
    /// `|` 구분 출력 파라미터. 설정 파일 값 위에 적용된다.
    pub params: Option<String>,
    pub needle_bit: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ExtentsOptions {
    pub input: String,
    pub needle_bit: Option<u32>,
}
