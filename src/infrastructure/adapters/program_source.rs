//! QLI 입력 포트 구현 어댑터.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

use crate::application::ports::ProgramSource;
use crate::domain::request::STDIN_INPUT;

/// 파일 경로 또는 `-`(표준 입력)에서 프로그램을 읽는다.
pub struct FileProgramSource;

impl ProgramSource for FileProgramSource {
    fn read(&self, input: &str) -> Result<String> {
        if input == STDIN_INPUT {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read QLI program from stdin")?;
            return Ok(buf);
        }

        fs::read_to_string(input).with_context(|| format!("failed to read QLI program at {input}"))
    }
}
