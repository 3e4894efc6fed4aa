//! SVG 출력 포트 구현 어댑터.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::SvgSink;

/// 파일(필요하면 상위 디렉터리 생성) 또는 표준 출력에 문서를 쓴다.
pub struct FileSvgSink;

impl SvgSink for FileSvgSink {
    fn write(&self, output: Option<&Path>, document: &str) -> Result<()> {
        let Some(path) = output else {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(document.as_bytes())
                .and_then(|_| out.flush())
                .context("failed to write SVG to stdout")?;
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("failed to create SVG at {}", path.display()))?;
        let mut out = BufWriter::new(file);
        out.write_all(document.as_bytes())
            .and_then(|_| out.flush())
            .with_context(|| format!("failed to write SVG at {}", path.display()))
    }
}
