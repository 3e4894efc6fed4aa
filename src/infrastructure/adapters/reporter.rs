//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 표준 출력은 SVG 문서가 쓸 수 있으므로 진행 정보는 stderr로만 보낸다.
pub struct ConsoleReporter {
    quiet: bool,
    colored: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            colored: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn kv(&self, key: &str, value: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.quiet {
            return;
        }
        if self.colored {
            eprintln!("[\x1b[32m{:<8}\x1b[0m] {}", scope, message);
        } else {
            eprintln!("[{:<8}] {}", scope, message);
        }
    }
}
