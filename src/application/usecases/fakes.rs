//! 유스케이스 테스트용 메모리 포트 구현.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::application::ports::{ConfigRepository, ProgramSource, Reporter, SvgSink};
use crate::infrastructure::config::Config;

#[derive(Default)]
pub struct FakeConfigRepository {
    pub config: Config,
}

impl ConfigRepository for FakeConfigRepository {
    fn load(&self) -> Result<Config> {
        Ok(self.config.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

#[derive(Default)]
pub struct MemorySource {
    pub files: HashMap<String, String>,
}

impl MemorySource {
    pub fn with(name: &str, text: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(name.to_string(), text.to_string());
        Self { files }
    }
}

impl ProgramSource for MemorySource {
    fn read(&self, input: &str) -> Result<String> {
        self.files
            .get(input)
            .cloned()
            .ok_or_else(|| anyhow!("no such input {input}"))
    }
}

#[derive(Default)]
pub struct MemorySink {
    pub written: Mutex<Vec<(Option<PathBuf>, String)>>,
}

impl SvgSink for MemorySink {
    fn write(&self, output: Option<&Path>, document: &str) -> Result<()> {
        if let Ok(mut written) = self.written.lock() {
            written.push((output.map(Path::to_path_buf), document.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn kv(&self, _key: &str, _value: &str) {}
    fn status(&self, _scope: &str, _message: &str) {}
}
