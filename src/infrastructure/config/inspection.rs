//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::types::{OutputConfig, ParserConfig};
use crate::domain::params::SvgOutputParams;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub output: OutputConfig,
    pub parser: ParserConfig,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    /// 해석에 실패하면 `None`이고 `params_error`에 사유가 남는다.
    pub params: Option<SvgOutputParams>,
    pub params_error: Option<String>,
    pub needle_bit: u32,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let (params, params_error) = match loaded.config.output_params() {
            Ok(params) => (Some(params), None),
            Err(err) => (None, Some(format!("{err:#}"))),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            output: loaded.config.output.clone(),
            parser: loaded.config.parser.clone(),
            effective: EffectiveSettings {
                params,
                params_error,
                needle_bit: loaded.config.needle_bit(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::infrastructure::config::Config;

    #[test]
    fn inspection_reports_params_error_instead_of_failing() {
        let config: Config =
            serde_json::from_str(r#"{ "output": { "params": "||x" }, "parser": { "needle_bit": 4 } }"#)
                .unwrap();
        let inspection = ConfigInspection::from_loaded(LoadedConfig {
            config,
            searched_paths: vec![PathBuf::from("a.json")],
            loaded_paths: vec![],
        });

        assert!(inspection.effective.params.is_none());
        assert!(inspection.effective.params_error.is_some());
        assert_eq!(inspection.effective.needle_bit, 4);
        assert_eq!(inspection.searched_paths, vec!["a.json".to_string()]);
    }
}
