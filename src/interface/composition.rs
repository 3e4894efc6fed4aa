//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::convert::ConvertUseCase;
use crate::application::usecases::extents::ExtentsUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, FileProgramSource, FileSvgSink, JsonConfigRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    program_source: FileProgramSource,
    sink: FileSvgSink,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AppComposition {
    /// `quiet`이면 진행 정보 출력을 끈다.
    pub fn new(quiet: bool) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            program_source: FileProgramSource,
            sink: FileSvgSink,
            reporter: ConsoleReporter::new(quiet),
        }
    }

    /// 변환 유스케이스를 생성한다.
    pub fn convert_usecase(&self) -> ConvertUseCase<'_> {
        ConvertUseCase {
            config_repo: &self.config_repo,
            program_source: &self.program_source,
            sink: &self.sink,
            reporter: &self.reporter,
        }
    }

    /// 영역 계산 유스케이스를 생성한다.
    pub fn extents_usecase(&self) -> ExtentsUseCase<'_> {
        ExtentsUseCase {
            config_repo: &self.config_repo,
            program_source: &self.program_source,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
