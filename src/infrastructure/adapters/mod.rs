//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod program_source;
mod reporter;
mod svg_sink;

pub use config_repository::JsonConfigRepository;
pub use program_source::FileProgramSource;
pub use reporter::ConsoleReporter;
pub use svg_sink::FileSvgSink;
