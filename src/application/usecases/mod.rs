//! 애플리케이션 유스케이스 모음.

pub mod convert;
pub mod extents;
pub mod inspect_config;

#[cfg(test)]
pub(crate) mod fakes;
