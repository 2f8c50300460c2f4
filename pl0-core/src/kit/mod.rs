//! 通用工具

pub mod position;

pub use position::SourcePosition;
