//! PL/0 Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all PL/0 crates.

use serde::Deserialize;

/// 词法分析器限制
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// 标识符最大长度（超出即为致命错误）
    pub max_identifier_len: usize,
    /// 数字最大位数（整数位与小数位合计）
    pub max_number_digits: usize,
}

/// 语法分析器选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// 是否记录语法树缩进轨迹
    pub trace: bool,
}

/// 日志级别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 关闭日志输出
    #[serde(alias = "silent")]
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 从字符串解析（大小写不敏感），"silent" 等同 "off"
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// 分阶段日志配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 全局级别
    pub level: LogLevel,
    /// 词法阶段覆盖级别
    pub lexer: Option<LogLevel>,
    /// 语法阶段覆盖级别
    pub parser: Option<LogLevel>,
}

impl LoggingConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.level),
            Phase::Parser => self.parser.unwrap_or(self.level),
            Phase::Api | Phase::Cli => self.level,
        }
    }
}

/// Top-level configuration, as read from a JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pl0Config {
    pub lexer: LexerConfig,
    pub parser: ParserConfig,
    pub logging: LoggingConfig,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
    Api,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Lexer, Phase::Parser, Phase::Api, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("pl0::{}", self.as_str())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_identifier_len: 10,
            max_number_digits: 14,
        }
    }
}
