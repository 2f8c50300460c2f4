//! CLI 配置
//!
//! 读取 JSON 配置文件，并把日志配置转换为 tracing 级别

use pl0_config::{LogLevel, Pl0Config};
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

/// 配置级别到 tracing 过滤级别，`Off` 关闭输出
pub fn to_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// 读取配置文件；未指定时使用默认配置
pub fn load_config(path: Option<&Path>) -> Result<Pl0Config, String> {
    let Some(path) = path else {
        return Ok(Pl0Config::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config '{}': {}", path.display(), e))?;
    parse_config(&content).map_err(|e| format!("Invalid config '{}': {}", path.display(), e))
}

fn parse_config(content: &str) -> serde_json::Result<Pl0Config> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl0_config::Phase;

    #[test]
    fn test_partial_config_file() {
        let config = parse_config(r#"{ "lexer": { "max_identifier_len": 20 } }"#).unwrap();
        assert_eq!(config.lexer.max_identifier_len, 20);
        assert_eq!(config.lexer.max_number_digits, 14);
        assert!(!config.parser.trace);
    }

    #[test]
    fn test_logging_overrides() {
        let config =
            parse_config(r#"{ "logging": { "level": "info", "parser": "trace" } }"#).unwrap();
        let logging = &config.logging;
        assert_eq!(to_level_filter(logging.level_for(Phase::Parser)), LevelFilter::TRACE);
        assert_eq!(to_level_filter(logging.level_for(Phase::Lexer)), LevelFilter::INFO);
        assert_eq!(to_level_filter(logging.level_for(Phase::Cli)), LevelFilter::INFO);
    }

    #[test]
    fn test_silent_maps_to_off() {
        let level = LogLevel::parse("silent").unwrap();
        assert_eq!(to_level_filter(level), LevelFilter::OFF);
        assert_eq!(to_level_filter(LogLevel::Error), LevelFilter::ERROR);
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config(r#"{ "lexer": { "max_identifier_len": "x" } }"#).is_err());
    }

    #[test]
    fn test_missing_config_path_uses_default() {
        assert_eq!(load_config(None).unwrap(), Pl0Config::default());
    }
}
