//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制，输出到 stderr。

use crate::config::to_level_filter;
use pl0_config::{LoggingConfig, Phase};
use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按阶段构建过滤目标
fn build_targets(logging: &LoggingConfig) -> Targets {
    let default = Targets::new().with_default(to_level_filter(logging.level));
    Phase::ALL.iter().fold(default, |targets, phase| {
        targets.with_target(phase.target(), to_level_filter(logging.level_for(*phase)))
    })
}

/// 使用指定格式和日志配置初始化日志系统
pub fn init(logging: &LoggingConfig, format: LogFormat) {
    let targets = build_targets(logging);
    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    // 已有全局 subscriber 时忽略
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl0_config::LogLevel;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_targets_follow_phase_levels() {
        let logging = LoggingConfig {
            level: LogLevel::Warn,
            lexer: Some(LogLevel::Trace),
            parser: None,
        };
        let targets = build_targets(&logging);
        let levels: Vec<(String, LevelFilter)> = targets
            .iter()
            .map(|(target, level)| (target.to_string(), level))
            .collect();
        assert!(levels.contains(&("pl0::lexer".to_string(), LevelFilter::TRACE)));
        assert!(levels.contains(&("pl0::parser".to_string(), LevelFilter::WARN)));
    }

    #[test]
    fn test_silent_disables_all_targets() {
        let logging = LoggingConfig {
            level: LogLevel::Off,
            ..LoggingConfig::default()
        };
        let targets = build_targets(&logging);
        assert!(targets.iter().all(|(_, level)| level == LevelFilter::OFF));
        assert!(!targets.would_enable("pl0::lexer", &tracing::Level::ERROR));
    }
}
