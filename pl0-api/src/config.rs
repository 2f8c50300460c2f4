//! API 层配置

use pl0_config::{LexerConfig, ParserConfig, Pl0Config};

/// Pipeline configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Lexer limits
    pub lexer: LexerConfig,
    /// Parser options
    pub parser: ParserConfig,
}

impl RunConfig {
    /// Enable the parse trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.parser.trace = trace;
        self
    }
}

impl From<&Pl0Config> for RunConfig {
    fn from(config: &Pl0Config) -> Self {
        Self {
            lexer: config.lexer.clone(),
            parser: config.parser.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.parser.trace);
        assert_eq!(cfg.lexer.max_identifier_len, 10);
        assert_eq!(cfg.lexer.max_number_digits, 14);
    }

    #[test]
    fn test_from_file_config() {
        let mut file = Pl0Config::default();
        file.lexer.max_identifier_len = 31;
        file.parser.trace = true;
        let cfg = RunConfig::from(&file);
        assert_eq!(cfg.lexer.max_identifier_len, 31);
        assert!(cfg.parser.trace);
    }

    #[test]
    fn test_with_trace() {
        assert!(RunConfig::default().with_trace(true).parser.trace);
    }
}
