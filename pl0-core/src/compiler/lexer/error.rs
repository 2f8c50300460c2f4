//! Lexer 错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型、位置和详细消息。

use crate::kit::position::SourcePosition;
use thiserror::Error;

/// 错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// 非法字符
    IllegalCharacter(char),
    /// 标识符超长
    IdentifierTooLong(String),
    /// 数字位数超限
    NumberTooLong(String),
    /// 注释未闭合
    UnterminatedComment,
    /// 单独的 ':'（后面不是 '='）
    LoneColon,
}

impl LexErrorKind {
    /// 传统 PL/0 错误编号（未闭合注释没有对应编号）
    pub fn code(&self) -> Option<u8> {
        match self {
            LexErrorKind::IllegalCharacter(_) => Some(0),
            LexErrorKind::NumberTooLong(_) => Some(25),
            LexErrorKind::IdentifierTooLong(_) => Some(26),
            LexErrorKind::LoneColon => Some(13),
            LexErrorKind::UnterminatedComment => None,
        }
    }
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{}:{}] {message}", .position.line, .position.column)]
pub struct LexerError {
    /// 错误类型
    pub kind: LexErrorKind,
    /// 错误发生的位置（出错词素的首字符）
    pub position: SourcePosition,
    /// 详细错误消息
    pub message: String,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: LexErrorKind, position: SourcePosition) -> Self {
        let message = Self::format_message(&kind);
        Self {
            kind,
            position,
            message,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    fn format_message(kind: &LexErrorKind) -> String {
        match kind {
            LexErrorKind::IllegalCharacter(ch) => format!("Illegal character '{ch}'"),
            LexErrorKind::IdentifierTooLong(text) => {
                format!("The identifier '{text}' is too long")
            }
            LexErrorKind::NumberTooLong(text) => format!("The number '{text}' is too great"),
            LexErrorKind::UnterminatedComment => {
                "Unterminated comment, '}' expected before end of input".to_string()
            }
            LexErrorKind::LoneColon => "Found ':' when expecting ':='".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_at_position() {
        let pos = SourcePosition::new(10, 5, 100);
        let err = LexerError::at(LexErrorKind::IllegalCharacter('@'), pos);

        assert_eq!(err.line(), 10);
        assert_eq!(err.column(), 5);
        assert!(matches!(err.kind, LexErrorKind::IllegalCharacter('@')));
        assert!(err.message.contains("Illegal character"));
    }

    #[test]
    fn test_lexer_error_display() {
        let pos = SourcePosition::new(3, 7, 50);
        let err = LexerError::at(LexErrorKind::UnterminatedComment, pos);

        let display = format!("{}", err);
        assert!(display.starts_with("[3:7]"));
        assert!(display.contains("Unterminated comment"));
    }

    #[test]
    fn test_lexer_error_too_long() {
        let pos = SourcePosition::start();
        let err = LexerError::at(LexErrorKind::NumberTooLong("123456789012345".into()), pos);
        assert!(err.to_string().contains("123456789012345"));
        assert_eq!(err.kind.code(), Some(25));
    }
}
