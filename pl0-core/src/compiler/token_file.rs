//! 记号流的文本格式
//!
//! 词法分析与语法分析之间的边界：每行一个 `(kind,lexeme)`。
//! 读入时去掉每行首尾空白，跳过空行，以第一个逗号分隔种类与词素，两者再各自去空白。

use crate::compiler::lexer::Token;
use crate::kit::position::SourcePosition;
use std::fmt::Write as _;
use thiserror::Error;

/// 边界上的记号：种类名 + 词素
///
/// 来自记号文件时没有位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: String,
    pub lexeme: String,
    pub position: Option<SourcePosition>,
}

impl RawToken {
    pub fn new(kind: impl Into<String>, lexeme: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            lexeme: lexeme.into(),
            position: None,
        }
    }
}

impl From<&Token> for RawToken {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind().name().to_string(),
            lexeme: token.lexeme().to_string(),
            position: Some(token.position()),
        }
    }
}

/// 记号文件格式错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenFileError {
    #[error("line {line}: malformed token entry '{text}', expected '(kind,lexeme)'")]
    Malformed { line: usize, text: String },

    #[error("line {line}: missing ',' in token entry '{text}'")]
    MissingComma { line: usize, text: String },
}

impl TokenFileError {
    pub fn line(&self) -> usize {
        match self {
            TokenFileError::Malformed { line, .. } | TokenFileError::MissingComma { line, .. } => {
                *line
            }
        }
    }
}

/// 把记号序列写成 `(kind,lexeme)` 文本，每行一个
pub fn write_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "({},{})", token.kind().name(), token.lexeme());
    }
    out
}

/// 解析 `(kind,lexeme)` 文本
pub fn read_tokens(text: &str) -> Result<Vec<RawToken>, TokenFileError> {
    let mut tokens = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        let inner = entry
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| TokenFileError::Malformed {
                line: line_no,
                text: entry.to_string(),
            })?;

        let (kind, lexeme) = inner
            .split_once(',')
            .ok_or_else(|| TokenFileError::MissingComma {
                line: line_no,
                text: entry.to_string(),
            })?;

        tokens.push(RawToken::new(kind.trim(), lexeme.trim()));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic() {
        let tokens = read_tokens("(varsym,var)\n(ident,x)\n(semicolon,;)\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                RawToken::new("varsym", "var"),
                RawToken::new("ident", "x"),
                RawToken::new("semicolon", ";"),
            ]
        );
    }

    #[test]
    fn test_read_trims_and_skips_blank_lines() {
        let tokens = read_tokens("  ( ident , abc )  \n\n   \n(number,12)").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], RawToken::new("ident", "abc"));
        assert_eq!(tokens[1], RawToken::new("number", "12"));
    }

    #[test]
    fn test_read_splits_at_first_comma() {
        let tokens = read_tokens("(comma,,)\n(rparen,))").unwrap();
        assert_eq!(tokens[0], RawToken::new("comma", ","));
        assert_eq!(tokens[1], RawToken::new("rparen", ")"));
    }

    #[test]
    fn test_read_malformed() {
        let err = read_tokens("(ident,x)\nident,y").unwrap_err();
        assert_eq!(
            err,
            TokenFileError::Malformed {
                line: 2,
                text: "ident,y".to_string()
            }
        );
        assert_eq!(err.line(), 2);
        assert!(matches!(read_tokens("(").unwrap_err(), TokenFileError::Malformed { .. }));
    }

    #[test]
    fn test_read_missing_comma() {
        let err = read_tokens("(ident x)").unwrap_err();
        assert!(matches!(err, TokenFileError::MissingComma { line: 1, .. }));
        assert!(err.to_string().contains("missing ','"));
    }
}
