//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use pl0_core::compiler::parser::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// 词法错误（结构化）
pub use pl0_core::LexerError;

/// 语法错误（结构化）
pub use pl0_core::ParserError;

/// 记号文件格式错误
pub use pl0_core::TokenFileError;

/// PL/0 错误类型
#[derive(Error, Debug, Clone)]
pub enum Pl0Error {
    /// 词法分析错误
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// 记号文件格式错误
    #[error("{0}")]
    TokenFile(#[from] TokenFileError),

    /// 语法分析错误
    #[error("{0}")]
    Parser(#[from] ParserError),
}

fn location_to_tuple(loc: &ErrorLocation) -> (&'static str, Option<usize>, Option<usize>) {
    match loc {
        ErrorLocation::At(pos) => ("at", Some(pos.line), Some(pos.column)),
        ErrorLocation::Eof => ("eof", None, None),
        ErrorLocation::Unknown => ("unknown", None, None),
    }
}

impl Pl0Error {
    /// 获取错误行号（如果有）
    ///
    /// 记号文件错误返回文件中的行号
    pub fn line(&self) -> Option<usize> {
        match self {
            Pl0Error::Lexer(e) => Some(e.line()),
            Pl0Error::TokenFile(e) => Some(e.line()),
            Pl0Error::Parser(e) => e.line(),
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            Pl0Error::Lexer(e) => Some(e.column()),
            Pl0Error::TokenFile(_) => None,
            Pl0Error::Parser(e) => e.column(),
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            Pl0Error::Lexer(_) => "lexer",
            Pl0Error::TokenFile(_) => "token_file",
            Pl0Error::Parser(_) => "parser",
        }
    }

    /// 传统 PL/0 错误编号（如果有）
    pub fn code(&self) -> Option<u8> {
        match self {
            Pl0Error::Lexer(e) => e.kind.code(),
            Pl0Error::TokenFile(_) => None,
            Pl0Error::Parser(e) => Some(e.kind.code()),
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，也可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            Pl0Error::Lexer(e) => ErrorReport {
                phase: self.phase(),
                line: Some(e.line()),
                column: Some(e.column()),
                error_kind: format!("{:?}", e.kind),
                code: self.code(),
                message: e.message.clone(),
                details: None,
            },
            Pl0Error::TokenFile(e) => ErrorReport {
                phase: self.phase(),
                line: Some(e.line()),
                column: None,
                error_kind: match e {
                    TokenFileError::Malformed { .. } => "Malformed",
                    TokenFileError::MissingComma { .. } => "MissingComma",
                }
                .to_string(),
                code: None,
                message: e.to_string(),
                details: None,
            },
            Pl0Error::Parser(e) => {
                let (location_type, line, column) = location_to_tuple(&e.location);
                ErrorReport {
                    phase: self.phase(),
                    line,
                    column,
                    error_kind: format!("{:?}", e.kind),
                    code: self.code(),
                    message: e.to_string(),
                    details: Some(ErrorDetails::Location { location_type }),
                }
            }
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer, token_file, parser
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 传统错误编号
    pub code: Option<u8>,
    /// 人类可读的错误消息
    pub message: String,
    /// 额外详情（位置类型等）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// 错误额外详情
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ErrorDetails {
    /// 位置相关信息
    Location { location_type: &'static str },
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            (Some(line), None) => write!(f, "[{}:{}] error: {}", self.phase, line, self.message),
            (None, _) => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
