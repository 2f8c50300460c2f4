//! Token 结构

use super::token_kind::TokenKind;
use crate::kit::position::SourcePosition;

/// 数字常量的值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Integer(u64),
    Real(f64),
}

/// 已分类、带位置的记号
///
/// 只由 Lexer 创建，创建后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    position: SourcePosition,
    literal: Option<Literal>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
            literal: None,
        }
    }

    pub(crate) fn number(lexeme: impl Into<String>, position: SourcePosition, value: Literal) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            position,
            literal: Some(value),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 首字符位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 数字常量的值；非数字记号为 `None`
    pub fn literal(&self) -> Option<Literal> {
        self.literal
    }
}
