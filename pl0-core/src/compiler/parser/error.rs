use super::tok::Tok;
use crate::kit::position::SourcePosition;

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    /// 错误类型
    pub kind: ParserErrorKind,
    /// 错误发生的位置
    pub location: ErrorLocation,
    /// 出错处记号的词素
    pub lexeme: String,
}

/// 错误位置信息
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorLocation {
    /// 特定位置
    At(SourcePosition),
    /// 输入末尾（合成结束标记）
    Eof,
    /// 未知位置（来自记号文件的记号没有位置）
    Unknown,
}

/// 语法错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorKind {
    /// 缺少预期的记号
    UnexpectedToken { expected: Tok, found: Tok },
    /// 程序末尾缺少 '.'
    MissingPeriod,
    /// 完整程序之后还有多余记号
    ExtraneousSymbols,
    /// 条件中缺少关系运算符
    MissingRelationalOperator,
    /// 非法因子
    IllegalFactor,
    /// 缺少右括号
    MissingRightParen,
    /// 表达式不能以该记号开头
    IllegalExpressionStart,
    /// 记号种类不在终结符表中
    UnknownTokenKind(String),
}

impl ParserErrorKind {
    /// 传统 PL/0 错误编号
    pub fn code(&self) -> u8 {
        match self {
            ParserErrorKind::UnexpectedToken { expected, .. } => match expected {
                Tok::Number => 2,
                Tok::Eql => 3,
                Tok::Ident => 4,
                Tok::Period => 9,
                Tok::Semicolon => 10,
                Tok::Becomes => 13,
                Tok::Then => 16,
                Tok::EndKw => 17,
                Tok::Do => 18,
                Tok::RParen => 22,
                _ => 19,
            },
            ParserErrorKind::MissingPeriod => 9,
            ParserErrorKind::ExtraneousSymbols => 8,
            ParserErrorKind::MissingRelationalOperator => 20,
            ParserErrorKind::MissingRightParen => 22,
            ParserErrorKind::IllegalFactor | ParserErrorKind::IllegalExpressionStart => 24,
            ParserErrorKind::UnknownTokenKind(_) => 19,
        }
    }

    fn message(&self) -> String {
        match self {
            ParserErrorKind::UnexpectedToken { expected, found } => {
                format!(
                    "Missing expected symbol {}, found {}",
                    expected.describe(),
                    found.describe()
                )
            }
            ParserErrorKind::MissingPeriod => "Missing period '.' at end of program".to_string(),
            ParserErrorKind::ExtraneousSymbols => {
                "Extraneous symbols after end of program".to_string()
            }
            ParserErrorKind::MissingRelationalOperator => {
                "Relational operator expected in condition".to_string()
            }
            ParserErrorKind::IllegalFactor => "Illegal factor".to_string(),
            ParserErrorKind::MissingRightParen => "Missing right parenthesis ')'".to_string(),
            ParserErrorKind::IllegalExpressionStart => {
                "Expression must start with an identifier, a number or '('".to_string()
            }
            ParserErrorKind::UnknownTokenKind(kind) => format!("Unknown token kind '{kind}'"),
        }
    }
}

impl ParserError {
    pub fn new(kind: ParserErrorKind, location: ErrorLocation, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            lexeme: lexeme.into(),
        }
    }

    /// 获取行号（如果可用）
    pub fn line(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(pos) => Some(pos.line),
            ErrorLocation::Eof | ErrorLocation::Unknown => None,
        }
    }

    /// 获取列号（如果可用）
    pub fn column(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(pos) => Some(pos.column),
            ErrorLocation::Eof | ErrorLocation::Unknown => None,
        }
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location_prefix = match &self.location {
            ErrorLocation::At(pos) => format!("{}:{}", pos.line, pos.column),
            ErrorLocation::Eof => "EOF".to_string(),
            ErrorLocation::Unknown => "?:?".to_string(),
        };

        let message = self.kind.message();
        if self.location == ErrorLocation::Eof {
            write!(f, "[{location_prefix}] {message}, near end of input")
        } else {
            write!(f, "[{location_prefix}] {message}, near '{}'", self.lexeme)
        }
    }
}

impl std::error::Error for ParserError {}

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParserError>;
