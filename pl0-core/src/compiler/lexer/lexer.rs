//! PL/0 DFA 词法分析器
//!
//! 单遍从左到右扫描，大小写不敏感。每一步转移要么消费当前字符，
//! 要么要求在新状态下重新处理同一个字符（一个字符的回退）。
//!
//! # 示例
//!
//! ```rust
//! use pl0_core::{Lexer, LexerConfig, TokenKind};
//!
//! let mut lexer = Lexer::new(LexerConfig::default());
//! let tokens = lexer.tokenize("x := 2").unwrap();
//! assert_eq!(tokens[1].kind(), TokenKind::Becomes);
//! ```

use super::error::{LexErrorKind, LexerError};
use super::state::LexerState;
use super::token::{Literal, Token};
use super::token_kind::{lookup_keyword, lookup_symbol, TokenKind};
use crate::kit::position::SourcePosition;
use pl0_config::LexerConfig;
use tracing::{debug, trace};

/// 一次转移之后如何处理当前字符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// 字符已被消费，前进
    Consume,
    /// 在新状态下重新处理当前字符
    Reprocess,
}

/// 词法分析器
///
/// 状态、累加器与位置都属于实例本身，不同实例之间互不影响
pub struct Lexer {
    config: LexerConfig,
    state: LexerState,
    /// 当前被检查字符的位置
    position: SourcePosition,
    /// 当前词素首字符的位置
    token_start: SourcePosition,
    /// 小数点的位置（`3.` 无小数位时用作句点记号的位置）
    period_position: SourcePosition,
    /// 已读入的词素文本（已转小写）
    text: String,
    int_value: u64,
    /// 整数部分超出 u64 范围
    overflowed: bool,
    digits: usize,
    fraction_digits: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Self {
        trace!(target: "pl0::lexer", ?config, "Creating new Lexer");
        Self {
            config,
            state: LexerState::Start,
            position: SourcePosition::start(),
            token_start: SourcePosition::start(),
            period_position: SourcePosition::start(),
            text: String::new(),
            int_value: 0,
            overflowed: false,
            digits: 0,
            fraction_digits: 0,
            tokens: Vec::new(),
        }
    }

    /// 当前 DFA 状态
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// 把整段源文本切分为记号序列
    ///
    /// 遇到第一个词法错误即停止并返回该错误
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, LexerError> {
        self.reset();
        let mut chars = source.chars().peekable();

        while let Some(&raw) = chars.peek() {
            match self.step(raw)? {
                Step::Consume => {
                    chars.next();
                    self.position.advance(raw);
                }
                Step::Reprocess => {}
            }
        }
        self.finish()?;

        debug!(target: "pl0::lexer", count = self.tokens.len(), "Lexical analysis finished");
        Ok(std::mem::take(&mut self.tokens))
    }

    fn reset(&mut self) {
        self.state = LexerState::Start;
        self.position = SourcePosition::start();
        self.token_start = SourcePosition::start();
        self.tokens.clear();
        self.clear_accumulators();
    }

    fn clear_accumulators(&mut self) {
        self.text.clear();
        self.int_value = 0;
        self.overflowed = false;
        self.digits = 0;
        self.fraction_digits = 0;
    }

    /// 单步状态转移
    fn step(&mut self, raw: char) -> Result<Step, LexerError> {
        let c = raw.to_ascii_lowercase();

        match self.state {
            LexerState::Start => self.step_start(raw, c),

            LexerState::InComment => {
                if c == '}' {
                    self.state = LexerState::Start;
                }
                Ok(Step::Consume)
            }

            LexerState::InNumber => {
                if let Some(d) = c.to_digit(10) {
                    self.push_integer_digit(c, d);
                    Ok(Step::Consume)
                } else if c == '.' {
                    self.period_position = self.position;
                    self.text.push('.');
                    self.state = LexerState::InFraction;
                    Ok(Step::Consume)
                } else {
                    self.close_number()?;
                    Ok(self.back_to_start())
                }
            }

            LexerState::InFraction => {
                if c.is_ascii_digit() {
                    self.text.push(c);
                    self.digits += 1;
                    self.fraction_digits += 1;
                    Ok(Step::Consume)
                } else {
                    self.close_number()?;
                    Ok(self.back_to_start())
                }
            }

            LexerState::InIdentifier => {
                if c.is_ascii_alphanumeric() {
                    self.text.push(c);
                    Ok(Step::Consume)
                } else {
                    self.close_identifier()?;
                    Ok(Step::Reprocess)
                }
            }

            LexerState::InAssignBegin => {
                if c == '=' {
                    self.state = LexerState::CompleteAssign;
                    Ok(Step::Consume)
                } else {
                    Err(LexerError::at(LexErrorKind::LoneColon, self.token_start))
                }
            }

            LexerState::InGreater => {
                if c == '=' {
                    self.state = LexerState::CompleteGreaterEqual;
                    Ok(Step::Consume)
                } else {
                    self.emit_symbol(">");
                    Ok(self.back_to_start())
                }
            }

            LexerState::InLess => match c {
                '=' => {
                    self.state = LexerState::CompleteLessEqual;
                    Ok(Step::Consume)
                }
                '>' => {
                    self.state = LexerState::CompleteNotEqual;
                    Ok(Step::Consume)
                }
                _ => {
                    self.emit_symbol("<");
                    Ok(self.back_to_start())
                }
            },

            LexerState::CompleteAssign
            | LexerState::CompleteGreaterEqual
            | LexerState::CompleteLessEqual
            | LexerState::CompleteNotEqual => {
                self.emit_completed();
                Ok(self.back_to_start())
            }

            LexerState::AfterEnd => {
                self.state = LexerState::Start;
                if c == '.' {
                    self.token_start = self.position;
                    self.emit_symbol(".");
                    Ok(Step::Consume)
                } else {
                    Ok(Step::Reprocess)
                }
            }
        }
    }

    fn step_start(&mut self, raw: char, c: char) -> Result<Step, LexerError> {
        self.token_start = self.position;

        match c {
            ' ' | '\t' | '\r' | '\n' => {}
            '{' => self.state = LexerState::InComment,
            '0'..='9' => {
                self.clear_accumulators();
                self.push_integer_digit(c, c as u32 - '0' as u32);
                self.state = LexerState::InNumber;
            }
            c if c.is_ascii_alphabetic() => {
                self.clear_accumulators();
                self.text.push(c);
                self.state = LexerState::InIdentifier;
            }
            ':' => self.state = LexerState::InAssignBegin,
            '>' => self.state = LexerState::InGreater,
            '<' => self.state = LexerState::InLess,
            '+' | '-' | '*' | '/' | '#' | '=' | '(' | ')' | ',' | ';' | '.' => {
                let mut buf = [0u8; 4];
                self.emit_symbol(c.encode_utf8(&mut buf));
            }
            _ => {
                return Err(LexerError::at(
                    LexErrorKind::IllegalCharacter(raw),
                    self.position,
                ))
            }
        }
        Ok(Step::Consume)
    }

    /// 输入结束：收尾仍处于中途的词素
    fn finish(&mut self) -> Result<(), LexerError> {
        match self.state {
            LexerState::Start | LexerState::AfterEnd => {}
            LexerState::InComment => {
                return Err(LexerError::at(
                    LexErrorKind::UnterminatedComment,
                    self.token_start,
                ))
            }
            LexerState::InNumber | LexerState::InFraction => self.close_number()?,
            LexerState::InIdentifier => self.close_identifier()?,
            LexerState::InAssignBegin => {
                return Err(LexerError::at(LexErrorKind::LoneColon, self.token_start))
            }
            LexerState::InGreater => self.emit_symbol(">"),
            LexerState::InLess => self.emit_symbol("<"),
            LexerState::CompleteAssign
            | LexerState::CompleteGreaterEqual
            | LexerState::CompleteLessEqual
            | LexerState::CompleteNotEqual => self.emit_completed(),
        }
        self.state = LexerState::Start;
        Ok(())
    }

    fn back_to_start(&mut self) -> Step {
        self.state = LexerState::Start;
        Step::Reprocess
    }

    fn push_integer_digit(&mut self, c: char, d: u32) {
        self.text.push(c);
        match self
            .int_value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
        {
            Some(v) => self.int_value = v,
            None => self.overflowed = true,
        }
        self.digits += 1;
    }

    fn number_too_long(&self) -> LexerError {
        LexerError::at(
            LexErrorKind::NumberTooLong(self.text.clone()),
            self.token_start,
        )
    }

    /// 整数值超出 u64 时同样视为数字过长
    fn close_number(&mut self) -> Result<(), LexerError> {
        if self.digits > self.config.max_number_digits {
            return Err(self.number_too_long());
        }

        if self.state == LexerState::InFraction && self.fraction_digits > 0 {
            let value: f64 = self.text.parse().map_err(|_| self.number_too_long())?;
            let token = Token::number(self.text.as_str(), self.token_start, Literal::Real(value));
            self.push(token);
        } else {
            if self.overflowed {
                return Err(self.number_too_long());
            }
            let token = Token::number(
                self.int_value.to_string(),
                self.token_start,
                Literal::Integer(self.int_value),
            );
            self.push(token);

            // `3.` 之后没有小数位：小数点本身就是句点
            if self.state == LexerState::InFraction {
                self.push(Token::new(TokenKind::Period, ".", self.period_position));
            }
        }
        Ok(())
    }

    /// 识别完标识符：查关键字表；`end` 之后转入 AfterEnd
    fn close_identifier(&mut self) -> Result<(), LexerError> {
        let len = self.text.chars().count();
        if len > self.config.max_identifier_len {
            return Err(LexerError::at(
                LexErrorKind::IdentifierTooLong(self.text.clone()),
                self.token_start,
            ));
        }

        let kind = match lookup_keyword(&self.text) {
            Some(kind) => {
                debug!(target: "pl0::lexer", keyword = %self.text, "Matched keyword");
                kind
            }
            None => TokenKind::Ident,
        };
        let token = Token::new(kind, self.text.as_str(), self.token_start);
        self.push(token);

        self.state = if kind == TokenKind::End {
            LexerState::AfterEnd
        } else {
            LexerState::Start
        };
        Ok(())
    }

    fn emit_completed(&mut self) {
        let text = match self.state {
            LexerState::CompleteAssign => ":=",
            LexerState::CompleteGreaterEqual => ">=",
            LexerState::CompleteLessEqual => "<=",
            _ => "<>",
        };
        self.emit_symbol(text);
    }

    fn emit_symbol(&mut self, text: &str) {
        // 运算符与界符表是固定的，Start 状态只会把表内的符号送到这里
        if let Some(kind) = lookup_symbol(text) {
            let token = Token::new(kind, text, self.token_start);
            self.push(token);
        }
    }

    fn push(&mut self, token: Token) {
        trace!(
            target: "pl0::lexer",
            kind = %token.kind(),
            lexeme = token.lexeme(),
            line = token.position().line,
            column = token.position().column,
            "Produced token"
        );
        self.tokens.push(token);
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(LexerConfig::default())
    }
}

/// 使用给定配置对源文本做词法分析
pub fn tokenize(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexerError> {
    Lexer::new(config.clone()).tokenize(source)
}
