//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use pl0_core::{read_tokens, write_tokens, Lexer, Parser, ParserError, RawToken, Token};

/// 示例程序
pub const SAMPLE: &str = "const m = 7; var x; begin x := m * 2; write(x) end.";

/// 词法分析，失败时 panic
pub fn lex(code: &str) -> Vec<Token> {
    Lexer::default()
        .tokenize(code)
        .unwrap_or_else(|e| panic!("Lexer error in {code:?}: {e}"))
}

/// 词法分析后写出记号文件
pub fn lex_to_file(code: &str) -> String {
    write_tokens(&lex(code))
}

/// 完整流程：源码 -> 记号文件 -> 识别
pub fn check_via_file(code: &str) -> Result<(), ParserError> {
    let text = lex_to_file(code);
    let raw = read_tokens(&text).unwrap_or_else(|e| panic!("Token file error: {e}"));
    Parser::new(&raw).parse()
}

/// 从 `(kind,lexeme)` 对构造边界记号
pub fn raw(pairs: &[(&str, &str)]) -> Vec<RawToken> {
    pairs.iter().map(|(k, l)| RawToken::new(*k, *l)).collect()
}
