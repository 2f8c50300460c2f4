//! 语法分析使用的终结符枚举
//!
//! 是 `TokenKind` 在文法上的投影，外加一个合成的结束标记 `End`。

use crate::compiler::lexer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tok {
    // 关键字
    Begin,
    EndKw,
    Const,
    Var,
    Procedure,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    Odd,
    Read,
    Write,
    // 标识符 / 常数
    Ident,
    Number,
    // 运算符与界符
    Plus,
    Minus,
    Times,
    Slash,
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,
    Becomes,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Period,
    /// 合成的输入结束标记
    End,
}

impl Tok {
    /// 按记号文件中的种类名映射；未知种类映射为 `End`
    pub fn from_name(name: &str) -> Tok {
        TokenKind::from_name(name).map(Tok::from).unwrap_or(Tok::End)
    }

    /// 诊断信息中使用的可读描述
    pub fn describe(self) -> &'static str {
        match self {
            Tok::Begin => "'begin'",
            Tok::EndKw => "'end'",
            Tok::Const => "'const'",
            Tok::Var => "'var'",
            Tok::Procedure => "'procedure'",
            Tok::Call => "'call'",
            Tok::If => "'if'",
            Tok::Then => "'then'",
            Tok::Else => "'else'",
            Tok::While => "'while'",
            Tok::Do => "'do'",
            Tok::Odd => "'odd'",
            Tok::Read => "'read'",
            Tok::Write => "'write'",
            Tok::Ident => "identifier",
            Tok::Number => "number",
            Tok::Plus => "'+'",
            Tok::Minus => "'-'",
            Tok::Times => "'*'",
            Tok::Slash => "'/'",
            Tok::Eql => "'='",
            Tok::Neq => "'<>'",
            Tok::Lss => "'<'",
            Tok::Leq => "'<='",
            Tok::Gtr => "'>'",
            Tok::Geq => "'>='",
            Tok::Becomes => "':='",
            Tok::LParen => "'('",
            Tok::RParen => "')'",
            Tok::Comma => "','",
            Tok::Semicolon => "';'",
            Tok::Period => "'.'",
            Tok::End => "<EOF>",
        }
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Tok::Eql | Tok::Neq | Tok::Lss | Tok::Leq | Tok::Gtr | Tok::Geq
        )
    }

    /// 能否作为表达式的开头
    pub fn starts_expression(self) -> bool {
        matches!(
            self,
            Tok::Plus | Tok::Minus | Tok::Ident | Tok::Number | Tok::LParen
        )
    }
}

impl From<TokenKind> for Tok {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Begin => Tok::Begin,
            TokenKind::End => Tok::EndKw,
            TokenKind::Const => Tok::Const,
            TokenKind::Var => Tok::Var,
            TokenKind::Procedure => Tok::Procedure,
            TokenKind::Call => Tok::Call,
            TokenKind::If => Tok::If,
            TokenKind::Then => Tok::Then,
            TokenKind::Else => Tok::Else,
            TokenKind::While => Tok::While,
            TokenKind::Do => Tok::Do,
            TokenKind::Odd => Tok::Odd,
            TokenKind::Read => Tok::Read,
            TokenKind::Write => Tok::Write,
            TokenKind::Ident => Tok::Ident,
            TokenKind::Number => Tok::Number,
            TokenKind::Plus => Tok::Plus,
            TokenKind::Minus => Tok::Minus,
            TokenKind::Times => Tok::Times,
            TokenKind::Slash => Tok::Slash,
            TokenKind::Eql => Tok::Eql,
            TokenKind::Neq => Tok::Neq,
            TokenKind::Lss => Tok::Lss,
            TokenKind::Leq => Tok::Leq,
            TokenKind::Gtr => Tok::Gtr,
            TokenKind::Geq => Tok::Geq,
            TokenKind::Becomes => Tok::Becomes,
            TokenKind::LParen => Tok::LParen,
            TokenKind::RParen => Tok::RParen,
            TokenKind::Comma => Tok::Comma,
            TokenKind::Semicolon => Tok::Semicolon,
            TokenKind::Period => Tok::Period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Tok::from_name("beginsym"), Tok::Begin);
        assert_eq!(Tok::from_name("endsym"), Tok::EndKw);
        assert_eq!(Tok::from_name("neq"), Tok::Neq);
        assert_eq!(Tok::from_name("period"), Tok::Period);
    }

    #[test]
    fn test_unknown_name_maps_to_end() {
        assert_eq!(Tok::from_name("stringsym"), Tok::End);
        assert_eq!(Tok::from_name(""), Tok::End);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Tok::Period.describe(), "'.'");
        assert_eq!(Tok::Ident.describe(), "identifier");
        assert_eq!(Tok::End.describe(), "<EOF>");
    }

    #[test]
    fn test_relational() {
        assert!(Tok::Leq.is_relational());
        assert!(!Tok::Becomes.is_relational());
    }
}
