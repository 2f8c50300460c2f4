//! PL/0 Token 类型定义与固定词法表

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // 关键字
    Begin,
    Call,
    Const,
    Do,
    End,
    If,
    Odd,
    Procedure,
    Read,
    Var,
    While,
    Write,
    Then,
    Else,

    // 标识符 / 常数
    Ident,
    Number,

    // 运算符
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

    // 界符
    LParen,
    RParen,
    Comma,
    Semicolon,
    Period,
}

impl TokenKind {
    /// 记号流文件中使用的种类名（如 `beginsym`、`ident`、`becomes`）
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Begin => "beginsym",
            TokenKind::Call => "callsym",
            TokenKind::Const => "constsym",
            TokenKind::Do => "dosym",
            TokenKind::End => "endsym",
            TokenKind::If => "ifsym",
            TokenKind::Odd => "oddsym",
            TokenKind::Procedure => "proceduresym",
            TokenKind::Read => "readsym",
            TokenKind::Var => "varsym",
            TokenKind::While => "whilesym",
            TokenKind::Write => "writesym",
            TokenKind::Then => "thensym",
            TokenKind::Else => "elsesym",
            TokenKind::Ident => "ident",
            TokenKind::Number => "number",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Times => "times",
            TokenKind::Slash => "slash",
            TokenKind::Eql => "eql",
            TokenKind::Neq => "neq",
            TokenKind::Lss => "lss",
            TokenKind::Leq => "leq",
            TokenKind::Gtr => "gtr",
            TokenKind::Geq => "geq",
            TokenKind::Becomes => "becomes",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Period => "period",
        }
    }

    /// 按种类名反查
    pub fn from_name(name: &str) -> Option<TokenKind> {
        KIND_NAMES.get(name).copied()
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::from_name(s).ok_or_else(|| format!("unknown token kind '{s}'"))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 关键字表（小写）
pub static KEYWORD_TABLE: &[(&str, TokenKind)] = &[
    ("begin", TokenKind::Begin),
    ("call", TokenKind::Call),
    ("const", TokenKind::Const),
    ("do", TokenKind::Do),
    ("end", TokenKind::End),
    ("if", TokenKind::If),
    ("odd", TokenKind::Odd),
    ("procedure", TokenKind::Procedure),
    ("read", TokenKind::Read),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
    ("write", TokenKind::Write),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
];

/// 运算符表，`<>` 与 `#` 同为不等号
pub static OPERATOR_TABLE: &[(&str, TokenKind)] = &[
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("/", TokenKind::Slash),
    ("=", TokenKind::Eql),
    ("<>", TokenKind::Neq),
    ("#", TokenKind::Neq),
    ("<", TokenKind::Lss),
    ("<=", TokenKind::Leq),
    (">", TokenKind::Gtr),
    (">=", TokenKind::Geq),
    (":=", TokenKind::Becomes),
];

/// 界符表
pub static DELIMITER_TABLE: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (".", TokenKind::Period),
];

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORD_TABLE.iter().copied().collect());

static SYMBOLS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    OPERATOR_TABLE
        .iter()
        .chain(DELIMITER_TABLE.iter())
        .copied()
        .collect()
});

static KIND_NAMES: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    KEYWORD_TABLE
        .iter()
        .chain(OPERATOR_TABLE.iter())
        .chain(DELIMITER_TABLE.iter())
        .map(|(_, kind)| *kind)
        .chain([TokenKind::Ident, TokenKind::Number])
        .map(|kind| (kind.name(), kind))
        .collect()
});

/// 查找关键字（大小写不敏感）
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        KEYWORDS.get(word.to_ascii_lowercase().as_str()).copied()
    } else {
        KEYWORDS.get(word).copied()
    }
}

/// 查找运算符或界符
pub fn lookup_symbol(text: &str) -> Option<TokenKind> {
    SYMBOLS.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        assert_eq!(lookup_keyword("begin"), Some(TokenKind::Begin));
        assert_eq!(lookup_keyword("BeGiN"), Some(TokenKind::Begin));
        assert_eq!(lookup_keyword("PROCEDURE"), Some(TokenKind::Procedure));
        assert_eq!(lookup_keyword("begin1"), None);
    }

    #[test]
    fn test_not_equal_spellings_share_kind() {
        assert_eq!(lookup_symbol("<>"), Some(TokenKind::Neq));
        assert_eq!(lookup_symbol("#"), Some(TokenKind::Neq));
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(lookup_symbol(":="), Some(TokenKind::Becomes));
        assert_eq!(lookup_symbol("."), Some(TokenKind::Period));
        assert_eq!(lookup_symbol(":"), None);
    }

    #[test]
    fn test_every_kind_name_round_trips() {
        let kinds = KEYWORD_TABLE
            .iter()
            .chain(OPERATOR_TABLE)
            .chain(DELIMITER_TABLE)
            .map(|(_, k)| *k)
            .chain([TokenKind::Ident, TokenKind::Number]);
        for kind in kinds {
            assert_eq!(TokenKind::from_name(kind.name()), Some(kind), "{kind:?}");
        }
        assert_eq!(TokenKind::from_name("bogus"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("becomes".parse::<TokenKind>(), Ok(TokenKind::Becomes));
        assert!("stringsym".parse::<TokenKind>().is_err());
    }
}
