//! PL/0 Lexer
//!
//! 确定性有限自动机（DFA）实现的词法分析器：
//! - 关键字、标识符（大小写不敏感）
//! - 整数与带小数部分的数字
//! - 单字符与双字符运算符、界符
//! - `{ ... }` 注释（不支持嵌套）

pub mod error;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod state;
pub mod token;
pub mod token_kind;

pub use error::{LexErrorKind, LexerError};
pub use lexer::{tokenize, Lexer};
pub use state::LexerState;
pub use token::{Literal, Token};
pub use token_kind::TokenKind;
