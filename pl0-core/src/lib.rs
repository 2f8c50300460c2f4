//! PL/0 Core - Front end of the PL/0 translator (pure logic, no IO)
//!
//! Contains the DFA lexer, the `(kind,lexeme)` token file codec and the
//! LL(1) recursive-descent recognizer.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod compiler;
pub mod kit;

// Re-export common types
pub use compiler::lexer::{tokenize, Lexer, LexerError, LexErrorKind, Token, TokenKind};
pub use compiler::parser::{recognize, ParseTrace, Parser, ParserError, ParserErrorKind, Tok};
pub use compiler::token_file::{read_tokens, write_tokens, RawToken, TokenFileError};
pub use kit::position::SourcePosition;

// Re-export config types from pl0-config
pub use pl0_config::{LexerConfig, ParserConfig, Phase};
