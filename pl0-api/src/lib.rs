//! PL/0 API - Pipeline orchestration layer
//!
//! Provides the unified front-end interface, including:
//! - Pipeline orchestration (source -> tokens -> token file -> recognizer)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (Pl0Error)
//!
//! Configuration is always passed explicitly; there is no global state.

use pl0_core::{read_tokens, write_tokens, Lexer, Parser, RawToken, Token};
use tracing::{debug, info};

pub mod config;
pub use config::RunConfig;

// Re-export config types from pl0_config
pub use pl0_config::{LexerConfig, LogLevel, LoggingConfig, ParserConfig, Phase, Pl0Config};

pub mod error;
pub mod types;
pub use error::{ErrorDetails, ErrorReport, LexerError, ParserError, Pl0Error, TokenFileError};
pub use types::CheckOutput;

// Re-export core types
pub use pl0_config;
pub use pl0_core::{ParseTrace, SourcePosition, TokenKind};

/// Lex source text into tokens
pub fn tokenize(source: &str, config: &RunConfig) -> Result<Vec<Token>, Pl0Error> {
    info!(target: "pl0::api", chars = source.len(), "Starting lexical analysis");
    let tokens = Lexer::new(config.lexer.clone()).tokenize(source)?;
    info!(target: "pl0::api", count = tokens.len(), "Lexical analysis completed");
    Ok(tokens)
}

/// Lex source text and render the `(kind,lexeme)` token file
pub fn export_tokens(source: &str, config: &RunConfig) -> Result<String, Pl0Error> {
    let tokens = tokenize(source, config)?;
    Ok(write_tokens(&tokens))
}

/// Recognize boundary tokens (e.g. read from a token file)
pub fn check_tokens(tokens: &[RawToken], config: &RunConfig) -> Result<CheckOutput, Pl0Error> {
    let parser = Parser::new(tokens);
    run_parser(parser, tokens.len(), config)
}

/// Read a token file and recognize it
pub fn check_token_text(text: &str, config: &RunConfig) -> Result<CheckOutput, Pl0Error> {
    let tokens = read_tokens(text)?;
    debug!(target: "pl0::api", count = tokens.len(), "Token file read");
    check_tokens(&tokens, config)
}

/// Full pipeline: lex, then recognize
///
/// Tokens keep their source positions, so syntax errors carry line/column.
pub fn check_source(source: &str, config: &RunConfig) -> Result<CheckOutput, Pl0Error> {
    let tokens = tokenize(source, config)?;
    let parser = Parser::from_tokens(&tokens);
    run_parser(parser, tokens.len(), config)
}

fn run_parser(
    mut parser: Parser,
    token_count: usize,
    config: &RunConfig,
) -> Result<CheckOutput, Pl0Error> {
    if config.parser.trace {
        parser = parser.with_trace();
    }

    info!(target: "pl0::api", token_count, "Starting syntax analysis");
    parser.parse()?;
    info!(target: "pl0::api", "Syntax analysis completed");

    Ok(CheckOutput {
        token_count,
        trace: parser.take_trace(),
    })
}
