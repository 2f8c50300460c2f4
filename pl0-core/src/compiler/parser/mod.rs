pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod tok;
pub mod trace;

pub use error::{ErrorLocation, ParseResult, ParserError, ParserErrorKind};
pub use parser::{recognize, Parser};
pub use tok::Tok;
pub use trace::{ParseTrace, TraceLine};
