//! Tokens and the trivia attached to them.
//!
//! Everything the checker looks at lives in trivia: whitespace runs, line
//! terminators, and comments. Token text is opaque; only its position and the
//! end-of-file marker matter.

mod token;
mod trivia;

pub use token::{Token, TokenKind};
pub use trivia::{Trivia, TriviaKind, is_horizontal_whitespace};
