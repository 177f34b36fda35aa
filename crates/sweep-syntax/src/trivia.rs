//! Trivia pieces attached to tokens.

use text_size::TextRange;

/// Kinds of trivia stored alongside tokens.
///
/// `Other` is the catch-all for anything a future lexer may attach that the
/// checker does not understand; it is treated as opaque content.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaKind {
    Whitespace,
    Newline,
    SingleLineComment,
    MultiLineComment,
    Other,
}

/// A trivia fragment with its kind, verbatim text, and position in the file.
///
/// Invariants upheld by the tokenizer: a `Whitespace` run never contains a
/// line terminator, a `Newline` is exactly one terminator unit (`\r`, `\n`,
/// or `\r\n`), and `text.len() == range.len()`. Comment text may embed
/// terminators.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub range: TextRange,
}

impl Trivia {
    /// Creates a new trivia piece with the given kind, text, and range.
    pub fn new(kind: TriviaKind, text: impl Into<String>, range: TextRange) -> Self {
        let text = text.into();
        debug_assert_eq!(text.len(), usize::from(range.len()));
        Self { kind, text, range }
    }
}

/// Whitespace that does not terminate a line.
pub fn is_horizontal_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\n' | '\r')
}
