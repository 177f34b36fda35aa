use text_size::TextRange;

use crate::Trivia;

/// Token classification, deliberately coarse.
///
/// A whitespace checker only needs to know where token text sits between
/// trivia runs and which token closes the file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Word,
    Punct,
    Eof,
}

/// A token with its leading and trailing trivia.
///
/// Tokens are immutable; the rewriter produces new values instead of
/// mutating in place.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub leading: Vec<Trivia>,
    pub kind: TokenKind,
    pub text: String,
    pub range: TextRange,
    pub trailing: Vec<Trivia>,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Total source length covered by the token and its trivia.
    pub fn full_len(&self) -> usize {
        let trivia_len =
            |list: &[Trivia]| list.iter().map(|piece| piece.text.len()).sum::<usize>();
        trivia_len(&self.leading) + self.text.len() + trivia_len(&self.trailing)
    }

    /// Writes the token back out exactly as it appeared in source.
    pub fn write_into(&self, out: &mut String) {
        for piece in &self.leading {
            out.push_str(&piece.text);
        }
        out.push_str(&self.text);
        for piece in &self.trailing {
            out.push_str(&piece.text);
        }
    }
}
