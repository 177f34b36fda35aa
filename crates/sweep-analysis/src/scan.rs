//! The backward scan that classifies whitespace runs.

use sweep_syntax::{Token, Trivia, TriviaKind};
use text_size::TextRange;

use crate::comment::CommentLines;

/// Collects every trailing-whitespace span in the token's trivia, ascending
/// by offset.
pub fn scan_token(token: &Token) -> Vec<TextRange> {
    let mut spans = Vec::new();
    scan_trivia(&token.leading, token.is_eof(), &mut |span| spans.push(span));
    scan_trivia(&token.trailing, token.is_eof(), &mut |span| spans.push(span));
    spans.sort_by_key(|span| span.start());
    spans
}

/// Walks one trivia list backward, reporting each offending span.
///
/// `at_boundary` records whether everything between the current piece and the
/// next line terminator (or, on the end-of-file token, the end of the file)
/// is whitespace. A whitespace run seen at a boundary has no visible effect.
/// Comments clear the flag: indentation in front of a comment is ordinary
/// formatting, while whitespace at the end of the comment's own lines is
/// flagged independently of the flag. Unknown trivia kinds also clear the
/// flag, so unexpected input under-reports instead of failing.
///
/// The rewriter replays these exact spans; this function is the only place
/// that classifies.
pub(crate) fn scan_trivia(list: &[Trivia], is_eof: bool, report: &mut dyn FnMut(TextRange)) {
    let mut at_boundary = is_eof;

    for piece in list.iter().rev() {
        match piece.kind {
            TriviaKind::Newline => at_boundary = true,
            TriviaKind::Whitespace => {
                if at_boundary {
                    report(piece.range);
                }
            }
            TriviaKind::SingleLineComment | TriviaKind::MultiLineComment => {
                for line in CommentLines::new(&piece.text, piece.range.start()) {
                    let span = line.trailing_ws_range();
                    if !span.is_empty() {
                        report(span);
                    }
                }
                at_boundary = false;
            }
            TriviaKind::Other => at_boundary = false,
        }
    }
}
