//! Deletes the spans the scanner reports.

use sweep_syntax::{Token, Trivia, TriviaKind};
use sweep_tokenizer::tokenize;
use text_size::{TextRange, TextSize};

use crate::scan::scan_trivia;

/// Returns a token with every trailing-whitespace span removed from its
/// trivia.
///
/// The decisions come from the scanner; this function only replays them, so
/// the diagnostic and fix paths cannot disagree. A flagged whitespace run is
/// dropped from the list outright; a flagged comment is rebuilt with each
/// line's trailing run removed and its terminator bytes kept verbatim.
///
/// Edited trivia keep their original start offset as a source anchor; their
/// lengths reflect the new text. Reassembly goes through the texts alone.
pub fn strip_token(token: &Token) -> Token {
    Token {
        leading: strip_trivia(&token.leading, token.is_eof()),
        kind: token.kind,
        text: token.text.clone(),
        range: token.range,
        trailing: strip_trivia(&token.trailing, token.is_eof()),
    }
}

/// Removes trailing whitespace from a whole file and reassembles it.
///
/// Idempotent, and touches only the characters inside reported spans.
pub fn fix(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        strip_token(&token).write_into(&mut out);
    }
    out
}

fn strip_trivia(list: &[Trivia], is_eof: bool) -> Vec<Trivia> {
    let mut spans = Vec::new();
    scan_trivia(list, is_eof, &mut |span| spans.push(span));
    if spans.is_empty() {
        return list.to_vec();
    }
    spans.sort_by_key(|span| span.start());

    let mut out = Vec::with_capacity(list.len());
    for piece in list {
        // Every span is a sub-range of exactly one trivia piece.
        let hits: Vec<TextRange> =
            spans.iter().copied().filter(|span| piece.range.contains_range(*span)).collect();

        if hits.is_empty() {
            out.push(piece.clone());
        } else if piece.kind == TriviaKind::Whitespace {
            // The whole run is the violation; the entry disappears.
            debug_assert_eq!(hits, [piece.range]);
        } else {
            out.push(strip_comment(piece, &hits));
        }
    }
    out
}

fn strip_comment(piece: &Trivia, hits: &[TextRange]) -> Trivia {
    let base = piece.range.start();
    let mut text = String::with_capacity(piece.text.len());
    let mut cursor = 0;

    for hit in hits {
        let start = usize::from(hit.start() - base);
        text.push_str(&piece.text[cursor..start]);
        cursor = usize::from(hit.end() - base);
    }
    text.push_str(&piece.text[cursor..]);

    let range = TextRange::at(base, TextSize::new(text.len() as u32));
    Trivia { kind: piece.kind, text, range }
}
