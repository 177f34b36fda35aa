//! Splits a comment body into lines, tracking each line's trailing run.

use sweep_syntax::is_horizontal_whitespace;
use text_size::{TextRange, TextSize};

use crate::newline::terminator_len;

/// One line of a comment, in file coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommentLine {
    /// File offset where the line's content starts.
    pub start: TextSize,
    /// Content length, terminator excluded.
    pub content_len: TextSize,
    /// Length of the horizontal-whitespace run at the end of the content.
    pub trailing_ws_len: TextSize,
    /// Length of the terminator that closes the line; 0 for the final
    /// segment.
    pub terminator_len: TextSize,
}

impl CommentLine {
    /// The span of the line's trailing whitespace run; empty when the line
    /// has none.
    pub fn trailing_ws_range(&self) -> TextRange {
        TextRange::at(self.start + self.content_len - self.trailing_ws_len, self.trailing_ws_len)
    }
}

/// Lazy iterator over a comment's lines.
///
/// The text is the verbatim comment, delimiters included; `base` is its file
/// offset. The final segment — after the last terminator, or the whole text
/// when there is none — is always yielded, so a single-line comment produces
/// exactly one line.
pub struct CommentLines<'text> {
    text: &'text str,
    base: TextSize,
    cursor: usize,
    done: bool,
}

impl<'text> CommentLines<'text> {
    pub fn new(text: &'text str, base: TextSize) -> Self {
        Self { text, base, cursor: 0, done: false }
    }
}

impl Iterator for CommentLines<'_> {
    type Item = CommentLine;

    fn next(&mut self) -> Option<CommentLine> {
        if self.done {
            return None;
        }

        let start = self.cursor;
        let mut end = start;
        let mut terminator = terminator_len(self.text, end);
        while end < self.text.len() && terminator == 0 {
            end += 1;
            terminator = terminator_len(self.text, end);
        }

        let content = &self.text[start..end];
        let trailing_ws = content
            .chars()
            .rev()
            .take_while(|&ch| is_horizontal_whitespace(ch))
            .map(char::len_utf8)
            .sum::<usize>();

        self.cursor = end + terminator;
        if terminator == 0 {
            self.done = true;
        }

        Some(CommentLine {
            start: self.base + TextSize::new(start as u32),
            content_len: TextSize::new(content.len() as u32),
            trailing_ws_len: TextSize::new(trailing_ws as u32),
            terminator_len: TextSize::new(terminator as u32),
        })
    }
}
