//! Lexes source text into tokens with attached trivia.
//!
//! The grammar is deliberately shallow: token text is split into words and
//! single punctuation characters, because the checker only cares about the
//! trivia between tokens. What matters here is the trivia contract:
//!
//! - a `Whitespace` run is maximal and never contains a line terminator;
//! - a `Newline` is exactly one terminator unit, with `\r\n` as one piece;
//! - `//` comments stop before the terminator; `/* */` comments include the
//!   closing delimiter and may embed terminators.
//!
//! Trivia between two tokens splits at the first newline inclusive: up to and
//! including it belongs to the earlier token's trailing list, the rest to the
//! later token's leading list. Whatever follows the last terminator in the
//! file, or everything after the last token when no terminator follows it,
//! becomes leading trivia of the end-of-file token. The checker relies on
//! this to treat end-of-file as a line boundary.
//!
//! String and character literals are not recognized; comment delimiters
//! inside them are lexed as comments.

mod cursor;

use cursor::{Cursor, EOF_CHAR};
pub use sweep_syntax::{Token, TokenKind, Trivia, TriviaKind};
use sweep_syntax::is_horizontal_whitespace;
use text_size::{TextRange, TextSize};

/// Lexes a whole file. The returned list always ends with the `Eof` token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(text);
    let mut tokens = Vec::new();
    let mut run: Vec<Trivia> = Vec::new();

    while !cursor.is_eof() {
        let start = cursor.offset();
        match piece_kind(&mut cursor) {
            Piece::Trivia(kind) => {
                let range = TextRange::new(start, cursor.offset());
                run.push(Trivia::new(kind, &text[range], range));
            }
            Piece::Token(kind) => {
                let range = TextRange::new(start, cursor.offset());
                let leading = take_leading(&mut tokens, &mut run, false);
                tokens.push(Token {
                    leading,
                    kind,
                    text: text[range].to_string(),
                    range,
                    trailing: Vec::new(),
                });
            }
        }
    }

    let leading = take_leading(&mut tokens, &mut run, true);
    tokens.push(Token {
        leading,
        kind: TokenKind::Eof,
        text: String::new(),
        range: TextRange::empty(TextSize::new(text.len() as u32)),
        trailing: Vec::new(),
    });
    tokens
}

enum Piece {
    Trivia(TriviaKind),
    Token(TokenKind),
}

fn piece_kind(cursor: &mut Cursor<'_>) -> Piece {
    match cursor.peek() {
        '\r' => {
            cursor.advance();
            if cursor.peek() == '\n' {
                cursor.advance();
            }
            Piece::Trivia(TriviaKind::Newline)
        }
        '\n' => {
            cursor.advance();
            Piece::Trivia(TriviaKind::Newline)
        }
        '/' if cursor.second() == '/' => {
            cursor.advance_while(|ch| !matches!(ch, '\n' | '\r'));
            Piece::Trivia(TriviaKind::SingleLineComment)
        }
        '/' if cursor.second() == '*' => {
            cursor.advance();
            cursor.advance();
            loop {
                match cursor.peek() {
                    EOF_CHAR if cursor.is_eof() => break,
                    '*' if cursor.second() == '/' => {
                        cursor.advance();
                        cursor.advance();
                        break;
                    }
                    _ => {
                        cursor.advance();
                    }
                }
            }
            Piece::Trivia(TriviaKind::MultiLineComment)
        }
        first_char if is_horizontal_whitespace(first_char) => {
            cursor.advance_while(is_horizontal_whitespace);
            Piece::Trivia(TriviaKind::Whitespace)
        }
        'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => {
            cursor.advance_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
            Piece::Token(TokenKind::Word)
        }
        _ => {
            cursor.advance();
            Piece::Token(TokenKind::Punct)
        }
    }
}

/// Splits the accumulated trivia run between the previous token's trailing
/// list and the next token's leading list.
fn take_leading(
    tokens: &mut Vec<Token>,
    run: &mut Vec<Trivia>,
    next_is_eof: bool,
) -> Vec<Trivia> {
    let Some(previous) = tokens.last_mut() else {
        return std::mem::take(run);
    };

    let split = match run.iter().position(|piece| piece.kind == TriviaKind::Newline) {
        Some(newline) => newline + 1,
        // No terminator before end of file: the run belongs to the EOF token
        // so it is scanned with the end-of-file boundary in effect.
        None if next_is_eof => 0,
        None => run.len(),
    };

    let rest = run.split_off(split);
    previous.trailing = std::mem::take(run);
    rest
}
