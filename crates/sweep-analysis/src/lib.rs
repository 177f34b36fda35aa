//! Trailing-whitespace detection and removal over token trivia.
//!
//! The scanner walks a token's trivia lists backward and decides, run by run,
//! whether a span of horizontal whitespace precedes nothing but a line
//! terminator or the end of the file. The rewriter deletes exactly those
//! spans, including per-line trailing runs inside comment bodies, and leaves
//! every other byte alone.

pub mod comment;
pub mod newline;
mod rewrite;
mod scan;

pub use rewrite::{fix, strip_token};
pub use scan::scan_token;
use sweep_errors::Severity;

/// Static metadata for a check. No registration machinery; rules are plain
/// constants.
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    pub severity: Severity,
}

/// The one rule this crate implements. `id` and `message` are a stable
/// contract; other tools match on them.
pub const TRAILING_WHITESPACE: Rule = Rule {
    id: "TrailingWhitespace",
    message: "trailing whitespace should be removed",
    severity: Severity::Warning,
};
