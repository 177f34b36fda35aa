//! Salsa plumbing: files as inputs, checking and fixing as tracked queries.
//!
//! Each file's diagnostics and fixed text depend only on its own text, so
//! files are independent units of recomputation.

pub use line_index::LineIndex;
use salsa::{Accumulator, Database};
use sweep_analysis::TRAILING_WHITESPACE;
pub use sweep_errors::Diagnostic;
use sweep_syntax::Token;

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }

    #[salsa::tracked(returns(ref), no_eq)]
    pub fn tokens(self, db: &dyn Database) -> Vec<Token> {
        sweep_tokenizer::tokenize(self.text(db))
    }
}

/// Scans every token in document order and accumulates one diagnostic per
/// offending span. Tokens are emitted in source order, so the accumulated
/// diagnostics are ordered by position.
#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    for token in file.tokens(db) {
        for range in sweep_analysis::scan_token(token) {
            Diagnostic::warning(TRAILING_WHITESPACE.id, TRAILING_WHITESPACE.message, range)
                .accumulate(db);
        }
    }
}

/// The file's text with all trailing whitespace removed.
#[salsa::tracked(returns(ref))]
pub fn fix_file(db: &dyn Database, file: File) -> String {
    sweep_analysis::fix(file.text(db))
}
