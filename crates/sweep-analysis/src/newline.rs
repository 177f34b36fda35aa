//! Line terminator recognition.

/// Length in bytes of the terminator starting at `at`, or 0 if none does.
///
/// `\r\n` counts as a single two-byte unit so that callers never treat the
/// `\n` as a second, empty line. All terminator bytes are ASCII, so byte
/// indexing is safe in UTF-8 text.
pub fn terminator_len(text: &str, at: usize) -> usize {
    match text.as_bytes().get(at) {
        Some(b'\n') => 1,
        Some(b'\r') => {
            if text.as_bytes().get(at + 1) == Some(&b'\n') {
                2
            } else {
                1
            }
        }
        _ => 0,
    }
}
