use camino::Utf8PathBuf;
use salsa::DatabaseImpl;
use sweep_db::{Diagnostic, File, check_file, fix_file};

struct Reported {
    line: u32,
    col: u32,
    len: u32,
}

fn check(text: &str) -> Vec<Reported> {
    let db = DatabaseImpl::default();
    let file = File::new(&db, Utf8PathBuf::from("test.src"), text.to_string());
    let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

    let line_index = file.line_index(&db);
    diagnostics
        .iter()
        .map(|diagnostic| {
            assert_eq!(diagnostic.code(), "TrailingWhitespace");
            assert_eq!(diagnostic.message(), "trailing whitespace should be removed");
            let pos = line_index.line_col(diagnostic.range().start());
            Reported { line: pos.line + 1, col: pos.col + 1, len: diagnostic.range().len().into() }
        })
        .collect()
}

fn positions(reported: &[Reported]) -> Vec<(u32, u32, u32)> {
    reported.iter().map(|r| (r.line, r.col, r.len)).collect()
}

#[test]
fn reports_line_and_column() {
    let reported = check("foo();   \nbar(); \n");
    assert_eq!(positions(&reported), [(1, 7, 3), (2, 7, 1)]);
}

#[test]
fn clean_file_reports_nothing() {
    assert!(check("foo();\n    bar(); // note\n").is_empty());
}

#[test]
fn comment_violations_point_into_the_comment() {
    let reported = check("/*\n * text   \n */\n");
    assert_eq!(positions(&reported), [(2, 8, 3)]);
}

#[test]
fn diagnostics_are_ordered_by_position() {
    let reported = check("a  \nb\t\n// c \n   ");
    let starts: Vec<_> = reported.iter().map(|r| (r.line, r.col)).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(reported.len(), 4);
}

#[test]
fn fix_file_matches_the_pure_fix() {
    let text = "foo();   \n// tail  \n";
    let db = DatabaseImpl::default();
    let file = File::new(&db, Utf8PathBuf::from("test.src"), text.to_string());

    assert_eq!(fix_file(&db, file), &sweep_analysis::fix(text));
    assert_eq!(fix_file(&db, file).as_str(), "foo();\n// tail\n");
}
