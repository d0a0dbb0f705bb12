//! Hygiene: source-level budgets for the landing crate.
//!
//! Scans production files under `src/` for panicking calls and silent error
//! discards. Browser glue drops DOM results on purpose, so those two budgets
//! are non-zero; budgets only ever shrink.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: name, content });
        }
    }
}

fn assert_budget(pattern: &str, max: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= max, "`{pattern}` budget exceeded: found {found}, max {max}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn no_unwrap() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn no_expect() {
    assert_budget(".expect(", 0);
}

#[test]
fn no_panics() {
    assert_budget("panic!(", 0);
    assert_budget("unreachable!(", 0);
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

#[test]
fn no_dead_code_allowances() {
    assert_budget("#[allow(dead_code)]", 0);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 12);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 12);
}
