//! Hygiene: enforces coding standards at test time
//!
//! Scans the crate's production sources for patterns that would crash the
//! page or drop failures on the floor. Each pattern has a budget (zero). The
//! budget never grows: to add one, remove another first.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics abort the page script"),
    (".expect(", 0, "panics abort the page script"),
    ("panic!(", 0, "panics abort the page script"),
    ("unreachable!(", 0, "panics abort the page script"),
    ("todo!(", 0, "stubs must not ship"),
    ("unimplemented!(", 0, "stubs must not ship"),
    ("let _ =", 0, "discards a result without looking at it"),
    (".ok()", 0, "discards an error without looking at it"),
    ("#[allow(dead_code)]", 0, "dead code should be deleted"),
    ("println!(", 0, "use the log facade"),
    ("eprintln!(", 0, "use the log facade"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "scanner found no sources");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in RULES {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{listing}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
