//! Hygiene: scans production sources for patterns this crate does not allow.
//!
//! Each pattern has a budget (zero everywhere). Test files (`*_test.rs`) are
//! exempt. Raising a budget requires removing an existing hit first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics crash the page" },
    Budget { pattern: ".expect(", max: 0, why: "panics crash the page" },
    Budget { pattern: "panic!(", max: 0, why: "panics crash the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics crash the page" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "errors must be inspected or logged" },
    Budget { pattern: ".ok()", max: 0, why: "errors must be inspected or logged" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
    Budget { pattern: "inner_html", max: 0, why: "server text must render as text nodes" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
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
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "no sources scanned");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{listing}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
