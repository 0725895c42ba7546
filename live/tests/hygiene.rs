//! Hygiene: source-level budgets for the live crate.
//!
//! Production files under `src/` (everything except `*_test.rs`) are scanned
//! line by line for patterns that crash the page or swallow errors. Budgets
//! only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    // Panics. In the browser these take down the whole surface.
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

fn sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    files
}

#[test]
fn sources_are_found() {
    let files = sources();
    assert!(files.iter().any(|(path, _)| path.ends_with("engine.rs")));
    assert!(files.iter().all(|(path, _)| !path.ends_with("_test.rs")));
}

#[test]
fn budgets_hold() {
    let files = sources();
    let mut report = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget.max {
            report.push(format!("{:?}: found {count}, max {}", budget.pattern, budget.max));
            report.extend(found.iter().map(|(path, n)| format!("  {path}: {n}")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
