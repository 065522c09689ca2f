//! The app ships one hand-maintained stylesheet. Every class literal used by
//! the UI crates must have a rule in it.
use std::fs;
use std::path::{Path, PathBuf};

fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn stylesheet() -> String {
    fs::read_to_string(crate_dir().join("assets/main.css")).unwrap()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// Static class names from `class: "..."` literals; interpolated parts are skipped.
fn class_literals(source: &str) -> Vec<String> {
    let mut classes = Vec::new();
    let mut rest = source;
    while let Some(start) = rest.find("class: \"") {
        rest = &rest[start + "class: \"".len()..];
        let Some(end) = rest.find('"') else { break };
        classes.extend(
            rest[..end]
                .split_whitespace()
                .filter(|c| !c.contains('{') && !c.contains('}'))
                .map(str::to_string),
        );
        rest = &rest[end..];
    }
    classes
}

fn selector(class: &str) -> String {
    let mut escaped = String::from(".");
    for ch in class.chars() {
        if matches!(ch, ':' | '/' | '[' | ']' | '.') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[test]
fn stylesheet_is_linked_from_the_app() {
    let lib = fs::read_to_string(crate_dir().join("src/lib.rs")).unwrap();
    assert!(lib.contains("asset!(\"/assets/main.css\")"));
    assert!(lib.contains("rel: \"stylesheet\""));
}

#[test]
fn preview_switch_and_colour_modes_have_rules() {
    let css = stylesheet();
    assert!(css.contains(".kitchen-preview { border: 1px dashed"));
    assert!(css.contains(".kitchen-switch[aria-checked=\"true\"]"));
    assert!(css.contains(".kitchen-switch[aria-checked=\"false\"]"));
    assert!(css.contains(".kitchen-harness.light"));
    assert!(css.contains(".kitchen-harness.dark"));
}

#[test]
fn every_class_literal_has_a_rule() {
    let css = stylesheet();
    let mut files = Vec::new();
    rust_sources(&crate_dir().join("../kitchen-ui/src"), &mut files);
    rust_sources(&crate_dir().join("src"), &mut files);

    let mut missing = Vec::new();
    for file in &files {
        for class in class_literals(&fs::read_to_string(file).unwrap()) {
            if !css.contains(&selector(&class)) {
                missing.push(format!("{class} ({})", file.display()));
            }
        }
    }
    missing.sort();
    missing.dedup();
    assert!(missing.is_empty(), "no rule for: {missing:#?}");
}
