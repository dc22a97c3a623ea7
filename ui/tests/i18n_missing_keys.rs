use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Translation completeness checks.
///
/// - Every non‑fallback locale provides *at least* the keys present in the
///   fallback (zh-TW) `phm-ui.ftl`, and no file defines a key twice.
/// - Every key looked up through `fl!(...)` in `src/` exists in the fallback.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/phm-ui.ftl`
/// 2. Copy all keys from `zh-TW/phm-ui.ftl`
/// 3. Register it in `LOCALES` below and run `cargo test -p phm-ui`.
const ZH_TW: &str = include_str!("../i18n/zh-TW/phm-ui.ftl");
const EN_US: &str = include_str!("../i18n/en-US/phm-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("en-US", EN_US),
    // Add new locales here.
];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(ZH_TW);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (zh-TW) contains no keys."
    );
    assert_no_dup_keys(ZH_TW, "zh-TW");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from zh-TW, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_keys_from_source(&src_root);
    assert!(
        !referenced.is_empty(),
        "No fl! lookups found under {src_root:?}; did the scanner break?"
    );

    let fallback_keys = extract_keys(ZH_TW);
    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in Rust sources: {}", unused.join(", "));
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).collect()
}

fn message_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    (!key.is_empty() && key.chars().all(valid_key_char)).then(|| key.to_string())
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for key in src.lines().filter_map(message_key) {
        if !seen.insert(key.clone()) {
            dups.insert(key);
        }
    }
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

/// Collect the first string literal after every `fl!(` in `src_root`.
fn extract_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("fl!(") {
            rest = &rest[pos + 4..];
            let Some(open) = rest.find('"') else { break };
            let after = &rest[open + 1..];
            let Some(close) = after.find('"') else { break };
            let key = &after[..close];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &after[close + 1..];
        }
    }

    found
}
