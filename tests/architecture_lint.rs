//! Architecture enforcement lint - keeps browser bindings out of the core.
//!
//! The controller, the pure transitions and the capability traits must stay
//! testable natively. Only the browser adapters may name `web_sys` or
//! `wasm_bindgen`, and those are compiled for wasm32 only.
//!
//! This test scans every source file and flags browser bindings outside the
//! adapter files.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Patterns that indicate direct browser coupling
const DISALLOWED_PATTERNS: &[(&str, &str)] = &[
    (
        "web_sys::",
        "Go through PreferenceStore / MarkerTarget / ToggleControl instead",
    ),
    (
        "wasm_bindgen",
        "Event wiring belongs in src/web.rs",
    ),
];

/// Browser adapters (all behind cfg(target_arch = "wasm32"))
const ALLOWED_FILES: &[&str] = &[
    "src/web.rs",
    "src/dom/web.rs",
    "src/store/local_storage.rs",
    // Client-only helpers, each gated with cfg(target_arch = "wasm32")
    "src/app/theme.rs",
];

fn relative(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
        .replace('\\', "/")
}

fn analyze_file(path: &Path) -> Vec<(String, String, String)> {
    let path_str = relative(path);

    if ALLOWED_FILES.contains(&path_str.as_str()) {
        return vec![];
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();

    for (pattern, suggestion) in DISALLOWED_PATTERNS {
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") {
                continue;
            }
            if line.contains(pattern) {
                violations.push((
                    format!("{}:{}", path_str, idx + 1),
                    (*pattern).to_string(),
                    (*suggestion).to_string(),
                ));
            }
        }
    }

    violations
}

#[test]
fn core_must_not_touch_browser_bindings() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from("\n\nBrowser bindings found outside the adapter files:\n\n");
        for (location, pattern, suggestion) in &all_violations {
            error_msg.push_str(&format!("  {} uses `{}`\n    -> {}\n", location, pattern, suggestion));
        }
        panic!("{}", error_msg);
    }
}

/// Adapter modules must only be compiled for the browser.
#[test]
fn adapter_modules_are_wasm_gated() {
    let gated = [
        ("src/lib.rs", "pub mod web;"),
        ("src/dom/mod.rs", "mod web;"),
        ("src/store/mod.rs", "mod local_storage;"),
    ];

    for (file, decl) in gated {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(file);
        let src = fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", file));
        let lines: Vec<&str> = src.lines().collect();
        let pos = lines
            .iter()
            .position(|l| l.trim() == decl)
            .unwrap_or_else(|| panic!("{} should declare `{}`", file, decl));

        assert!(
            pos > 0 && lines[pos - 1].trim() == "#[cfg(target_arch = \"wasm32\")]",
            "{}: `{}` must be preceded by #[cfg(target_arch = \"wasm32\")]",
            file,
            decl
        );
    }
}
