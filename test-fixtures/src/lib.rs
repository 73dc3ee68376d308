//! Test fixture loader for golden alignment-extension datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_semantic_files_exist() {
        let files = [
            "golden/semantic/single_parent.json",
            "golden/semantic/monotonic_extension.json",
            "golden/semantic/descendant_strategy.json",
            "golden/semantic/missing_prior.json",
            "golden/semantic/parent_without_grandparent.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_parse_with_input_and_expected() {
        let files = list_fixtures("golden/semantic");
        assert!(files.len() >= 5);
        for path in files {
            let content = std::fs::read_to_string(&path).unwrap();
            let value: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert!(value.get("input").is_some(), "{} lacks input", path.display());
            assert!(value.get("expected").is_some(), "{} lacks expected", path.display());
        }
    }
}
