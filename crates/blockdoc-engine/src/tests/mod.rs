use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary documents directory
pub fn create_test_documents_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(documents_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = documents_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Heading node with a single text child
pub fn heading(level: i64, text: &str) -> Value {
    json!({"type": "heading", "attrs": {"level": level}, "content": [{"type": "text", "text": text}]})
}
