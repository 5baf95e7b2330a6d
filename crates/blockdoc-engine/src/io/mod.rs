use crate::document::{Document, DocumentError};
use crate::models::{DOCUMENT_EXTENSION, DocumentFile};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
    #[error("Could not parse document: {0}")]
    Parse(#[from] DocumentError),
}

/// Read a document file's raw text
pub fn read_file(relative_path: &RelativePath, documents_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(documents_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Read and parse a JSON document
pub fn read_document(
    relative_path: &RelativePath,
    documents_root: &Path,
) -> Result<Document, IoError> {
    let content = read_file(relative_path, documents_root)?;
    let document = Document::from_json_str(&content)?;
    log::debug!("loaded document {relative_path}");
    Ok(document)
}

/// Scan for JSON documents under the documents directory
pub fn scan_documents(documents_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !documents_root.exists() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(documents_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Scan and address each document relative to the documents directory
pub fn list_documents(documents_root: &Path) -> Result<Vec<DocumentFile>, IoError> {
    let files = scan_documents(documents_root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(documents_root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .map(DocumentFile::new)
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == DOCUMENT_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
