use relative_path::{RelativePath, RelativePathBuf};

/// Extension of stored document files.
pub const DOCUMENT_EXTENSION: &str = "json";

/// A stored document, addressed relative to the documents directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl DocumentFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .unwrap_or("Untitled")
            .to_string();

        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the `.json` extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without the extension, for titles
    pub fn display_path(&self) -> String {
        let path = self.relative_path.as_str();
        path.strip_suffix(".json").unwrap_or(path).to_string()
    }
}

impl From<&str> for DocumentFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
