pub mod document_file;

pub use document_file::{DOCUMENT_EXTENSION, DocumentFile};
