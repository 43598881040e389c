//! Source context for managing files

use crate::file_info::FileInformation;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// Context for managing source files
///
/// Every text handed to the template processor is registered here first,
/// so diagnostics can later recover the file name and the offending line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

/// A source file with content and its line index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path or identifier (may be empty for anonymous text)
    pub path: String,
    /// Full file content
    pub content: String,
    /// Line index for location lookups
    pub file_info: FileInformation,
}

impl SourceContext {
    /// Create a new empty source context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the context and return its ID
    pub fn add_file(&mut self, path: String, content: String) -> FileId {
        let id = FileId(self.files.len());
        let file_info = FileInformation::new(&content);
        self.files.push(SourceFile {
            path,
            content,
            file_info,
        });
        id
    }

    /// Get a file by ID
    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// Text of a 0-indexed row, without its line terminator
    ///
    /// A trailing `\r` is stripped as well, so CRLF files render cleanly.
    pub fn line_text(&self, id: FileId, row: usize) -> Option<&str> {
        let file = self.get_file(id)?;
        let range = file.file_info.line_range(row)?;
        let line = file.content.get(range)?;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Number of registered files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
