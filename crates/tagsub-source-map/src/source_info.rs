//! Source information with substring tracking

use crate::types::{FileId, Location, Range};
use crate::utils::range_from_offsets;
use serde::{Deserialize, Serialize};

/// Source information tracking a range and where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// The range in the immediate/current text
    pub range: Range,
    /// How this range maps to its source
    pub mapping: SourceMapping,
}

/// Describes how source content relates to the original file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceMapping {
    /// Direct position in an original file
    Original { file_id: FileId },
    /// Substring extraction from a parent source
    Substring {
        parent: Box<SourceInfo>,
        offset: usize,
    },
}

impl SourceInfo {
    /// Create source info for a position in an original file
    pub fn original(file_id: FileId, range: Range) -> Self {
        SourceInfo {
            range,
            mapping: SourceMapping::Original { file_id },
        }
    }

    /// Create source info covering a whole file of `len` bytes
    pub fn for_file(file_id: FileId, len: usize) -> Self {
        SourceInfo::original(file_id, range_from_offsets(0, len))
    }

    /// Create source info for the `start..end` substring of `parent`
    ///
    /// Offsets are relative to the parent's own text. The new info is
    /// relative to the extracted substring, so offset 0 is its first byte.
    pub fn substring(parent: SourceInfo, start: usize, end: usize) -> Self {
        let length = end - start;
        SourceInfo {
            range: Range {
                start: Location {
                    offset: 0,
                    row: 0,
                    column: 0,
                },
                end: Location {
                    offset: length,
                    row: 0,
                    column: 0,
                },
            },
            mapping: SourceMapping::Substring {
                parent: Box::new(parent),
                offset: start,
            },
        }
    }

    /// The file this information ultimately points into
    pub fn file_id(&self) -> FileId {
        match &self.mapping {
            SourceMapping::Original { file_id } => *file_id,
            SourceMapping::Substring { parent, .. } => parent.file_id(),
        }
    }

    /// Absolute byte offset in the original file for `offset` in this text
    pub fn absolute_offset(&self, offset: usize) -> usize {
        match &self.mapping {
            SourceMapping::Original { .. } => self.range.start.offset + offset,
            SourceMapping::Substring {
                parent,
                offset: start,
            } => parent.absolute_offset(start + offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_source_info() {
        let info = SourceInfo::for_file(FileId(0), 10);

        assert_eq!(info.range.len(), 10);
        match info.mapping {
            SourceMapping::Original { file_id } => assert_eq!(file_id, FileId(0)),
            _ => panic!("Expected Original mapping"),
        }
    }

    #[test]
    fn test_substring_source_info() {
        let parent = SourceInfo::for_file(FileId(3), 100);
        let info = SourceInfo::substring(parent, 10, 20);

        assert_eq!(info.range.start.offset, 0);
        assert_eq!(info.range.end.offset, 10);
        assert_eq!(info.file_id(), FileId(3));
    }

    #[test]
    fn test_nested_substrings_accumulate_offsets() {
        let file = SourceInfo::for_file(FileId(0), 100);
        let outer = SourceInfo::substring(file, 10, 60);
        let inner = SourceInfo::substring(outer, 5, 20);

        assert_eq!(inner.absolute_offset(0), 15);
        assert_eq!(inner.absolute_offset(4), 19);
    }
}
