//! Efficient file information for location lookups

use crate::types::Location;
use serde::{Deserialize, Serialize};

/// Line index for a file
///
/// Stores the byte offset of every newline so an offset can be turned into
/// a row with a binary search instead of rescanning the file prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInformation {
    /// Byte offsets of each newline character in the file
    line_breaks: Vec<usize>,

    /// Total length of the file in bytes
    total_length: usize,
}

impl FileInformation {
    /// Create file information by analyzing content
    ///
    /// # Example
    ///
    /// ```
    /// use tagsub_source_map::FileInformation;
    ///
    /// let info = FileInformation::new("line 1\nline 2\nline 3");
    /// assert_eq!(info.line_count(), 3);
    /// ```
    pub fn new(content: &str) -> Self {
        let line_breaks: Vec<usize> = content
            .bytes()
            .enumerate()
            .filter_map(|(idx, b)| if b == b'\n' { Some(idx) } else { None })
            .collect();

        FileInformation {
            line_breaks,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset to a Location with row and column
    ///
    /// The row is the number of newlines strictly before `offset`. The
    /// column counts characters (not bytes) from the start of that row, so
    /// the file content is needed to resolve it.
    ///
    /// Returns None if the offset is out of bounds or does not fall on a
    /// character boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use tagsub_source_map::FileInformation;
    ///
    /// let content = "hello\nwörld";
    /// let info = FileInformation::new(content);
    /// let loc = info.offset_to_location(9, content).unwrap();
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 2);
    /// ```
    pub fn offset_to_location(&self, offset: usize, content: &str) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        // A newline at exactly `offset` terminates this row; it does not
        // start the next one.
        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };

        let line_start = self.line_start(row)?;
        let column = content.get(line_start..offset)?.chars().count();

        Some(Location {
            offset,
            row,
            column,
        })
    }

    /// Byte offset at which a 0-indexed row begins
    pub fn line_start(&self, row: usize) -> Option<usize> {
        if row == 0 {
            Some(0)
        } else {
            self.line_breaks.get(row - 1).map(|nl| nl + 1)
        }
    }

    /// Byte range of a 0-indexed row, excluding its newline
    pub fn line_range(&self, row: usize) -> Option<std::ops::Range<usize>> {
        let start = self.line_start(row)?;
        let end = self
            .line_breaks
            .get(row)
            .copied()
            .unwrap_or(self.total_length);
        Some(start..end)
    }

    /// Get the total length of the file in bytes
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Get the number of lines in the file
    pub fn line_count(&self) -> usize {
        self.line_breaks.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::offset_to_location;

    #[test]
    fn test_empty_file() {
        let info = FileInformation::new("");
        assert_eq!(info.total_length(), 0);
        assert_eq!(info.line_count(), 1);

        let loc = info.offset_to_location(0, "").unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 0);
    }

    #[test]
    fn test_multiple_lines() {
        let content = "line 1\nline 2\nline 3";
        let info = FileInformation::new(content);
        assert_eq!(info.line_count(), 3);

        // At first newline (offset 6 is '\n')
        let loc = info.offset_to_location(6, content).unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 6);

        // Start of second line
        let loc = info.offset_to_location(7, content).unwrap();
        assert_eq!(loc.row, 1);
        assert_eq!(loc.column, 0);

        // End of file
        let loc = info.offset_to_location(20, content).unwrap();
        assert_eq!(loc.row, 2);
        assert_eq!(loc.column, 6);
    }

    #[test]
    fn test_out_of_bounds() {
        let info = FileInformation::new("hello");
        assert!(info.offset_to_location(100, "hello").is_none());
    }

    #[test]
    fn test_columns_count_characters() {
        let content = "café {{x}}";
        let info = FileInformation::new(content);

        // 'é' is two bytes, so "{{" starts at byte 6 but character 5
        let loc = info.offset_to_location(6, content).unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 5);

        // Inside a multi-byte character
        assert!(info.offset_to_location(4, content).is_none());
    }

    #[test]
    fn test_consecutive_newlines() {
        let content = "a\n\n\nb";
        let info = FileInformation::new(content);
        assert_eq!(info.line_count(), 4);

        let loc = info.offset_to_location(3, content).unwrap();
        assert_eq!(loc.row, 2);
        assert_eq!(loc.column, 0);

        let loc = info.offset_to_location(4, content).unwrap();
        assert_eq!(loc.row, 3);
        assert_eq!(loc.column, 0);
    }

    #[test]
    fn test_line_range() {
        let content = "ab\ncde\n";
        let info = FileInformation::new(content);
        assert_eq!(info.line_range(0), Some(0..2));
        assert_eq!(info.line_range(1), Some(3..6));
        assert_eq!(info.line_range(2), Some(7..7));
        assert_eq!(info.line_range(3), None);
    }

    #[test]
    fn test_agrees_with_linear_scan() {
        let content = "one\n  two {{x}}\n\nthree <%y>ü</%y>\n";
        let info = FileInformation::new(content);

        for (offset, _) in content.char_indices() {
            assert_eq!(
                info.offset_to_location(offset, content),
                offset_to_location(content, offset),
                "offset {}",
                offset
            );
        }
    }
}
