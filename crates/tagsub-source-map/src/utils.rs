//! Utility functions for working with source positions

use crate::types::{Location, Range};

/// Convert a byte offset to a Location with line and column info
///
/// Scans the prefix of `source` linearly. [`crate::FileInformation`] gives
/// the same answer with a precomputed line index.
///
/// Returns None if the offset is out of bounds.
pub fn offset_to_location(source: &str, offset: usize) -> Option<Location> {
    if offset > source.len() {
        return None;
    }

    let mut row = 0;
    let mut column = 0;
    let mut current_offset = 0;

    for ch in source.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            row += 1;
            column = 0;
        } else {
            column += 1;
        }

        current_offset += ch.len_utf8();
    }

    Some(Location {
        offset,
        row,
        column,
    })
}

/// Create a Range from start and end byte offsets
///
/// Only the offsets are filled in; row and column are left at 0. Use
/// `offset_to_location` to get full Location info.
pub fn range_from_offsets(start: usize, end: usize) -> Range {
    Range {
        start: Location {
            offset: start,
            row: 0,
            column: 0,
        },
        end: Location {
            offset: end,
            row: 0,
            column: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location_simple() {
        let source = "hello\nworld";

        let loc = offset_to_location(source, 0).unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 0);

        let loc = offset_to_location(source, 3).unwrap();
        assert_eq!(loc.row, 0);
        assert_eq!(loc.column, 3);

        // After newline (beginning of second line)
        let loc = offset_to_location(source, 6).unwrap();
        assert_eq!(loc.row, 1);
        assert_eq!(loc.column, 0);

        let loc = offset_to_location(source, 9).unwrap();
        assert_eq!(loc.row, 1);
        assert_eq!(loc.column, 3);
    }

    #[test]
    fn test_offset_to_location_out_of_bounds() {
        assert!(offset_to_location("hello", 100).is_none());
    }

    #[test]
    fn test_offset_to_location_end() {
        let loc = offset_to_location("hello", 5).unwrap();
        assert_eq!(loc.offset, 5);
        assert_eq!(loc.column, 5);
    }

    #[test]
    fn test_range_from_offsets() {
        let range = range_from_offsets(10, 20);
        assert_eq!(range.start.offset, 10);
        assert_eq!(range.end.offset, 20);
        assert_eq!(range.start.row, 0);
    }
}
