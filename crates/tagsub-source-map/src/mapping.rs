//! Position mapping through substring chains

use crate::types::{FileId, Location};
use crate::{SourceContext, SourceInfo};

/// Result of mapping a position back to an original file
#[derive(Debug, Clone, PartialEq)]
pub struct MappedLocation {
    /// The original file
    pub file_id: FileId,
    /// Location in the original file
    pub location: Location,
}

impl SourceInfo {
    /// Map an offset in the current text back to original source
    ///
    /// Returns None if the file is not registered in `ctx` or the mapped
    /// offset is not a valid position in it.
    pub fn map_offset(&self, offset: usize, ctx: &SourceContext) -> Option<MappedLocation> {
        let file_id = self.file_id();
        let file = ctx.get_file(file_id)?;
        let absolute_offset = self.absolute_offset(offset);
        let location = file
            .file_info
            .offset_to_location(absolute_offset, &file.content)?;

        Some(MappedLocation { file_id, location })
    }

    /// Map a range in the current text back to original source
    pub fn map_range(
        &self,
        start: usize,
        end: usize,
        ctx: &SourceContext,
    ) -> Option<(MappedLocation, MappedLocation)> {
        let start_mapped = self.map_offset(start, ctx)?;
        let end_mapped = self.map_offset(end, ctx)?;
        Some((start_mapped, end_mapped))
    }
}
