//! Source mapping for tagsub templates
//!
//! This crate tracks where a piece of template text came from. Captured
//! regions of a template are processed as independent strings, but any
//! diagnostic raised inside them must still point at the right line and
//! column of the file the user wrote. A region is therefore described as a
//! substring of its parent, and positions are mapped back through that chain.
//!
//! # Overview
//!
//! The core types are:
//! - [`SourceInfo`]: A range plus the chain describing where it came from
//! - [`SourceMapping`]: Either an original file or a substring of a parent
//! - [`SourceContext`]: Owns the registered files and their line indexes
//!
//! # Example
//!
//! ```rust
//! use tagsub_source_map::*;
//!
//! let mut ctx = SourceContext::new();
//! let text = "first\n<%x>body</%x>";
//! let file_id = ctx.add_file("page.tpl".into(), text.into());
//!
//! let file = SourceInfo::for_file(file_id, text.len());
//! let body = SourceInfo::substring(file, 10, 14);
//!
//! let mapped = body.map_offset(0, &ctx).unwrap();
//! assert_eq!(mapped.location.row, 1);
//! assert_eq!(mapped.location.column, 4);
//! ```

pub mod context;
pub mod file_info;
pub mod mapping;
pub mod source_info;
pub mod types;
pub mod utils;

// Re-export main types
pub use context::{SourceContext, SourceFile};
pub use file_info::FileInformation;
pub use mapping::MappedLocation;
pub use source_info::{SourceInfo, SourceMapping};
pub use types::{FileId, Location, Range};
pub use utils::{offset_to_location, range_from_offsets};
