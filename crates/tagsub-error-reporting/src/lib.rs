//! Error reporting and diagnostic messages for tagsub.
//!
//! Template errors are fatal, so each one is reported exactly once. This
//! crate gives them a structured form ([`DiagnosticMessage`]) carrying an
//! error code, a title and a [`tagsub_source_map::SourceInfo`], and renders
//! that form either as the plain caret layout printed by the command-line
//! tool or as an ariadne report.
//!
//! # Example
//!
//! ```
//! use tagsub_error_reporting::DiagnosticMessage;
//! use tagsub_source_map::{SourceContext, SourceInfo};
//!
//! let mut ctx = SourceContext::new();
//! let file_id = ctx.add_file("page.tpl".into(), "{{nope}}".into());
//! let name = SourceInfo::substring(SourceInfo::for_file(file_id, 8), 2, 6);
//!
//! let msg = DiagnosticMessage::error("undefined variable: nope")
//!     .with_code("T-1-3")
//!     .with_location(name);
//!
//! let text = msg.to_text(Some(&ctx));
//! assert!(text.contains("line 1, column 3"));
//! ```

pub mod catalog;
pub mod diagnostic;

// Re-export main types for convenience
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{DiagnosticKind, DiagnosticMessage};
