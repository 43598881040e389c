/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template processing.
//!
//! Every error is fatal to the run that raised it. Errors found in the
//! template text carry an [`ErrorLocation`] resolved against the original
//! file, even when they were raised inside a captured definition body.

use std::fmt;
use std::path::PathBuf;

use tagsub_error_reporting::DiagnosticMessage;
use tagsub_source_map::{SourceContext, SourceInfo};
use thiserror::Error;

/// The category of a [`TemplateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnterminatedDirective,
    InvalidVariableName,
    UndefinedVariable,
    Io,
}

impl ErrorKind {
    /// Error code in the tagsub error catalog.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnterminatedDirective => "T-1-1",
            ErrorKind::InvalidVariableName => "T-1-2",
            ErrorKind::UndefinedVariable => "T-1-3",
            ErrorKind::Io => "T-2-1",
        }
    }
}

/// Where in the original file an error was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLocation {
    /// File identity as given to the processor (may be empty)
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column number, in characters
    pub column: usize,
    /// The full text of the offending line
    pub source_line: String,
    /// The offending span, relative to the text being processed
    pub source_info: SourceInfo,
}

impl ErrorLocation {
    /// Resolve a span against the files registered in `ctx`.
    ///
    /// If the span cannot be mapped, line and column are 0.
    pub fn resolve(source_info: SourceInfo, ctx: &SourceContext) -> Self {
        let file_id = source_info.file_id();
        let file = ctx
            .get_file(file_id)
            .map(|f| f.path.clone())
            .unwrap_or_default();

        match source_info.map_offset(source_info.range.start.offset, ctx) {
            Some(mapped) => ErrorLocation {
                file,
                line: mapped.location.line_number(),
                column: mapped.location.column_number(),
                source_line: ctx
                    .line_text(file_id, mapped.location.row)
                    .unwrap_or_default()
                    .to_string(),
                source_info,
            },
            None => ErrorLocation {
                file,
                line: 0,
                column: 0,
                source_line: String::new(),
                source_info,
            },
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Errors that can occur while processing a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// An opening marker or open tag has no closer before the end of input.
    #[error("{message}")]
    UnterminatedDirective {
        message: String,
        location: ErrorLocation,
    },

    /// A variable name contains `{{`.
    #[error("variable name may not contain '{{{{'")]
    InvalidVariableName { name: String, location: ErrorLocation },

    /// A reference names a variable that is not bound.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String, location: ErrorLocation },

    /// A template file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TemplateError::UnterminatedDirective { .. } => ErrorKind::UnterminatedDirective,
            TemplateError::InvalidVariableName { .. } => ErrorKind::InvalidVariableName,
            TemplateError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            TemplateError::ReadFile { .. } | TemplateError::Io(_) => ErrorKind::Io,
        }
    }

    /// Source location of the error, if it was found in template text.
    pub fn location(&self) -> Option<&ErrorLocation> {
        match self {
            TemplateError::UnterminatedDirective { location, .. }
            | TemplateError::InvalidVariableName { location, .. }
            | TemplateError::UndefinedVariable { location, .. } => Some(location),
            TemplateError::ReadFile { .. } | TemplateError::Io(_) => None,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        let mut diagnostic = DiagnosticMessage::error(self.to_string()).with_code(self.kind().code());

        if let Some(location) = self.location() {
            diagnostic = diagnostic.with_location(location.source_info.clone());
        }

        if let TemplateError::UndefinedVariable { name, .. } = self {
            diagnostic = diagnostic.add_hint(format!(
                "Define it with <%{name}>...</%{name}> before it is referenced?"
            ));
        }

        diagnostic
    }
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
