/*
 * processor.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template processing.
//!
//! The processor copies text to the output sink up to the next directive,
//! handles the directive, and continues after it. A definition's body is
//! rendered by recursing into the processor with a private buffer; the
//! recursion hands the finished text back and the caller binds it.

use std::io::Write;
use std::path::Path;

use tagsub_source_map::{SourceContext, SourceInfo};

use crate::error::{ErrorLocation, TemplateError, TemplateResult};
use crate::scanner::{
    DEFINITION_NAME_END, Directive, REFERENCE_CLOSE, REFERENCE_OPEN, find_first, find_from,
    next_directive,
};
use crate::variables::VariableTable;

/// State for one templating run.
///
/// Holds the variable table shared by every file and every nested
/// definition processed through it, and the registry of processed texts
/// used to locate errors.
#[derive(Debug, Clone, Default)]
pub struct TemplatingState {
    variables: VariableTable,
    sources: SourceContext,
}

impl TemplatingState {
    /// Create a state with only the built-in variables defined.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state starting from an existing variable table.
    pub fn with_variables(variables: VariableTable) -> Self {
        TemplatingState {
            variables,
            sources: SourceContext::new(),
        }
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariableTable {
        &mut self.variables
    }

    /// Every text processed so far, for rendering diagnostics.
    pub fn sources(&self) -> &SourceContext {
        &self.sources
    }

    /// Read a whole file and process it into `out`.
    ///
    /// The file's path (as displayed) becomes its identity in diagnostics.
    pub fn process_file<W: Write>(&mut self, path: impl AsRef<Path>, out: &mut W) -> TemplateResult<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Processing template file");
        self.process_str(&path.display().to_string(), &content, out)
    }

    /// Process in-memory text into `out`.
    ///
    /// `name` identifies the text in diagnostics and may be empty. Output
    /// written before an error is left in `out`.
    pub fn process_str<W: Write>(&mut self, name: &str, text: &str, out: &mut W) -> TemplateResult<()> {
        let file_id = self.sources.add_file(name.to_string(), text.to_string());
        let info = SourceInfo::for_file(file_id, text.len());
        self.process(text, &info, out)
    }

    /// Process in-memory text and return the rendered output.
    pub fn render_str(&mut self, name: &str, text: &str) -> TemplateResult<String> {
        let mut out = Vec::new();
        self.process_str(name, text, &mut out)?;
        into_string(out)
    }

    /// Render `text`, whose position in its file is described by `info`.
    fn process(&mut self, text: &str, info: &SourceInfo, out: &mut dyn Write) -> TemplateResult<()> {
        let mut index = 0;

        while let Some((directive, start)) = next_directive(text, index) {
            out.write_all(text[index..start].as_bytes())?;

            tracing::trace!(?directive, offset = start, "Dispatching directive");
            index = match directive {
                Directive::Reference => self.substitute(text, info, start, out)?,
                Directive::Definition => self.define(text, info, start)?,
            };
        }

        out.write_all(text[index..].as_bytes())?;
        Ok(())
    }

    /// Handle `{{name}}` at `start`; returns the offset just past `}}`.
    fn substitute(
        &self,
        text: &str,
        info: &SourceInfo,
        start: usize,
        out: &mut dyn Write,
    ) -> TemplateResult<usize> {
        let Some(end) = find_from(text, REFERENCE_CLOSE, start) else {
            return Err(TemplateError::UnterminatedDirective {
                message: "'{{' without matching '}}'".to_string(),
                location: self.locate(info, start, start + REFERENCE_OPEN.len()),
            });
        };

        let name_start = start + REFERENCE_OPEN.len();
        let name = &text[name_start..end];
        self.check_name(info, name, name_start)?;

        let Some(value) = self.variables.get(name) else {
            return Err(TemplateError::UndefinedVariable {
                name: name.to_string(),
                location: self.locate(info, name_start, end),
            });
        };

        out.write_all(value.as_bytes())?;
        Ok(end + REFERENCE_CLOSE.len())
    }

    /// Handle `<%name>body</%name>` at `start`; returns the offset just past
    /// the close tag.
    fn define(&mut self, text: &str, info: &SourceInfo, start: usize) -> TemplateResult<usize> {
        let marker_end = start + Directive::Definition.marker().len();

        let Some(name_end) = find_from(text, DEFINITION_NAME_END, start) else {
            return Err(TemplateError::UnterminatedDirective {
                message: "'<%' without matching '>'".to_string(),
                location: self.locate(info, start, marker_end),
            });
        };

        let name = &text[marker_end..name_end];
        self.check_name(info, name, marker_end)?;

        let open_tag = format!("<%{name}>");
        let close_tag = format!("</%{name}>");

        let Some(close_start) = match_close_tag(text, start, &open_tag, &close_tag) else {
            return Err(TemplateError::UnterminatedDirective {
                message: format!("'{open_tag}' without matching '{close_tag}'"),
                location: self.locate(info, start, marker_end),
            });
        };

        let body_start = name_end + DEFINITION_NAME_END.len();
        let body_info = SourceInfo::substring(info.clone(), body_start, close_start);

        let mut captured = Vec::new();
        self.process(&text[body_start..close_start], &body_info, &mut captured)?;
        let value = into_string(captured)?;

        tracing::debug!(name, bytes = value.len(), "Bound variable");
        self.variables.insert(name, value);

        Ok(close_start + close_tag.len())
    }

    fn check_name(&self, info: &SourceInfo, name: &str, name_start: usize) -> TemplateResult<()> {
        if let Some(pos) = name.find(REFERENCE_OPEN) {
            let at = name_start + pos;
            return Err(TemplateError::InvalidVariableName {
                name: name.to_string(),
                location: self.locate(info, at, at + REFERENCE_OPEN.len()),
            });
        }
        Ok(())
    }

    fn locate(&self, info: &SourceInfo, start: usize, end: usize) -> ErrorLocation {
        ErrorLocation::resolve(SourceInfo::substring(info.clone(), start, end), &self.sources)
    }
}

/// Find the close tag matching the open tag at `start`.
///
/// Same-named open tags inside the body nest, so each one must be closed
/// before the outer close tag counts. Returns the offset of the matching
/// close tag.
fn match_close_tag(text: &str, start: usize, open_tag: &str, close_tag: &str) -> Option<usize> {
    let tags = [open_tag, close_tag];
    let mut depth = 1usize;
    let mut cursor = start;

    loop {
        let found = find_first(text, &tags, cursor + 1)?;
        if found.needle == 0 {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(found.offset);
            }
        }
        cursor = found.offset;
    }
}

/// Rendered output is assembled from slices of valid UTF-8 text.
fn into_string(bytes: Vec<u8>) -> TemplateResult<String> {
    String::from_utf8(bytes)
        .map_err(|e| TemplateError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Render `text` with a fresh [`TemplatingState`].
pub fn render(text: &str) -> TemplateResult<String> {
    TemplatingState::new().render_str("", text)
}
