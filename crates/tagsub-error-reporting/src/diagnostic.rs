//! Core diagnostic message types.
//!
//! A [`DiagnosticMessage`] is the reportable form of a failure: what went
//! wrong, under which error code, and where in the user's file it happened.

use serde::{Deserialize, Serialize};
use tagsub_source_map::{SourceContext, SourceInfo};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
    /// A note providing additional context
    Note,
}

impl DiagnosticKind {
    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }
}

/// A diagnostic message.
///
/// Structure:
/// 1. **Code**: Optional error code (e.g., "T-1-3") for searchability
/// 2. **Title**: The error message itself
/// 3. **Kind**: Error, Warning, Info
/// 4. **Hints**: Optional guidance for fixing
/// 5. **Location**: Where in the source the problem was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Optional error code (e.g., "T-1-3"), see [`crate::catalog`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Brief description of the problem
    pub title: String,

    /// The kind of diagnostic (Error, Warning, Info)
    pub kind: DiagnosticKind,

    /// Optional hints for fixing
    pub hints: Vec<String>,

    /// Source location for this diagnostic
    ///
    /// The location may be a substring of a substring of a file; it is
    /// mapped back to the original file when rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceInfo>,
}

impl DiagnosticMessage {
    /// Create a new diagnostic message with just a title and kind.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            hints: Vec::new(),
            location: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Create a warning diagnostic.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the source location of the problem.
    pub fn with_location(mut self, location: SourceInfo) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a hint for fixing the problem.
    pub fn add_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Render this diagnostic as plain text.
    ///
    /// Format:
    /// ```text
    /// Error [T-1-3]: undefined variable: nope
    /// in file page.tpl, line 1, column 3:
    /// {{nope}}
    ///   ^
    /// ? Define it with <%nope>...</%nope> before using it?
    /// ```
    ///
    /// The location block is omitted when there is no location or it cannot
    /// be resolved against `ctx`.
    pub fn to_text(&self, ctx: Option<&SourceContext>) -> String {
        use std::fmt::Write;

        let mut result = String::new();

        let kind_str = self.kind.label();
        match &self.code {
            Some(code) => writeln!(result, "{} [{}]: {}", kind_str, code, self.title).unwrap(),
            None => writeln!(result, "{}: {}", kind_str, self.title).unwrap(),
        }

        if let Some(block) = ctx.and_then(|ctx| self.render_location(ctx)) {
            result.push_str(&block);
        }

        for hint in &self.hints {
            writeln!(result, "? {}", hint).unwrap();
        }

        result
    }

    /// Render the "in file ..." block with the source line and a caret.
    fn render_location(&self, ctx: &SourceContext) -> Option<String> {
        let location = self.location.as_ref()?;
        let mapped = location.map_offset(location.range.start.offset, ctx)?;
        let file = ctx.get_file(mapped.file_id)?;
        let line_text = ctx
            .line_text(mapped.file_id, mapped.location.row)
            .unwrap_or_default();

        Some(format!(
            "in file {}, line {}, column {}:\n{}\n{}^\n",
            file.path,
            mapped.location.line_number(),
            mapped.location.column_number(),
            line_text,
            " ".repeat(mapped.location.column),
        ))
    }

    /// Render this diagnostic as an ariadne report (without colors).
    ///
    /// Returns None if the diagnostic has no location or the location cannot
    /// be mapped back to a registered file.
    pub fn to_ariadne_text(&self, ctx: &SourceContext) -> Option<String> {
        use ariadne::{Color, Config, Label, Report, ReportKind, Source};

        let location = self.location.as_ref()?;
        let (start, end) =
            location.map_range(location.range.start.offset, location.range.end.offset, ctx)?;
        let file = ctx.get_file(start.file_id)?;

        // ariadne spans are character indices, not byte offsets
        let char_start = file.content.get(..start.location.offset)?.chars().count();
        let char_end = file.content.get(..end.location.offset)?.chars().count();

        let path = if file.path.is_empty() {
            "<input>".to_string()
        } else {
            file.path.clone()
        };

        let (report_kind, main_color) = match self.kind {
            DiagnosticKind::Error => (ReportKind::Error, Color::Red),
            DiagnosticKind::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticKind::Info => (ReportKind::Advice, Color::Cyan),
            DiagnosticKind::Note => (ReportKind::Advice, Color::Blue),
        };

        let mut report = Report::build(report_kind, path.clone(), char_start)
            .with_config(Config::default().with_color(false));

        report = match &self.code {
            Some(code) => report.with_message(format!("[{}] {}", code, self.title)),
            None => report.with_message(&self.title),
        };

        report = report.with_label(
            Label::new((path.clone(), char_start..char_end))
                .with_message(&self.title)
                .with_color(main_color),
        );

        for hint in &self.hints {
            report = report.with_help(hint);
        }

        let mut output = Vec::new();
        report
            .finish()
            .write((path, Source::from(file.content.as_str())), &mut output)
            .ok()?;

        String::from_utf8(output).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context_with(path: &str, text: &str) -> (SourceContext, SourceInfo) {
        let mut ctx = SourceContext::new();
        let file_id = ctx.add_file(path.to_string(), text.to_string());
        (ctx, SourceInfo::for_file(file_id, text.len()))
    }

    #[test]
    fn test_diagnostic_message_new() {
        let msg = DiagnosticMessage::new(DiagnosticKind::Error, "Test error");
        assert_eq!(msg.title, "Test error");
        assert_eq!(msg.kind, DiagnosticKind::Error);
        assert!(msg.code.is_none());
        assert!(msg.hints.is_empty());
        assert!(msg.location.is_none());
    }

    #[test]
    fn test_to_text_without_location() {
        let msg = DiagnosticMessage::warning("Something odd").add_hint("Check the input?");
        assert_eq!(msg.to_text(None), "Warning: Something odd\n? Check the input?\n");
    }

    #[test]
    fn test_to_text_with_location() {
        let (ctx, file) = context_with("page.tpl", "first line\nsecond {{nope}} line\n");
        let name = SourceInfo::substring(file, 20, 24);

        let msg = DiagnosticMessage::error("undefined variable: nope")
            .with_code("T-1-3")
            .with_location(name);

        assert_eq!(
            msg.to_text(Some(&ctx)),
            "Error [T-1-3]: undefined variable: nope\n\
             in file page.tpl, line 2, column 10:\n\
             second {{nope}} line\n         ^\n"
        );
    }

    #[test]
    fn test_to_text_location_without_context() {
        let (_ctx, file) = context_with("page.tpl", "{{x}}");
        let msg = DiagnosticMessage::error("boom").with_location(file);
        assert_eq!(msg.to_text(None), "Error: boom\n");
    }

    #[test]
    fn test_ariadne_text_mentions_code_and_file() {
        let (ctx, file) = context_with("page.tpl", "hello {{nope}}\n");
        let msg = DiagnosticMessage::error("undefined variable: nope")
            .with_code("T-1-3")
            .with_location(SourceInfo::substring(file, 8, 12));

        let text = msg.to_ariadne_text(&ctx).unwrap();
        assert!(text.contains("[T-1-3] undefined variable: nope"));
        assert!(text.contains("page.tpl"));
    }

    #[test]
    fn test_ariadne_text_requires_location() {
        let (ctx, _) = context_with("page.tpl", "text");
        assert!(DiagnosticMessage::error("boom").to_ariadne_text(&ctx).is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let (_ctx, file) = context_with("a.tpl", "{{x}}");
        let msg = DiagnosticMessage::error("boom")
            .with_code("T-0-1")
            .with_location(file);

        let json = serde_json::to_string(&msg).unwrap();
        let back: DiagnosticMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
