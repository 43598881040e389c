/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Directive scanning.
//!
//! The scanner only knows about marker strings. It is used both to find the
//! next directive of any kind and, with a pair of concrete tags, to match a
//! definition's open tag against its close tag.

/// Opens a definition: `<%name>`.
pub const DEFINITION_OPEN: &str = "<%";

/// Ends the name of a definition.
pub const DEFINITION_NAME_END: &str = ">";

/// Opens a reference: `{{name}}`.
pub const REFERENCE_OPEN: &str = "{{";

/// Closes a reference.
pub const REFERENCE_CLOSE: &str = "}}";

/// All directive markers, in tie-break order.
pub const DIRECTIVE_MARKERS: [&str; 2] = [DEFINITION_OPEN, REFERENCE_OPEN];

/// The kind of directive introduced by a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `<%name>body</%name>`
    Definition,
    /// `{{name}}`
    Reference,
}

impl Directive {
    /// The marker that opens this directive.
    pub fn marker(self) -> &'static str {
        match self {
            Directive::Definition => DEFINITION_OPEN,
            Directive::Reference => REFERENCE_OPEN,
        }
    }
}

/// An occurrence of one of several needles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the matched needle in the slice passed to [`find_first`]
    pub needle: usize,
    /// Byte offset of the occurrence in the haystack
    pub offset: usize,
}

/// Find the earliest occurrence of any needle at or after `start`.
///
/// When two needles occur at the same offset the one listed first in
/// `needles` wins. Returns None if no needle occurs, or if `start` is past
/// the end of `haystack` or not on a character boundary.
///
/// # Example
///
/// ```
/// use tagsub_template::find_first;
///
/// let m = find_first("a }} b {{ c", &["{{", "}}"], 0).unwrap();
/// assert_eq!(m.needle, 1);
/// assert_eq!(m.offset, 2);
/// ```
pub fn find_first(haystack: &str, needles: &[&str], start: usize) -> Option<Match> {
    let rest = haystack.get(start..)?;
    let mut best: Option<Match> = None;

    for (needle, pattern) in needles.iter().enumerate() {
        if let Some(pos) = rest.find(pattern) {
            let offset = start + pos;
            if best.is_none_or(|b| offset < b.offset) {
                best = Some(Match { needle, offset });
            }
        }
    }

    best
}

/// Find `needle` at or after `start`, returning its absolute offset.
pub fn find_from(haystack: &str, needle: &str, start: usize) -> Option<usize> {
    haystack
        .get(start..)?
        .find(needle)
        .map(|pos| start + pos)
}

/// Find the next directive marker at or after `start`.
pub fn next_directive(text: &str, start: usize) -> Option<(Directive, usize)> {
    let found = find_first(text, &DIRECTIVE_MARKERS, start)?;
    let directive = match found.needle {
        0 => Directive::Definition,
        _ => Directive::Reference,
    };
    Some((directive, found.offset))
}
