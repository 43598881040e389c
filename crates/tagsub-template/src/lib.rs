/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Recursive tag-substitution template engine.
//!
//! The engine scans text for two directive forms and copies everything else
//! through unchanged:
//!
//! - References: `{{name}}` is replaced by the current value of `name`
//! - Definitions: `<%name>body</%name>` renders `body` and binds the result
//!   to `name`; the definition itself produces no output
//!
//! Four variables are always defined: `lt` (`<`), `gt` (`>`), `lb` (`{`)
//! and `rb` (`}`), so the directive characters can be written literally.
//!
//! # Architecture
//!
//! - [`scanner`] finds the nearest directive marker after a cursor.
//! - [`TemplatingState`] owns the [`VariableTable`] and the
//!   [`tagsub_source_map::SourceContext`] for one run. Definitions are
//!   rendered by recursing into the processor with a private buffer, and
//!   every binding is visible to everything processed afterwards, including
//!   later files of the same run.
//! - Every failure is fatal and returned as a [`TemplateError`] carrying the
//!   file, line and column of the offending text.
//!
//! # Example
//!
//! ```
//! use tagsub_template::TemplatingState;
//!
//! let mut state = TemplatingState::new();
//! let output = state
//!     .render_str("greeting.tpl", "<%who>World</%who>Hello, {{who}}!")
//!     .unwrap();
//! assert_eq!(output, "Hello, World!");
//! ```

pub mod error;
pub mod processor;
pub mod scanner;
pub mod variables;

// Re-export main types at crate root
pub use error::{ErrorKind, ErrorLocation, TemplateError, TemplateResult};
pub use processor::{TemplatingState, render};
pub use scanner::{Directive, Match, find_first};
pub use variables::{BUILTIN_VARIABLES, VariableTable};
