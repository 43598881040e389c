//! Error code catalog and lookup.
//!
//! Maps error codes (like "T-1-3") to their metadata. The catalog lives in
//! `error_catalog.json` next to this crate's manifest and is embedded at
//! compile time.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "template", "io")
    pub subsystem: String,

    /// Short title for the error
    pub title: String,

    /// Default explanation of the error
    pub message_template: String,

    /// When this error was introduced (version)
    pub since_version: String,
}

/// Global error catalog, parsed on first use.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid, which can only happen if the
/// catalog file was edited incorrectly.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("Invalid error catalog JSON - this is a bug in tagsub")
});

/// Look up error code information.
///
/// # Example
///
/// ```
/// use tagsub_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("T-1-3").unwrap();
/// assert_eq!(info.title, "Undefined Variable");
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

/// Get the subsystem name for an error code.
pub fn get_subsystem(code: &str) -> Option<&str> {
    ERROR_CATALOG.get(code).map(|info| info.subsystem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(!ERROR_CATALOG.is_empty());
    }

    #[test]
    fn test_template_errors_exist() {
        for code in ["T-1-1", "T-1-2", "T-1-3"] {
            let info = get_error_info(code).unwrap();
            assert_eq!(info.subsystem, "template");
        }
    }

    #[test]
    fn test_get_subsystem() {
        assert_eq!(get_subsystem("T-0-1"), Some("internal"));
        assert_eq!(get_subsystem("T-2-1"), Some("io"));
        assert_eq!(get_subsystem("T-999-999"), None);
    }
}
