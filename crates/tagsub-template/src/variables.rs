/*
 * variables.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The variable table shared by a whole templating run.

use std::collections::HashMap;

/// Variables that exist before any definition is processed.
///
/// They let templates produce the directive characters literally.
pub const BUILTIN_VARIABLES: [(&str, &str); 4] = [("lt", "<"), ("gt", ">"), ("lb", "{"), ("rb", "}")];

/// Variable bindings for one templating run.
///
/// There is a single flat scope: a definition anywhere, including inside
/// another definition's body, is visible to everything processed after it.
/// Redefining a name silently replaces its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableTable {
    values: HashMap<String, String>,
}

impl Default for VariableTable {
    fn default() -> Self {
        let values = BUILTIN_VARIABLES
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        VariableTable { values }
    }
}

impl VariableTable {
    /// Create a table holding only the built-in variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable's rendered value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names of all bound variables, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let table = VariableTable::new();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("lt"), Some("<"));
        assert_eq!(table.get("gt"), Some(">"));
        assert_eq!(table.get("lb"), Some("{"));
        assert_eq!(table.get("rb"), Some("}"));
        assert!(!table.contains("x"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = VariableTable::new();
        assert_eq!(table.insert("x", "a"), None);
        assert_eq!(table.insert("x", "b"), Some("a".to_string()));
        assert_eq!(table.get("x"), Some("b"));
    }

    #[test]
    fn test_builtins_can_be_redefined() {
        let mut table = VariableTable::new();
        table.insert("lt", "&lt;");
        assert_eq!(table.get("lt"), Some("&lt;"));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_names() {
        let mut table = VariableTable::new();
        table.insert("title", "Home");

        let mut names: Vec<&str> = table.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["gt", "lb", "lt", "rb", "title"]);
    }
}
