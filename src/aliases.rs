//! Registry of named formats.

use crate::builtin_formats::BUILTIN_FORMATS;

/// Mapping of alias names to raw patterns, in insertion order.
///
/// Aliases can be added or overwritten but never removed.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    entries: Vec<(String, String)>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRegistry {
    /// A registry seeded with the ISO presets.
    pub fn new() -> Self {
        FormatRegistry {
            entries: BUILTIN_FORMATS
                .iter()
                .map(|(alias, pattern)| (alias.to_string(), pattern.to_string()))
                .collect(),
        }
    }

    /// Registers an alias, replacing the pattern of an existing one.
    ///
    /// Returns the alias names known afterwards.
    pub fn register(&mut self, alias: impl Into<String>, pattern: impl Into<String>) -> Vec<String> {
        let alias = alias.into();
        let pattern = pattern.into();
        match self.entries.iter_mut().find(|(name, _)| *name == alias) {
            Some(entry) => entry.1 = pattern,
            None => self.entries.push((alias, pattern)),
        }
        self.list()
    }

    /// Alias names, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.entries.iter().map(|(alias, _)| alias.clone()).collect()
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, pattern)| pattern.as_str())
    }

    /// Returns the pattern for `format`: the aliased pattern on an exact
    /// alias match, otherwise `format` itself.
    ///
    /// Expansion happens once; a pattern that names another alias is not
    /// expanded again.
    pub fn resolve<'a>(&'a self, format: &'a str) -> &'a str {
        self.get(format).unwrap_or(format)
    }
}
