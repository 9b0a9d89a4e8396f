//! Pattern registry and palette
//!
//! The registry is the ordered list of (name, pattern, style) entries a
//! highlighter classifies with. Its palette is the derived view the
//! renderer needs: color table index to style, and group name to index.

use std::collections::HashMap;

use once_cell::unsync::OnceCell;
use tracing::debug;

use super::rules::PatternDefinition;
use super::style::Style;
use crate::error::{HighlightError, Result};

/// A registered pattern
#[derive(Debug, Clone)]
pub struct PatternEntry {
    /// Color table index, 1-based in registration order
    pub index: usize,
    /// Unique name, also used as the group of matched fragments
    pub name: String,
    pub pattern: PatternDefinition,
    pub style: Style,
}

/// Lookup tables derived from a registry.
///
/// Index 0 is the default foreground and has no style here.
#[derive(Debug, Default)]
pub struct Palette {
    styles: Vec<Style>,
    indexes: HashMap<String, usize>,
}

impl Palette {
    fn build(entries: &[PatternEntry]) -> Self {
        Self {
            styles: entries.iter().map(|e| e.style).collect(),
            indexes: entries.iter().map(|e| (e.name.clone(), e.index)).collect(),
        }
    }

    /// Style for a color table index (1-based)
    pub fn style(&self, index: usize) -> Option<&Style> {
        index.checked_sub(1).and_then(|i| self.styles.get(i))
    }

    /// Color table index for a group name
    pub fn index_of(&self, group: &str) -> Option<usize> {
        self.indexes.get(group).copied()
    }

    /// Resolve a group straight to its index and style
    pub fn resolve(&self, group: &str) -> Option<(usize, &Style)> {
        let index = self.index_of(group)?;
        self.style(index).map(|style| (index, style))
    }

    /// Styles in index order, starting at index 1
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Style)> {
        self.styles.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Ordered, append-only collection of pattern entries
#[derive(Debug, Default)]
pub struct PatternRegistry {
    entries: Vec<PatternEntry>,
    /// Built on first use, dropped on every registration
    palette: OnceCell<Palette>,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern under a unique, non-empty name
    pub fn register(
        &mut self,
        name: &str,
        pattern: PatternDefinition,
        style: Style,
    ) -> Result<&PatternEntry> {
        if name.is_empty() {
            return Err(HighlightError::InvalidArgument(
                "name must not be empty".to_string(),
            ));
        }
        if self.lookup(name).is_some() {
            return Err(HighlightError::DuplicateName(name.to_string()));
        }

        let index = self.entries.len() + 1;
        debug!(name, index, regex = pattern.as_str(), "registered pattern");
        self.entries.push(PatternEntry {
            index,
            name: name.to_string(),
            pattern,
            style,
        });
        self.palette.take();

        Ok(&self.entries[index - 1])
    }

    /// Register a pattern named after its position ("1", "2", ...)
    pub fn register_unnamed(
        &mut self,
        pattern: PatternDefinition,
        style: Style,
    ) -> Result<&PatternEntry> {
        let name = (self.entries.len() + 1).to_string();
        self.register(&name, pattern, style)
    }

    /// Find an entry by exact, case-sensitive name
    pub fn lookup(&self, name: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the palette, building it if needed
    pub fn palette(&self) -> &Palette {
        self.palette.get_or_init(|| Palette::build(&self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    fn keywords() -> PatternDefinition {
        PatternDefinition::from_tokens(["for", "int"]).unwrap()
    }

    #[test]
    fn test_indexes_follow_registration_order() {
        let mut registry = PatternRegistry::new();
        registry.register("kw", keywords(), Style::new(Color::BLUE)).unwrap();
        registry
            .register("num", PatternDefinition::from_regex(r"\d+").unwrap(), Style::new(Color::RED))
            .unwrap();

        let indexes: Vec<_> = registry.entries().iter().map(|e| e.index).collect();
        assert_eq!(indexes, vec![1, 2]);
        assert_eq!(registry.lookup("num").map(|e| e.index), Some(2));
    }

    #[test]
    fn test_duplicate_name_leaves_registry_unchanged() {
        let mut registry = PatternRegistry::new();
        registry.register("kw", keywords(), Style::new(Color::BLUE)).unwrap();

        let err = registry
            .register("kw", keywords(), Style::new(Color::RED))
            .unwrap_err();
        assert!(matches!(err, HighlightError::DuplicateName(ref n) if n == "kw"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("kw").unwrap().style.color, Color::BLUE);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = PatternRegistry::new();
        let err = registry.register("", keywords(), Style::default()).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidArgument(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = PatternRegistry::new();
        registry.register("Keyword", keywords(), Style::default()).unwrap();
        assert!(registry.lookup("Keyword").is_some());
        assert!(registry.lookup("keyword").is_none());
        // Differently cased names are distinct entries
        assert!(registry.register("keyword", keywords(), Style::default()).is_ok());
    }

    #[test]
    fn test_unnamed_registration() {
        let mut registry = PatternRegistry::new();
        registry.register_unnamed(keywords(), Style::default()).unwrap();
        registry.register_unnamed(keywords(), Style::default()).unwrap();
        let names: Vec<_> = registry.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2"]);
    }

    #[test]
    fn test_palette_rebuilt_after_registration() {
        let mut registry = PatternRegistry::new();
        registry.register("kw", keywords(), Style::new(Color::BLUE)).unwrap();
        assert_eq!(registry.palette().len(), 1);

        let string = PatternDefinition::from_regex("\"[^\"]*\"").unwrap();
        registry.register("str", string, Style::new(Color::MAROON)).unwrap();
        let palette = registry.palette();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.index_of("str"), Some(2));
        assert_eq!(palette.style(2).map(|s| s.color), Some(Color::MAROON));
    }

    #[test]
    fn test_palette_lookups() {
        let mut registry = PatternRegistry::new();
        registry.register("kw", keywords(), Style::new(Color::BLUE).with_bold()).unwrap();
        let palette = registry.palette();

        assert_eq!(palette.style(0), None);
        assert_eq!(palette.style(2), None);
        assert_eq!(palette.resolve("kw").map(|(i, s)| (i, s.bold)), Some((1, true)));
        assert_eq!(palette.resolve(""), None);
        assert_eq!(palette.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);
    }
}
