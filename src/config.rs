//! Configuration file support
//!
//! Loads pattern sets and render settings from ~/.rehl.toml
//! (or %USERPROFILE%\.rehl.toml on Windows), or from an explicit path.
//!
//! Example:
//! ```toml
//! default_color = "#000000"
//!
//! [render]
//! font = "Consolas"
//! font_size = 20
//! tab_width = 4
//!
//! [[pattern]]
//! name = "kw"
//! tokens = ["for", "foreach", "int"]
//! color = "#0000ff"
//! bold = true
//!
//! [[pattern]]
//! name = "comment"
//! regex = "//.*"
//! kind = "CommentLine"
//! color = "#008000"
//! italic = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{HighlightError, Result};
use crate::rtf::RenderOptions;
use crate::syntax::{Color, FragmentKind, PatternDefinition, PatternRegistry, Style};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides the host's default foreground when set
    pub default_color: Option<String>,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternConfig>,
}

/// `[render]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub font: Option<String>,
    pub font_size: Option<u32>,
    pub tab_width: Option<usize>,
}

/// One `[[pattern]]` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Defaults to the entry's position ("1", "2", ...)
    pub name: Option<String>,
    pub tokens: Option<Vec<String>>,
    pub regex: Option<String>,
    /// Fragment kind name, `Keyword` when omitted
    pub kind: Option<String>,
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl PatternConfig {
    fn definition(&self) -> Result<PatternDefinition> {
        let definition = match (&self.tokens, &self.regex) {
            (Some(tokens), None) => PatternDefinition::from_tokens(tokens)?,
            (None, Some(regex)) => PatternDefinition::from_regex(regex)?,
            _ => {
                return Err(HighlightError::InvalidArgument(format!(
                    "pattern '{}' needs exactly one of `tokens` or `regex`",
                    self.name.as_deref().unwrap_or("<unnamed>")
                )))
            }
        };

        let kind = match self.kind.as_deref() {
            None => FragmentKind::Keyword,
            Some(name) => FragmentKind::from_name(name).unwrap_or_else(|| {
                warn!(kind = name, "unknown fragment kind, using Keyword");
                FragmentKind::Keyword
            }),
        };
        Ok(definition.with_kind(kind))
    }

    fn style(&self) -> Result<Style> {
        Ok(Style {
            color: self.color.parse()?,
            bold: self.bold,
            italic: self.italic,
        })
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".rehl.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".rehl.toml"))
        }
    }

    /// Load the default config file, if there is one
    pub fn load_default() -> Result<Option<Self>> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build a registry from the `[[pattern]]` entries, in file order
    pub fn build_registry(&self) -> Result<PatternRegistry> {
        let mut registry = PatternRegistry::new();
        for pattern in &self.patterns {
            let definition = pattern.definition()?;
            let style = pattern.style()?;
            match &pattern.name {
                Some(name) => registry.register(name, definition, style)?,
                None => registry.register_unnamed(definition, style)?,
            };
        }
        Ok(registry)
    }

    /// Render options, falling back to the defaults for unset keys
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            font_name: self.render.font.clone().unwrap_or(defaults.font_name),
            font_size: self.render.font_size.unwrap_or(defaults.font_size),
            tab_width: self.render.tab_width.filter(|&w| w > 0),
        }
    }

    /// The configured default foreground, if any
    pub fn default_color(&self) -> Result<Option<Color>> {
        self.default_color.as_deref().map(str::parse::<Color>).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
default_color = "#202020"

[render]
font = "Consolas"
tab_width = 4

[[pattern]]
name = "kw"
tokens = ["for", "foreach", "int"]
color = "#0000ff"
bold = true

[[pattern]]
name = "comment"
regex = "//.*"
kind = "CommentLine"
color = "#008000"
italic = true

[[pattern]]
regex = "\\d+"
kind = "Number"
color = "ff0000"
"##;

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.patterns.len(), 3);
        assert_eq!(config.default_color().unwrap(), Some(Color::rgb(0x20, 0x20, 0x20)));

        let options = config.render_options();
        assert_eq!(options.font_name, "Consolas");
        assert_eq!(options.font_size, 17);
        assert_eq!(options.tab_width, Some(4));
    }

    #[test]
    fn test_build_registry() {
        let registry = Config::from_toml_str(SAMPLE).unwrap().build_registry().unwrap();

        let names: Vec<_> = registry.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["kw", "comment", "3"]);

        let kw = registry.lookup("kw").unwrap();
        assert_eq!(kw.style, Style::new(Color::BLUE).with_bold());
        assert_eq!(kw.pattern.kind(), FragmentKind::Keyword);

        let comment = registry.lookup("comment").unwrap();
        assert_eq!(comment.pattern.kind(), FragmentKind::CommentLine);
        assert!(comment.style.italic);

        assert_eq!(registry.lookup("3").unwrap().pattern.kind(), FragmentKind::Number);
    }

    #[test]
    fn test_pattern_needs_exactly_one_matcher() {
        let both = r##"
[[pattern]]
tokens = ["a"]
regex = "a"
color = "#000000"
"##;
        let neither = r##"
[[pattern]]
color = "#000000"
"##;
        for contents in [both, neither] {
            let err = Config::from_toml_str(contents).unwrap().build_registry().unwrap_err();
            assert!(matches!(err, HighlightError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_config_errors_surface() {
        let duplicate = r##"
[[pattern]]
name = "a"
tokens = ["x"]
color = "#000000"
[[pattern]]
name = "a"
tokens = ["y"]
color = "#000000"
"##;
        assert!(matches!(
            Config::from_toml_str(duplicate).unwrap().build_registry(),
            Err(HighlightError::DuplicateName(_))
        ));

        let bad_regex = r##"
[[pattern]]
regex = "(("
color = "#000000"
"##;
        assert!(matches!(
            Config::from_toml_str(bad_regex).unwrap().build_registry(),
            Err(HighlightError::Regex(_))
        ));

        let bad_color = r##"
[[pattern]]
tokens = ["x"]
color = "blue"
"##;
        assert!(matches!(
            Config::from_toml_str(bad_color).unwrap().build_registry(),
            Err(HighlightError::InvalidArgument(_))
        ));

        assert!(matches!(
            Config::from_toml_str("unknown_key = 1"),
            Err(HighlightError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_keyword() {
        let contents = r##"
[[pattern]]
tokens = ["x"]
kind = "Bogus"
color = "#000000"
"##;
        let registry = Config::from_toml_str(contents).unwrap().build_registry().unwrap();
        assert_eq!(registry.entries()[0].pattern.kind(), FragmentKind::Keyword);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.build_registry().unwrap().is_empty());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.default_color().unwrap(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/rehl.toml")).unwrap_err();
        assert!(matches!(err, HighlightError::Io(_)));
    }
}
