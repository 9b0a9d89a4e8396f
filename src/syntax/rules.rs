//! Pattern definitions for syntax highlighting
//!
//! A `PatternDefinition` wraps one compiled regex plus the fragment kind
//! its matches are classified as. Compilation happens once, here, so a
//! broken definition is rejected before any text is highlighted.

use regex::Regex;

use super::tokens::FragmentKind;
use crate::error::{HighlightError, Result};

/// A compiled lexical matcher
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    /// Compiled regex pattern
    regex: Regex,
    /// Kind assigned to matches
    kind: FragmentKind,
}

impl PatternDefinition {
    /// Build a matcher from a list of literal tokens.
    ///
    /// Tokens are trimmed and escaped. Tokens starting with a letter or
    /// digit are bounded by `\b` so they only match whole words.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref().trim();
                let first = token.chars().next()?;
                let escaped = regex::escape(token);
                if first.is_alphanumeric() {
                    Some(format!(r"\b{}\b", escaped))
                } else {
                    Some(escaped)
                }
            })
            .collect();

        if alternatives.is_empty() {
            return Err(HighlightError::InvalidArgument(
                "token list must contain at least one non-empty token".to_string(),
            ));
        }

        Ok(Self {
            regex: Regex::new(&alternatives.join("|"))?,
            kind: FragmentKind::Keyword,
        })
    }

    /// Build a matcher from a raw regular expression
    pub fn from_regex(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(HighlightError::InvalidArgument(
                "regex pattern must not be empty".to_string(),
            ));
        }
        Ok(Self::from_compiled(Regex::new(pattern)?))
    }

    /// Wrap an already compiled regex
    pub fn from_compiled(regex: Regex) -> Self {
        Self {
            regex,
            kind: FragmentKind::Keyword,
        }
    }

    /// Builder: classify matches as `kind` instead of `Keyword`
    pub fn with_kind(mut self, kind: FragmentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the first non-empty match starting at or after `start`.
    ///
    /// The regex sees the whole text, so `\b` and `^` behave at `start`
    /// the same way they would for a search from the beginning.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let mut pos = start;
        while pos <= text.len() {
            let m = self.regex.find_at(text, pos)?;
            if !m.is_empty() {
                return Some((m.start(), m.end()));
            }
            // Empty match: retry one character further on
            pos = m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}
