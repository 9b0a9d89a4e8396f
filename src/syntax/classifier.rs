//! Text classification
//!
//! Turns a whole buffer into an ordered list of fragments that covers
//! every byte exactly once. Registered patterns claim the spans they
//! match; the gaps between them are split by a small fallback lexer into
//! whitespace, newlines, words, numbers and single-character operators.

use std::ops::Range;

use super::registry::PatternRegistry;
use super::tokens::FragmentKind;

/// A contiguous, classified slice of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'t> {
    /// The covered text
    pub text: &'t str,
    /// Byte offset of `text` within the input
    pub start: usize,
    pub kind: FragmentKind,
    /// Name of the pattern that produced this fragment, empty for fallback kinds
    pub group: &'t str,
}

impl<'t> Fragment<'t> {
    pub fn new(text: &'t str, start: usize, kind: FragmentKind, group: &'t str) -> Self {
        Self {
            text,
            start,
            kind,
            group,
        }
    }

    /// Byte range of this fragment within the input
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Anything that can split text into fragments.
///
/// Implementations must return fragments whose texts concatenate back to
/// the input, and must not fail.
pub trait Tokenizer {
    fn classify<'t>(&self, text: &'t str, registry: &'t PatternRegistry) -> Vec<Fragment<'t>>;
}

/// The registry-driven classifier.
///
/// Overlapping candidates resolve by earliest start, then by lowest
/// registration index. Match length never decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl PatternClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for PatternClassifier {
    fn classify<'t>(&self, text: &'t str, registry: &'t PatternRegistry) -> Vec<Fragment<'t>> {
        let entries = registry.entries();
        let mut fragments = Vec::new();
        let mut pos = 0;

        // Next match of each pattern at or after `pos`; None once exhausted
        let mut candidates: Vec<Option<(usize, usize)>> =
            entries.iter().map(|e| e.pattern.find_at(text, 0)).collect();

        while pos < text.len() {
            for (entry, candidate) in entries.iter().zip(candidates.iter_mut()) {
                if matches!(candidate, Some((start, _)) if *start < pos) {
                    *candidate = entry.pattern.find_at(text, pos);
                }
            }

            // min_by_key keeps the first of equal keys, so ties go to the lower index
            let best = candidates
                .iter()
                .enumerate()
                .filter_map(|(i, c)| c.map(|(start, end)| (i, start, end)))
                .min_by_key(|&(_, start, _)| start);

            let Some((i, start, end)) = best else {
                lex_fallback(text, pos, text.len(), &mut fragments);
                break;
            };

            lex_fallback(text, pos, start, &mut fragments);
            let entry = &entries[i];
            fragments.push(Fragment::new(
                &text[start..end],
                start,
                entry.pattern.kind(),
                &entry.name,
            ));
            pos = end;
        }

        fragments
    }
}

/// Split `text[from..to]`, which no pattern claimed, into fallback fragments
fn lex_fallback<'t>(text: &'t str, from: usize, to: usize, out: &mut Vec<Fragment<'t>>) {
    let mut pos = from;
    while pos < to {
        let rest = &text[pos..to];
        let Some(c) = rest.chars().next() else {
            break;
        };

        let (len, kind) = if c == '\r' || c == '\n' {
            let len = if rest.starts_with("\r\n") { 2 } else { 1 };
            (len, FragmentKind::Newline)
        } else if c.is_whitespace() {
            let len = run_len(rest, |c| c.is_whitespace() && c != '\r' && c != '\n');
            (len, FragmentKind::Whitespace)
        } else if is_word_char(c) {
            let kind = if c.is_ascii_digit() {
                FragmentKind::Number
            } else {
                FragmentKind::Identifier
            };
            (run_len(rest, is_word_char), kind)
        } else {
            (c.len_utf8(), FragmentKind::Operator)
        };

        out.push(Fragment::new(&rest[..len], pos, kind, ""));
        pos += len;
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the leading run of chars satisfying `pred`
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}
