//! Fragment kinds
//!
//! Every fragment the classifier produces carries one of these kinds.
//! Pattern matches take the kind their `PatternDefinition` declares,
//! everything else gets one of the fallback kinds.

/// Semantic kind of a classified fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A word which is neither a keyword nor inside any word group
    Identifier,
    /// Punctuation and operator characters
    Operator,
    /// Numeric literals
    Number,
    /// A run of non-newline whitespace
    Whitespace,
    /// A single line terminator
    Newline,
    /// Language keywords
    Keyword,
    /// Block comments
    Comment,
    /// Line comments
    CommentLine,
    /// String literals
    String,
    /// Text between a pair of delimiters
    DelimitedGroup,
    /// A word from a named word list
    WordGroup,
}

impl FragmentKind {
    /// All kinds, in declaration order
    pub const ALL: [FragmentKind; 11] = [
        FragmentKind::Identifier,
        FragmentKind::Operator,
        FragmentKind::Number,
        FragmentKind::Whitespace,
        FragmentKind::Newline,
        FragmentKind::Keyword,
        FragmentKind::Comment,
        FragmentKind::CommentLine,
        FragmentKind::String,
        FragmentKind::DelimitedGroup,
        FragmentKind::WordGroup,
    ];

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            FragmentKind::Identifier => "Identifier",
            FragmentKind::Operator => "Operator",
            FragmentKind::Number => "Number",
            FragmentKind::Whitespace => "Whitespace",
            FragmentKind::Newline => "Newline",
            FragmentKind::Keyword => "Keyword",
            FragmentKind::Comment => "Comment",
            FragmentKind::CommentLine => "CommentLine",
            FragmentKind::String => "String",
            FragmentKind::DelimitedGroup => "DelimitedGroup",
            FragmentKind::WordGroup => "WordGroup",
        }
    }

    /// Parse a kind from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether the renderer emits this kind without escaping or styling
    pub fn is_layout(&self) -> bool {
        matches!(self, FragmentKind::Whitespace | FragmentKind::Newline)
    }
}
