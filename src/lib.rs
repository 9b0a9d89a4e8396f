//! rehl - live syntax highlighting for rich-text edit widgets
//!
//! Plain text goes in, an RTF document comes out. A `SyntaxHighlighter`
//! listens to a `TextHost`'s change notifications and re-renders the whole
//! buffer on each edit, without ever touching the plain text itself.
//!
//! ```
//! use rehl::{MemoryHost, PatternDefinition, Style, Color, SyntaxHighlighter, TextHost};
//!
//! let mut highlighter = SyntaxHighlighter::new();
//! let keywords = PatternDefinition::from_tokens(["for", "foreach", "int"])?;
//! highlighter.add_pattern(keywords, Style::new(Color::BLUE))?;
//!
//! let mut host = MemoryHost::new("for (int i)");
//! highlighter.on_text_changed(&mut host);
//! assert!(host.rich_content().unwrap().contains("\\cf1 for\\cf0 "));
//! assert_eq!(host.text(), "for (int i)");
//! # Ok::<(), rehl::HighlightError>(())
//! ```

pub mod config;
pub mod error;
pub mod highlighter;
pub mod host;
pub mod rtf;
pub mod syntax;

pub use config::Config;
pub use error::{HighlightError, Result};
pub use highlighter::{PassState, SyntaxHighlighter};
pub use host::{MemoryHost, SuppressNotifications, TextHost};
pub use rtf::{RenderOptions, RtfRenderer};
pub use syntax::{
    Color, Fragment, FragmentKind, Palette, PatternClassifier, PatternDefinition, PatternEntry,
    PatternRegistry, Style, Tokenizer,
};
