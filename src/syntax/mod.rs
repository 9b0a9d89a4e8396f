//! Syntax module
//!
//! Everything between plain text and styled fragments:
//! - styles and colors
//! - compiled pattern definitions and the registry that orders them
//! - the classifier that splits text into fragments
//! - a few built-in pattern sets

mod style;
mod tokens;
mod rules;
mod registry;
mod classifier;
pub mod builtin;

pub use style::{Color, Style};
pub use tokens::FragmentKind;
pub use rules::PatternDefinition;
pub use registry::{Palette, PatternEntry, PatternRegistry};
pub use classifier::{Fragment, PatternClassifier, Tokenizer};
