//! Built-in pattern sets
//!
//! Ready-made registries for the CLI and for hosts that don't ship their
//! own configuration.

use super::registry::PatternRegistry;
use super::rules::PatternDefinition;
use super::style::{Color, Style};
use super::tokens::FragmentKind;
use crate::error::Result;

/// Names accepted by `by_name`
pub fn names() -> &'static [&'static str] {
    &["keywords", "c"]
}

/// Look up a built-in set by name
pub fn by_name(name: &str) -> Option<Result<PatternRegistry>> {
    match name {
        "keywords" => Some(keywords_demo()),
        "c" => Some(c_family()),
        _ => None,
    }
}

/// The minimal demo set: a few keywords in blue
pub fn keywords_demo() -> Result<PatternRegistry> {
    let mut registry = PatternRegistry::new();
    registry.register_unnamed(
        PatternDefinition::from_tokens(["for", "foreach", "int"])?,
        Style::new(Color::BLUE),
    )?;
    Ok(registry)
}

/// C-family languages (C, C++, C#, Java)
pub fn c_family() -> Result<PatternRegistry> {
    let mut registry = PatternRegistry::new();

    // Comments and strings first so keywords inside them are not picked out
    registry.register(
        "block_comment",
        PatternDefinition::from_regex(r"/\*(?s:.*?)(?:\*/|\z)")?.with_kind(FragmentKind::Comment),
        Style::new(Color::GREEN).with_italic(),
    )?;
    registry.register(
        "line_comment",
        PatternDefinition::from_regex(r"//[^\r\n]*")?.with_kind(FragmentKind::CommentLine),
        Style::new(Color::GREEN).with_italic(),
    )?;
    registry.register(
        "string",
        PatternDefinition::from_regex(r#""(?:[^"\\\r\n]|\\[^\r\n])*"?"#)?
            .with_kind(FragmentKind::String),
        Style::new(Color::MAROON),
    )?;
    registry.register(
        "char",
        PatternDefinition::from_regex(r"'(?:[^'\\\r\n]|\\[^\r\n])'")?
            .with_kind(FragmentKind::String),
        Style::new(Color::MAROON),
    )?;
    registry.register(
        "preprocessor",
        PatternDefinition::from_regex(r"(?m)^[ \t]*#[ \t]*\w+")?.with_kind(FragmentKind::WordGroup),
        Style::new(Color::PURPLE),
    )?;

    registry.register(
        "keyword",
        PatternDefinition::from_tokens([
            "auto", "break", "case", "catch", "class", "const", "continue", "default", "delete",
            "do", "else", "enum", "extern", "false", "for", "foreach", "goto", "if", "in",
            "namespace", "new", "null", "nullptr", "private", "protected", "public", "return",
            "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try",
            "typedef", "union", "using", "virtual", "volatile", "while",
        ])?,
        Style::new(Color::BLUE).with_bold(),
    )?;
    registry.register(
        "type",
        PatternDefinition::from_tokens([
            "bool", "byte", "char", "double", "float", "int", "long", "short", "signed",
            "string", "unsigned", "var", "void",
        ])?
        .with_kind(FragmentKind::WordGroup),
        Style::new(Color::TEAL),
    )?;

    registry.register(
        "number",
        PatternDefinition::from_regex(
            r"\b(?:0[xX][0-9a-fA-F]+|\d+\.\d*(?:[eE][+-]?\d+)?|\d+)[uUlLfF]*\b",
        )?
        .with_kind(FragmentKind::Number),
        Style::new(Color::RED),
    )?;

    Ok(registry)
}
