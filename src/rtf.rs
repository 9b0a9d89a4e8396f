//! RTF rendering
//!
//! Serializes classified fragments into a self-contained RTF document:
//! header with a single monospace font, a color table whose entry 0 is the
//! host's default foreground, then the body. Rendering is total; a
//! fragment whose group is not in the palette simply gets the default color.

use std::fmt::Write;

use crate::syntax::{Color, Fragment, FragmentKind, Palette};

/// Knobs for the generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Font used for the whole document
    pub font_name: String,
    /// Font size in half-points (`\fs`)
    pub font_size: u32,
    /// Expand every tab, inside matches too, to this many spaces (None keeps tabs)
    pub tab_width: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_name: "Courier New".to_string(),
            font_size: 17,
            tab_width: None,
        }
    }
}

/// Fragment to RTF serializer
#[derive(Debug, Clone, Default)]
pub struct RtfRenderer {
    options: RenderOptions,
}

impl RtfRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a complete document
    pub fn render(
        &self,
        fragments: &[Fragment<'_>],
        palette: &Palette,
        default_color: Color,
    ) -> String {
        let body_hint: usize = fragments.iter().map(|f| f.text.len() + 16).sum();
        let mut out = String::with_capacity(256 + body_hint);

        self.write_header(&mut out);
        write_color_table(&mut out, palette, default_color);
        let _ = write!(out, "\\viewkind4\\uc1\\pard\\f0\\fs{} ", self.options.font_size);

        for fragment in fragments {
            match fragment.kind {
                FragmentKind::Whitespace => self.write_text(&mut out, fragment.text),
                FragmentKind::Newline => out.push_str("\\par\n"),
                _ => self.write_styled(&mut out, fragment, palette),
            }
        }

        out.push_str("\\par }");
        out
    }

    fn write_header(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "{{\\rtf1\\ansi\\ansicpg1252\\deff0\\deflang1033{{\\fonttbl{{\\f0\\fnil\\fcharset0 {};}}}}",
            escape(&self.options.font_name)
        );
    }

    /// Encode fragment text; line terminators inside it become `\par`
    fn write_text(&self, out: &mut String, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push_str("\\par\n");
                }
                '\t' => match self.options.tab_width {
                    Some(width) => out.extend(std::iter::repeat(' ').take(width)),
                    None => out.push('\t'),
                },
                _ => push_escaped(out, c),
            }
        }
    }

    fn write_styled(&self, out: &mut String, fragment: &Fragment<'_>, palette: &Palette) {
        match palette.resolve(fragment.group) {
            Some((index, style)) => {
                let (open_b, close_b) = if style.bold { ("\\b", "\\b0") } else { ("", "") };
                let (open_i, close_i) = if style.italic { ("\\i", "\\i0") } else { ("", "") };
                let _ = write!(out, "\\cf{}{}{} ", index, open_b, open_i);
                self.write_text(out, fragment.text);
                let _ = write!(out, "\\cf0{}{} ", close_b, close_i);
            }
            None => {
                out.push_str("\\cf0 ");
                self.write_text(out, fragment.text);
                out.push_str("\\cf0 ");
            }
        }
    }
}

fn write_color_table(out: &mut String, palette: &Palette, default_color: Color) {
    out.push_str("{\\colortbl ");
    out.push_str(&default_color.to_rtf_entry());
    out.push(';');
    for (_, style) in palette.iter() {
        out.push_str(&style.color.to_rtf_entry());
        out.push(';');
    }
    out.push_str("}\n");
}

/// Escape text for an RTF body.
///
/// Backslash and braces get a backslash; anything outside ASCII becomes
/// `\uN?` (UTF-16, signed), since the document declares code page 1252.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' | '{' | '}' => {
            out.push('\\');
            out.push(c);
        }
        _ if c.is_ascii() => out.push(c),
        _ => push_unicode(out, c),
    }
}

fn push_unicode(out: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        let _ = write!(out, "\\u{}?", *unit as i16);
    }
}
