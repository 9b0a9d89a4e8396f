//! Text host abstraction
//!
//! The highlighter never owns the edit widget. It talks to it through
//! `TextHost`: read the plain text, push a rendered document, and switch
//! the widget's change notifications off around that push.

use std::ops::{Deref, DerefMut};

use crate::syntax::Color;

/// What the highlighter needs from an editable rich-text widget
pub trait TextHost {
    /// Current plain text
    fn text(&self) -> String;

    /// Foreground used for text no pattern claims (color table entry 0)
    fn default_color(&self) -> Color;

    /// Replace the rich content with a complete RTF document
    fn set_rich_content(&mut self, markup: &str);

    /// Turn change notifications on or off
    fn set_notifications_enabled(&mut self, enabled: bool);

    fn notifications_enabled(&self) -> bool;
}

/// Scoped notification suppression.
///
/// Disables the host's notifications on creation and restores the
/// previous setting when dropped, including during a panic unwind.
pub struct SuppressNotifications<'h, H: TextHost + ?Sized> {
    host: &'h mut H,
    was_enabled: bool,
}

impl<'h, H: TextHost + ?Sized> SuppressNotifications<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        let was_enabled = host.notifications_enabled();
        host.set_notifications_enabled(false);
        Self { host, was_enabled }
    }
}

impl<H: TextHost + ?Sized> Deref for SuppressNotifications<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: TextHost + ?Sized> DerefMut for SuppressNotifications<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: TextHost + ?Sized> Drop for SuppressNotifications<'_, H> {
    fn drop(&mut self) {
        self.host.set_notifications_enabled(self.was_enabled);
    }
}

/// An in-memory host for headless use: the CLI, services and tests
#[derive(Debug, Clone)]
pub struct MemoryHost {
    text: String,
    rich_content: Option<String>,
    default_color: Color,
    notifications: bool,
    /// Number of `set_rich_content` calls
    pub assignments: usize,
}

impl MemoryHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rich_content: None,
            default_color: Color::BLACK,
            notifications: true,
            assignments: 0,
        }
    }

    /// Builder: set the default foreground
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Replace the plain text, as a user edit would
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.rich_content = None;
    }

    /// The last document assigned, if any since the last edit
    pub fn rich_content(&self) -> Option<&str> {
        self.rich_content.as_deref()
    }
}

impl TextHost for MemoryHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn default_color(&self) -> Color {
        self.default_color
    }

    fn set_rich_content(&mut self, markup: &str) {
        self.rich_content = Some(markup.to_string());
        self.assignments += 1;
    }

    fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications = enabled;
    }

    fn notifications_enabled(&self) -> bool {
        self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppression_restores_on_drop() {
        let mut host = MemoryHost::new("x");
        {
            let mut guard = SuppressNotifications::new(&mut host);
            assert!(!guard.notifications_enabled());
            guard.set_rich_content("{\\rtf1 }");
        }
        assert!(host.notifications_enabled());
        assert_eq!(host.assignments, 1);
    }

    #[test]
    fn test_suppression_keeps_disabled_state() {
        let mut host = MemoryHost::new("x");
        host.set_notifications_enabled(false);
        drop(SuppressNotifications::new(&mut host));
        assert!(!host.notifications_enabled());
    }

    #[test]
    fn test_set_text_clears_rich_content() {
        let mut host = MemoryHost::new("a");
        host.set_rich_content("doc");
        assert_eq!(host.rich_content(), Some("doc"));
        host.set_text("b");
        assert_eq!(host.rich_content(), None);
        assert_eq!(host.text(), "b");
    }
}
