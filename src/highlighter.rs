//! Highlight controller
//!
//! `SyntaxHighlighter` reacts to a host's change notifications by running
//! one full pass: classify the plain text, render RTF, assign it to the
//! host. Assigning content makes most widgets fire another change
//! notification, so the controller tracks whether a pass is running and
//! drops any trigger that arrives meanwhile.

use std::cell::Cell;

use tracing::{debug, trace};

use crate::error::Result;
use crate::host::{SuppressNotifications, TextHost};
use crate::rtf::{RenderOptions, RtfRenderer};
use crate::syntax::{
    PatternClassifier, PatternDefinition, PatternEntry, PatternRegistry, Style, Tokenizer,
};

/// Whether a pass is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    #[default]
    Idle,
    Highlighting,
}

/// Marks a pass as running; back to `Idle` when dropped
struct PassGuard<'a> {
    state: &'a Cell<PassState>,
}

impl<'a> PassGuard<'a> {
    /// None if a pass is already running
    fn enter(state: &'a Cell<PassState>) -> Option<Self> {
        if state.get() == PassState::Highlighting {
            return None;
        }
        state.set(PassState::Highlighting);
        Some(Self { state })
    }
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.state.set(PassState::Idle);
    }
}

/// Keeps a text host's rich content in sync with its plain text.
///
/// Configure patterns first (`add_pattern` needs `&mut self`), then share
/// the highlighter with whatever delivers change notifications. Everything
/// on the notification path takes `&self` and runs on the caller's thread.
pub struct SyntaxHighlighter {
    registry: PatternRegistry,
    tokenizer: Box<dyn Tokenizer>,
    renderer: RtfRenderer,
    disabled: Cell<bool>,
    state: Cell<PassState>,
    passes: Cell<usize>,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        Self::from_registry(PatternRegistry::new())
    }

    /// Start from an already populated registry
    pub fn from_registry(registry: PatternRegistry) -> Self {
        Self {
            registry,
            tokenizer: Box::new(PatternClassifier::new()),
            renderer: RtfRenderer::default(),
            disabled: Cell::new(false),
            state: Cell::new(PassState::Idle),
            passes: Cell::new(0),
        }
    }

    /// Builder: replace the registry-driven classifier
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Builder: set font and tab handling of the generated documents
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.renderer = RtfRenderer::new(options);
        self
    }

    /// Add a pattern named after its position
    pub fn add_pattern(
        &mut self,
        pattern: PatternDefinition,
        style: Style,
    ) -> Result<&PatternEntry> {
        self.registry.register_unnamed(pattern, style)
    }

    /// Add a pattern under a unique name
    pub fn add_named_pattern(
        &mut self,
        name: &str,
        pattern: PatternDefinition,
        style: Style,
    ) -> Result<&PatternEntry> {
        self.registry.register(name, pattern, style)
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// When true, triggers are ignored and the host's text is left alone
    pub fn set_disable_highlighting(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    pub fn disable_highlighting(&self) -> bool {
        self.disabled.get()
    }

    pub fn state(&self) -> PassState {
        self.state.get()
    }

    /// Number of completed passes
    pub fn passes(&self) -> usize {
        self.passes.get()
    }

    /// Change notification entry point
    pub fn on_text_changed<H: TextHost + ?Sized>(&self, host: &mut H) {
        self.rehighlight(host);
    }

    /// Run a pass now, subject to the same checks as a change notification
    pub fn rehighlight<H: TextHost + ?Sized>(&self, host: &mut H) {
        if self.disabled.get() {
            trace!("highlighting disabled, trigger ignored");
            return;
        }
        let Some(_pass) = PassGuard::enter(&self.state) else {
            trace!("pass already running, trigger dropped");
            return;
        };

        // Dropped before `_pass`, so notifications come back while still Highlighting
        let mut host = SuppressNotifications::new(host);

        let text = host.text();
        let fragments = self.tokenizer.classify(&text, &self.registry);
        let markup = self
            .renderer
            .render(&fragments, self.registry.palette(), host.default_color());
        host.set_rich_content(&markup);

        self.passes.set(self.passes.get() + 1);
        debug!(
            text_len = text.len(),
            fragments = fragments.len(),
            markup_len = markup.len(),
            "highlight pass"
        );
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
