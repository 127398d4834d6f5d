//! Editor surface interface consumed by the sync engine.
//!
//! A surface is whatever widget displays a pane. The engine loads it once,
//! pushes replacement text into it, and asks it to reconfigure when pane
//! settings change; everything else (keymaps, rendering, native selection
//! handling while typing) belongs to the surface.

use crate::buffer::IndentWidth;
use crate::selection::{preserve_selection, SelectionRange};

/// Live-reconfigurable presentation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub line_wrapping: bool,
    pub indent_width: IndentWidth,
}

impl SurfaceOptions {
    /// Text a Tab keypress inserts.
    pub fn indent_unit(&self) -> String {
        self.indent_width.unit()
    }
}

pub trait EditorSurface {
    /// Initial load with the pane's content, syntax tag, and options.
    fn load(&mut self, content: &str, language: Option<&str>, options: &SurfaceOptions);

    fn text(&self) -> &str;

    fn selection(&self) -> SelectionRange;

    /// Replaces the whole document and installs `selection`.
    fn set_content(&mut self, text: &str, selection: SelectionRange);

    fn reconfigure(&mut self, options: &SurfaceOptions);

    /// Programmatic replacement: swaps in `text` and clamps the previous
    /// selection to the new length.
    fn replace_content(&mut self, text: &str) {
        let selection = preserve_selection(text.chars().count(), self.selection());
        self.set_content(text, selection);
    }
}

/// Plain in-memory surface. The GUI binds its text widget to
/// [`MemorySurface::text_mut`]; headless hosts and tests read it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    text: String,
    selection: SelectionRange,
    options: SurfaceOptions,
    language: Option<String>,
    revision: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access for the widget editing this surface directly.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Records the selection reported by the widget after user interaction.
    pub fn set_selection(&mut self, selection: SelectionRange) {
        self.selection = selection;
    }

    pub fn options(&self) -> SurfaceOptions {
        self.options
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Bumped on every programmatic replacement so widgets know when to
    /// re-apply [`EditorSurface::selection`].
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl EditorSurface for MemorySurface {
    fn load(&mut self, content: &str, language: Option<&str>, options: &SurfaceOptions) {
        self.text = content.to_string();
        self.selection = SelectionRange::default();
        self.language = language.map(ToString::to_string);
        self.options = *options;
        self.revision = self.revision.wrapping_add(1);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_content(&mut self, text: &str, selection: SelectionRange) {
        self.text.clear();
        self.text.push_str(text);
        self.selection = selection;
        self.revision = self.revision.wrapping_add(1);
    }

    fn reconfigure(&mut self, options: &SurfaceOptions) {
        self.options = *options;
    }
}
