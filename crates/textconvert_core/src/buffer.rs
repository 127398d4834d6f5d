//! Pane text buffers, sync status, and presentation settings.

use crate::error::SyncError;
use crate::surface::SurfaceOptions;
use std::fmt;

/// Whether a write into a pane is still outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// Nothing in flight; content reflects the latest resolved write.
    #[default]
    Idle,
    /// A conversion or format targeting this pane has not resolved yet.
    Pending,
    /// The latest write targeting this pane failed or timed out.
    Failed,
}

/// Authoritative content of one pane plus its pending-update status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    status: SyncStatus,
}

impl TextBuffer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            status: SyncStatus::Idle,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: SyncStatus) {
        self.status = status;
    }

    pub fn is_pending(&self) -> bool {
        self.status == SyncStatus::Pending
    }

    /// Length in chars, the unit selections are expressed in.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Indentation used by beautify and the Tab key: 0 (a tab character), 2, 4, 6 or 8 spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentWidth(u8);

impl IndentWidth {
    pub const ALLOWED: [u8; 5] = [0, 2, 4, 6, 8];
    pub const TAB: IndentWidth = IndentWidth(0);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_tab(self) -> bool {
        self.0 == 0
    }

    /// The text inserted for one indentation level.
    pub fn unit(self) -> String {
        if self.is_tab() {
            "\t".to_string()
        } else {
            " ".repeat(usize::from(self.0))
        }
    }

    /// All selectable widths in display order.
    pub fn all() -> impl Iterator<Item = IndentWidth> {
        Self::ALLOWED.into_iter().map(IndentWidth)
    }
}

impl Default for IndentWidth {
    fn default() -> Self {
        IndentWidth(4)
    }
}

impl TryFrom<u8> for IndentWidth {
    type Error = SyncError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(IndentWidth(value))
        } else {
            Err(SyncError::InvalidIndent(value))
        }
    }
}

impl fmt::Display for IndentWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tab() {
            f.write_str("Tab")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// User-adjustable presentation and formatting settings of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSettings {
    pub line_wrapping: bool,
    pub beautify: bool,
    pub indent_width: IndentWidth,
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self {
            line_wrapping: false,
            beautify: true,
            indent_width: IndentWidth::default(),
        }
    }
}

/// One side of the dual editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    title: String,
    language: Option<String>,
    buffer: TextBuffer,
    settings: PaneSettings,
}

impl Pane {
    pub fn new(title: impl Into<String>, language: Option<String>, settings: PaneSettings) -> Self {
        Self {
            title: title.into(),
            language,
            buffer: TextBuffer::default(),
            settings,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque syntax tag forwarded to the editor surface.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn status(&self) -> SyncStatus {
        self.buffer.status()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn settings(&self) -> PaneSettings {
        self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut PaneSettings {
        &mut self.settings
    }

    /// Surface options derived from the current settings.
    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            line_wrapping: self.settings.line_wrapping,
            indent_width: self.settings.indent_width,
        }
    }
}
