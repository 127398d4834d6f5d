//! Host-provided capabilities.
//!
//! Each slot in [`Capabilities`] may be absent. An absent slot means the host
//! cannot perform the action at all; a present capability that returns
//! [`CapabilityError`] failed this time and may succeed on retry.

use crate::error::CapabilityError;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError>;
    fn read_text(&mut self) -> Result<String, CapabilityError>;
}

pub trait FilePicker {
    /// Lets the user choose a file and reads it as text.
    ///
    /// # Returns
    /// `Ok(None)` when the user cancelled the picker.
    fn pick_text_file(&mut self) -> Result<Option<String>, CapabilityError>;
}

pub trait FileSaver {
    /// Hands `bytes` to the host under `file_name` (e.g. a downloads folder or
    /// a save dialog).
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), CapabilityError>;
}

/// The set of capabilities the host offers.
#[derive(Default)]
pub struct Capabilities {
    pub clipboard: Option<Box<dyn Clipboard>>,
    pub file_picker: Option<Box<dyn FilePicker>>,
    pub file_saver: Option<Box<dyn FileSaver>>,
}

impl Capabilities {
    /// No capabilities at all; every action reports "unavailable".
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    pub fn with_file_picker(mut self, picker: impl FilePicker + 'static) -> Self {
        self.file_picker = Some(Box::new(picker));
        self
    }

    pub fn with_file_saver(mut self, saver: impl FileSaver + 'static) -> Self {
        self.file_saver = Some(Box::new(saver));
        self
    }
}
