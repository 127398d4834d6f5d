//! Desktop implementations of the core capability traits.
//!
//! The system clipboard goes through `arboard`; uploads and downloads use
//! native `rfd` dialogs and plain filesystem I/O.

use std::path::PathBuf;
use textconvert_core::capability::{Clipboard, FilePicker, FileSaver};
use textconvert_core::{Capabilities, CapabilityError};
use tracing::{debug, warn};

/// System clipboard handle. Kept alive for the app lifetime so X11 can
/// still serve pastes from other applications.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// # Errors
    /// Fails when no clipboard backend is reachable (e.g. headless sessions).
    pub fn new() -> Result<Self, CapabilityError> {
        let inner =
            arboard::Clipboard::new().map_err(|err| CapabilityError::Failed(err.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        self.inner
            .set_text(text)
            .map_err(|err| CapabilityError::Failed(err.to_string()))?;
        debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, CapabilityError> {
        self.inner
            .get_text()
            .map_err(|err| CapabilityError::Failed(err.to_string()))
    }
}

/// Open dialog filtered to plain-text files.
#[derive(Debug, Default)]
pub struct DialogPicker;

impl FilePicker for DialogPicker {
    fn pick_text_file(&mut self) -> Result<Option<String>, CapabilityError> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt", "json", "md", "csv", "log"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return Ok(None);
        };
        read_text_file(path).map(Some)
    }
}

/// Save dialog seeded with the download file name.
#[derive(Debug, Default)]
pub struct DialogSaver;

impl FileSaver for DialogSaver {
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), CapabilityError> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return Err(CapabilityError::Failed("save dialog cancelled".to_string()));
        };
        std::fs::write(&path, bytes)?;
        debug!("saved {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

fn read_text_file(path: PathBuf) -> Result<String, CapabilityError> {
    let text = std::fs::read_to_string(&path)?;
    debug!("loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Every capability the desktop can offer. A clipboard that cannot be
/// opened leaves its slot empty so copy and paste report "unavailable".
pub fn native_capabilities() -> Capabilities {
    let capabilities = Capabilities::none()
        .with_file_picker(DialogPicker)
        .with_file_saver(DialogSaver);
    match SystemClipboard::new() {
        Ok(clipboard) => capabilities.with_clipboard(clipboard),
        Err(err) => {
            warn!("system clipboard unavailable: {}", err);
            capabilities
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reading_missing_file_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let result = read_text_file(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(CapabilityError::Io(_))));
    }

    #[test]
    fn reading_non_utf8_file_fails() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");
        assert!(read_text_file(path).is_err());
    }

    #[test]
    fn reading_text_file_returns_contents() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "hello").expect("write");
        assert_eq!(read_text_file(path).expect("read"), "hello");
    }
}
