//! Toolbar actions: copy, paste, upload, download, and clear.
//!
//! Actions never fail loudly. Each returns a [`Notice`] with one of the fixed
//! bilingual messages the host shows to the user; details go to the log.

use crate::capability::Capabilities;
use crate::engine::{ChangeOrigin, SyncEngine};
use crate::error::CapabilityError;
use crate::side::Side;
use crate::surface::EditorSurface;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

const UNAVAILABLE_MESSAGE: &str =
    "当前版本不支持此功能，请更新应用。This feature is unavailable, please update the app.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Paste,
    Upload,
    Download,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::Copy => "copy",
            Action::Paste => "paste",
            Action::Upload => "upload",
            Action::Download => "download",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The host does not provide the capability.
    Unavailable,
    /// The capability exists but the operation failed.
    Failed,
}

/// User-visible result of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub action: Action,
    pub outcome: Outcome,
}

impl Notice {
    fn new(action: Action, outcome: Outcome) -> Self {
        Self { action, outcome }
    }

    pub fn is_error(&self) -> bool {
        self.outcome != Outcome::Done
    }

    pub fn message(&self) -> &'static str {
        match (self.outcome, self.action) {
            (Outcome::Unavailable, _) => UNAVAILABLE_MESSAGE,
            (Outcome::Done, Action::Copy) => "已复制到剪切板。Copied to clipboard.",
            (Outcome::Done, Action::Paste) => "已从剪切板粘贴。Pasted from clipboard.",
            (Outcome::Done, Action::Upload) => "文件已载入。File loaded.",
            (Outcome::Done, Action::Download) => "文件已保存。File saved.",
            (Outcome::Failed, Action::Copy) => "复制失败，请重试。Failed to copy, please retry.",
            (Outcome::Failed, Action::Paste) => "粘贴失败，请重试。Failed to paste, please retry.",
            (Outcome::Failed, Action::Upload) => {
                "读取文件失败，请重试。Failed to read the file, please retry."
            }
            (Outcome::Failed, Action::Download) => {
                "保存文件失败，请重试。Failed to save the file, please retry."
            }
        }
    }
}

fn failed(action: Action, side: Side, err: CapabilityError) -> Notice {
    warn!(side = side.label(), "{} failed: {}", action.label(), err);
    Notice::new(action, Outcome::Failed)
}

fn unavailable(action: Action, side: Side) -> Notice {
    info!(side = side.label(), "{} requested without host capability", action.label());
    Notice::new(action, Outcome::Unavailable)
}

/// Writes the content of `side` to the clipboard.
pub fn copy<S: EditorSurface>(
    engine: &SyncEngine<S>,
    capabilities: &mut Capabilities,
    side: Side,
) -> Notice {
    let Some(clipboard) = capabilities.clipboard.as_mut() else {
        return unavailable(Action::Copy, side);
    };
    match clipboard.write_text(engine.content(side)) {
        Ok(()) => Notice::new(Action::Copy, Outcome::Done),
        Err(err) => failed(Action::Copy, side, err),
    }
}

/// Replaces the content of `side` with the clipboard text.
pub fn paste<S: EditorSurface>(
    engine: &mut SyncEngine<S>,
    capabilities: &mut Capabilities,
    side: Side,
) -> Notice {
    let Some(clipboard) = capabilities.clipboard.as_mut() else {
        return unavailable(Action::Paste, side);
    };
    match clipboard.read_text() {
        Ok(text) => {
            engine.on_pane_changed(side, text, ChangeOrigin::Replaced);
            Notice::new(Action::Paste, Outcome::Done)
        }
        Err(err) => failed(Action::Paste, side, err),
    }
}

/// Replaces the content of `side` with a user-picked text file.
///
/// # Returns
/// `None` when the user cancelled the picker.
pub fn upload<S: EditorSurface>(
    engine: &mut SyncEngine<S>,
    capabilities: &mut Capabilities,
    side: Side,
) -> Option<Notice> {
    let Some(picker) = capabilities.file_picker.as_mut() else {
        return Some(unavailable(Action::Upload, side));
    };
    match picker.pick_text_file() {
        Ok(Some(text)) => {
            engine.on_pane_changed(side, text, ChangeOrigin::Replaced);
            Some(Notice::new(Action::Upload, Outcome::Done))
        }
        Ok(None) => None,
        Err(err) => Some(failed(Action::Upload, side, err)),
    }
}

/// File name used for downloads: epoch milliseconds plus `.txt`.
pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("{}.txt", now.timestamp_millis())
}

/// Saves the content of `side` as a plain-text file named by `now`.
pub fn download<S: EditorSurface>(
    engine: &SyncEngine<S>,
    capabilities: &mut Capabilities,
    side: Side,
    now: DateTime<Utc>,
) -> Notice {
    let Some(saver) = capabilities.file_saver.as_mut() else {
        return unavailable(Action::Download, side);
    };
    let file_name = download_file_name(now);
    match saver.save_file(&file_name, engine.content(side).as_bytes()) {
        Ok(()) => Notice::new(Action::Download, Outcome::Done),
        Err(err) => failed(Action::Download, side, err),
    }
}

/// Empties `side`; the empty text is synced like any replacement.
pub fn clear<S: EditorSurface>(engine: &mut SyncEngine<S>, side: Side) {
    engine.on_pane_changed(side, String::new(), ChangeOrigin::Replaced);
}
