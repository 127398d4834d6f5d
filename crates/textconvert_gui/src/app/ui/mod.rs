//! Frame rendering split by screen region.

mod header;
mod pane;
mod status_bar;
mod toasts;

use textconvert_core::{Converter, SyncStatus};

/// Arrow showing which way edits flow between the panes.
pub(super) fn direction_arrow(converter: &Converter) -> &'static str {
    match (converter.forward.is_some(), converter.backward.is_some()) {
        (true, true) => "↔",
        (true, false) => "→",
        (false, true) => "←",
        (false, false) => "|",
    }
}

pub(super) fn status_label(status: SyncStatus) -> Option<&'static str> {
    match status {
        SyncStatus::Idle => None,
        SyncStatus::Pending => Some("converting..."),
        SyncStatus::Failed => Some("转换失败 Conversion failed"),
    }
}
