//! Core library for the dual-pane text converter (panes, ports, sync engine).

/// Copy/paste/upload/download/clear handlers and their user notices.
pub mod actions;
/// Pane text buffers and per-pane presentation settings.
pub mod buffer;
/// Host capability traits (clipboard, file picker, file saver).
pub mod capability;
/// Configuration loading and defaults.
pub mod config;
/// Converter configuration supplied by the host.
pub mod converter;
/// One-tick deferral of editor change notifications.
pub mod deferred;
/// Bidirectional synchronization engine.
pub mod engine;
/// Error types for ports, capabilities, and configuration.
pub mod error;
/// Conversion and format function wrappers.
pub mod ports;
/// Selection clamping for programmatic replacements.
pub mod selection;
/// Pane identities and the two-sided container.
pub mod side;
/// Editor surface interface and the in-memory surface.
pub mod surface;

mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use buffer::{IndentWidth, Pane, PaneSettings, SyncStatus, TextBuffer};
pub use capability::Capabilities;
pub use config::{EngineConfig, StalePolicy};
pub use converter::Converter;
pub use engine::{ChangeOrigin, SyncEngine};
pub use error::{CapabilityError, PortError, SyncError};
pub use ports::{ConversionPort, FormatPort};
pub use selection::{preserve_selection, SelectionRange};
pub use side::{Direction, Side, Sides};
pub use surface::{EditorSurface, MemorySurface, SurfaceOptions};
