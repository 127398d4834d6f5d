//! Native egui application shell around the sync engine.

mod editing;
mod feedback;
mod ime;
mod style;
mod ui;

use eframe::egui;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use style::*;
use textconvert_core::actions::{self, Notice};
use textconvert_core::{Capabilities, Converter, EngineConfig, IndentWidth, Side, Sides, SyncEngine};
use tracing::debug;

/// Desktop app: two editor panes kept in sync by a [`SyncEngine`].
///
/// The `update` loop never blocks on conversions; it flushes deferred edits,
/// applies whatever the conversion worker finished, then renders.
pub(crate) struct TextConvertApp {
    engine: SyncEngine,
    capabilities: Capabilities,
    /// Surface revision last pushed into each pane's egui cursor state.
    synced_revisions: Sides<Option<u64>>,
    composing: bool,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    style_applied: bool,
}

/// Requests raised while rendering a pane, applied after the frame's UI pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaneCommand {
    Copy,
    Paste,
    Upload,
    Download,
    Clear,
    SetLineWrapping(bool),
    SetBeautify(bool),
    SetIndent(IndentWidth),
}

struct StatusMessage {
    text: String,
    is_error: bool,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    is_error: bool,
    expires_at: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
const PENDING_REPAINT: Duration = Duration::from_millis(30);
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
#[doc = "Minimum enforced window size to keep both panes usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 420.0];

impl TextConvertApp {
    pub(crate) fn new(converter: Converter, config: EngineConfig, capabilities: Capabilities) -> Self {
        Self {
            engine: SyncEngine::new(converter, config),
            capabilities,
            synced_revisions: Sides::default(),
            composing: false,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            style_applied: false,
        }
    }

    /// Runs one pane command against the engine and host capabilities.
    pub(crate) fn apply_command(&mut self, side: Side, command: PaneCommand) {
        debug!(side = side.label(), "pane command {:?}", command);
        let notice: Option<Notice> = match command {
            PaneCommand::Copy => Some(actions::copy(&self.engine, &mut self.capabilities, side)),
            PaneCommand::Paste => Some(actions::paste(
                &mut self.engine,
                &mut self.capabilities,
                side,
            )),
            PaneCommand::Upload => actions::upload(&mut self.engine, &mut self.capabilities, side),
            PaneCommand::Download => Some(actions::download(
                &self.engine,
                &mut self.capabilities,
                side,
                chrono::Utc::now(),
            )),
            PaneCommand::Clear => {
                actions::clear(&mut self.engine, side);
                None
            }
            PaneCommand::SetLineWrapping(enabled) => {
                self.engine.set_line_wrapping(side, enabled);
                None
            }
            PaneCommand::SetBeautify(enabled) => {
                self.engine.set_beautify(side, enabled);
                None
            }
            PaneCommand::SetIndent(width) => {
                self.engine.set_indent_width(side, width);
                None
            }
        };
        if let Some(notice) = notice {
            self.show_notice(notice);
        }
    }

    /// Moves sync forward by one frame: deferred edits first, then results.
    pub(crate) fn pump(&mut self, composing: bool) {
        self.composing = composing;
        self.engine.flush_deferred(composing);
        self.engine.poll();
    }

    fn needs_repaint(&self) -> bool {
        !self.engine.is_idle() || self.engine.has_deferred() || !self.toasts.is_empty()
    }
}

impl eframe::App for TextConvertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.expire_feedback(Instant::now());

        let composing = ctx.input(|input| ime::track_composition(self.composing, &input.events));
        self.pump(composing);

        self.render_header(ctx);
        self.render_status_bar(ctx);
        let commands = self.render_panes(ctx);
        for (side, command) in commands {
            self.apply_command(side, command);
        }
        self.render_toasts(ctx);

        if self.needs_repaint() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

#[cfg(test)]
mod tests;
