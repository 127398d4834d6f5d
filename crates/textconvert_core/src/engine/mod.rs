//! Bidirectional synchronization between the two panes.
//!
//! An edit of one pane is applied to that pane immediately and handed to the
//! conversion for its direction; the result lands in the opposite pane,
//! optionally through that pane's beautifier. Port calls run on the
//! conversion worker and come back through [`SyncEngine::poll`].
//!
//! Every write into a pane carries a ticket from that pane's counter. With
//! [`StalePolicy::DropStale`] only the newest ticket may write, so a slow
//! conversion can never overwrite the result of a newer one, and a direct
//! edit of a pane supersedes conversions still heading into it.

use crate::buffer::{IndentWidth, Pane, SyncStatus};
use crate::config::{EngineConfig, StalePolicy};
use crate::converter::Converter;
use crate::deferred::DeferredEdits;
use crate::error::PortError;
use crate::side::{Direction, Side, Sides};
use crate::surface::{EditorSurface, MemorySurface};
use crate::worker::{
    spawn_conversion_worker, ConversionWorker, JobStage, PortCall, SyncJob, SyncOutcome,
};
use crossbeam_channel::RecvTimeoutError;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Where a content change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Live typing in the surface; the surface already shows the text and
    /// keeps managing its own cursor.
    Typed,
    /// Whole-content replacement by paste, upload, or clear. The engine pushes
    /// the text into the source surface, beautified when enabled.
    Replaced,
}

/// Orchestrates panes, ports, and surfaces for one widget instance.
pub struct SyncEngine<S: EditorSurface = MemorySurface> {
    converter: Converter,
    config: EngineConfig,
    panes: Sides<Pane>,
    surfaces: Sides<S>,
    /// Newest ticket issued for writes into each pane.
    issued: Sides<u64>,
    in_flight: Sides<usize>,
    failed: Sides<bool>,
    deferred: DeferredEdits,
    worker: ConversionWorker,
}

impl SyncEngine<MemorySurface> {
    /// Engine with in-memory surfaces.
    pub fn new(converter: Converter, config: EngineConfig) -> Self {
        Self::with_surfaces(converter, config, MemorySurface::new(), MemorySurface::new())
    }
}

impl<S: EditorSurface> SyncEngine<S> {
    /// Engine driving host-provided surfaces. Both surfaces are loaded with
    /// the (empty) initial content before this returns.
    pub fn with_surfaces(converter: Converter, config: EngineConfig, first: S, second: S) -> Self {
        let panes = Sides::from_fn(|side| {
            Pane::new(
                converter.title(side),
                converter.language(side).map(ToString::to_string),
                config.pane_defaults,
            )
        });
        let worker = spawn_conversion_worker(config.conversion_timeout);
        let mut engine = Self {
            converter,
            config,
            panes,
            surfaces: Sides::new(first, second),
            issued: Sides::default(),
            in_flight: Sides::default(),
            failed: Sides::default(),
            deferred: DeferredEdits::default(),
            worker,
        };
        engine.load();
        engine
    }

    /// Loads every surface with its pane's content, language, and options.
    pub fn load(&mut self) {
        for side in Side::BOTH {
            let pane = &self.panes[side];
            self.surfaces[side].load(pane.content(), pane.language(), &pane.surface_options());
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pane(&self, side: Side) -> &Pane {
        &self.panes[side]
    }

    pub fn content(&self, side: Side) -> &str {
        self.panes[side].content()
    }

    pub fn surface(&self, side: Side) -> &S {
        &self.surfaces[side]
    }

    pub fn surface_mut(&mut self, side: Side) -> &mut S {
        &mut self.surfaces[side]
    }

    /// Text currently shown by the surface of `side`.
    pub fn displayed(&self, side: Side) -> &str {
        self.surfaces[side].text()
    }

    /// True when no conversion or format call is outstanding.
    pub fn is_idle(&self) -> bool {
        self.in_flight.first == 0 && self.in_flight.second == 0
    }

    /// Applies a new full text for `side` and starts syncing the other pane.
    pub fn on_pane_changed(&mut self, side: Side, text: impl Into<String>, origin: ChangeOrigin) {
        let text = text.into();
        let source_ticket = self.next_ticket(side);
        self.failed[side] = false;
        self.panes[side].buffer_mut().set_content(text.clone());
        self.trace(side, source_ticket, "edit");

        if origin == ChangeOrigin::Replaced {
            self.push_replacement(side, source_ticket, text.clone());
        }
        self.refresh_status(side);

        let direction = Direction::from_source(side);
        let Some(port) = self.converter.conversion(direction).cloned() else {
            debug!(side = side.label(), "no conversion for {:?}; panes stay independent", direction);
            return;
        };
        let target = direction.target();
        let ticket = self.next_ticket(target);
        self.dispatch(SyncJob {
            target,
            ticket,
            stage: JobStage::Convert,
            input: text,
            call: PortCall::Convert(port),
        });
    }

    /// Records a surface edit to be dispatched on the next [`Self::flush_deferred`].
    ///
    /// The held edit supersedes any conversion still heading into `side`.
    pub fn defer_edit(&mut self, side: Side, text: String) {
        self.next_ticket(side);
        self.deferred.defer(side, text);
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Dispatches deferred edits as typed changes unless input is composing.
    ///
    /// # Returns
    /// The number of edits dispatched.
    pub fn flush_deferred(&mut self, composing: bool) -> usize {
        let ready = self.deferred.take_ready(composing);
        let count = ready.len();
        for (side, text) in ready {
            self.on_pane_changed(side, text, ChangeOrigin::Typed);
        }
        count
    }

    /// Applies every outcome the worker has finished so far without blocking.
    ///
    /// # Returns
    /// The number of outcomes processed, including discarded stale ones.
    pub fn poll(&mut self) -> usize {
        let mut processed = 0;
        while let Some(outcome) = self.worker.try_recv() {
            self.apply_outcome(outcome);
            processed += 1;
        }
        processed
    }

    /// Blocks until nothing is in flight or `timeout` elapses.
    ///
    /// # Returns
    /// `true` when the engine is idle.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.poll();
            if self.is_idle() {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.worker.recv_timeout(remaining) {
                Ok(outcome) => self.apply_outcome(outcome),
                Err(RecvTimeoutError::Timeout) => return self.is_idle(),
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("conversion worker disconnected while settling");
                    return false;
                }
            }
        }
    }

    /// Toggles beautify for `side`. Existing text is left as is.
    pub fn set_beautify(&mut self, side: Side, enabled: bool) {
        self.panes[side].settings_mut().beautify = enabled;
    }

    pub fn set_indent_width(&mut self, side: Side, width: IndentWidth) {
        self.panes[side].settings_mut().indent_width = width;
        self.reconfigure(side);
    }

    pub fn set_line_wrapping(&mut self, side: Side, enabled: bool) {
        self.panes[side].settings_mut().line_wrapping = enabled;
        self.reconfigure(side);
    }

    fn reconfigure(&mut self, side: Side) {
        let options = self.panes[side].surface_options();
        self.surfaces[side].reconfigure(&options);
    }

    fn next_ticket(&mut self, side: Side) -> u64 {
        self.issued[side] = self.issued[side].wrapping_add(1);
        self.issued[side]
    }

    /// Shows replaced text in the source surface, through its beautifier when
    /// enabled.
    fn push_replacement(&mut self, side: Side, ticket: u64, text: String) {
        match self.format_call(side) {
            Some(call) => self.dispatch(SyncJob {
                target: side,
                ticket,
                stage: JobStage::Format,
                input: text,
                call,
            }),
            None => self.surfaces[side].replace_content(&text),
        }
    }

    /// The beautify call for `side`, when enabled and provided.
    fn format_call(&self, side: Side) -> Option<PortCall> {
        let settings = self.panes[side].settings();
        if !settings.beautify {
            return None;
        }
        self.converter
            .formatter(side)
            .map(|port| PortCall::Format(port.clone(), settings.indent_width))
    }

    fn dispatch(&mut self, job: SyncJob) {
        let target = job.target;
        self.trace(target, job.ticket, "dispatch");
        match self.worker.submit(job) {
            Ok(()) => {
                self.in_flight[target] += 1;
                self.refresh_status(target);
            }
            Err(outcome) => self.resolve(outcome),
        }
    }

    fn apply_outcome(&mut self, outcome: SyncOutcome) {
        let target = outcome.target;
        self.in_flight[target] = self.in_flight[target].saturating_sub(1);
        self.resolve(outcome);
    }

    fn resolve(&mut self, outcome: SyncOutcome) {
        let SyncOutcome {
            target,
            ticket,
            stage,
            input,
            result,
            elapsed,
        } = outcome;

        if self.config.stale_policy == StalePolicy::DropStale && ticket != self.issued[target] {
            self.trace(target, ticket, "drop_stale");
            self.refresh_status(target);
            return;
        }
        if self.config.sync_trace {
            info!(
                target: "textconvert_core::sync",
                event = "resolved",
                side = target.label(),
                ticket = ticket,
                stage = ?stage,
                ok = result.is_ok(),
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "sync trace"
            );
        }

        match (stage, result) {
            (JobStage::Convert, Ok(converted)) => {
                self.failed[target] = false;
                self.panes[target].buffer_mut().set_content(converted.clone());
                match self.format_call(target) {
                    Some(call) => self.dispatch(SyncJob {
                        target,
                        ticket,
                        stage: JobStage::Format,
                        input: converted,
                        call,
                    }),
                    None => self.surfaces[target].replace_content(&converted),
                }
            }
            (JobStage::Convert, Err(err)) => {
                self.failed[target] = true;
                log_port_error(target, "conversion", &err);
            }
            (JobStage::Format, Ok(formatted)) => {
                self.panes[target].buffer_mut().set_content(formatted.clone());
                self.surfaces[target].replace_content(&formatted);
            }
            (JobStage::Format, Err(err)) => {
                log_port_error(target, "format", &err);
                self.surfaces[target].replace_content(&input);
            }
        }
        self.refresh_status(target);
    }

    fn refresh_status(&mut self, side: Side) {
        let status = if self.in_flight[side] > 0 {
            SyncStatus::Pending
        } else if self.failed[side] {
            SyncStatus::Failed
        } else {
            SyncStatus::Idle
        };
        self.panes[side].buffer_mut().set_status(status);
    }

    fn trace(&self, side: Side, ticket: u64, event: &str) {
        if !self.config.sync_trace {
            return;
        }
        info!(
            target: "textconvert_core::sync",
            event = event,
            side = side.label(),
            ticket = ticket,
            "sync trace"
        );
    }
}

fn log_port_error(side: Side, what: &str, err: &PortError) {
    warn!(side = side.label(), "{} failed: {}", what, err);
}
