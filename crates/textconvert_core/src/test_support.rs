//! Shared test-only helpers for textconvert_core.

use crate::capability::{Clipboard, FilePicker, FileSaver};
use crate::error::{CapabilityError, PortError};
use crate::ports::{ConversionPort, FormatPort};
use crate::{Converter, EngineConfig, StalePolicy, SyncEngine};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) const SETTLE: Duration = Duration::from_secs(2);

/// Forward upper-cases, backward lower-cases.
pub(crate) fn case_converter() -> Converter {
    Converter::new("lower", "upper")
        .with_forward(ConversionPort::map(str::to_uppercase))
        .with_backward(ConversionPort::map(str::to_lowercase))
}

/// Upper-cases after a delay picked by input length: one-char inputs are slow.
pub(crate) fn racing_upper(slow_ms: u64, fast_ms: u64) -> ConversionPort {
    ConversionPort::from_async(move |input: String| async move {
        let delay = if input.chars().count() == 1 {
            slow_ms
        } else {
            fast_ms
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok::<String, PortError>(input.to_uppercase())
    })
}

/// Wraps each line in brackets and prefixes the indent unit.
pub(crate) fn bracket_format() -> FormatPort {
    FormatPort::new(|input: &str, indent| {
        Ok::<_, std::convert::Infallible>(format!("[{}{}]", indent.unit(), input))
    })
}

pub(crate) fn failing_format() -> FormatPort {
    FormatPort::new(|_: &str, _| Err("formatter exploded"))
}

pub(crate) fn engine_with(converter: Converter) -> SyncEngine {
    SyncEngine::new(converter, EngineConfig::default())
}

pub(crate) fn engine_with_policy(converter: Converter, policy: StalePolicy) -> SyncEngine {
    let config = EngineConfig {
        stale_policy: policy,
        ..EngineConfig::default()
    };
    SyncEngine::new(converter, config)
}

/// Clipboard backed by a shared string; `fail` makes every call error.
#[derive(Clone, Default)]
pub(crate) struct FakeClipboard {
    pub(crate) contents: Arc<Mutex<String>>,
    pub(crate) fail: bool,
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        if self.fail {
            return Err(CapabilityError::Failed("permission denied".to_string()));
        }
        *self.contents.lock().expect("clipboard lock") = text.to_string();
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, CapabilityError> {
        if self.fail {
            return Err(CapabilityError::Failed("permission denied".to_string()));
        }
        Ok(self.contents.lock().expect("clipboard lock").clone())
    }
}

/// Picker that returns a fixed selection.
pub(crate) struct FakePicker(pub(crate) Option<String>);

impl FilePicker for FakePicker {
    fn pick_text_file(&mut self) -> Result<Option<String>, CapabilityError> {
        Ok(self.0.clone())
    }
}

/// Saver that records every file handed to it.
#[derive(Clone, Default)]
pub(crate) struct RecordingSaver {
    pub(crate) saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl FileSaver for RecordingSaver {
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), CapabilityError> {
        self.saved
            .lock()
            .expect("saver lock")
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
