//! End-to-end sync workflows through the public API.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use textconvert_core::actions::{self, Outcome};
use textconvert_core::capability::{FilePicker, FileSaver};
use textconvert_core::{
    Capabilities, CapabilityError, ChangeOrigin, ConversionPort, Converter, EngineConfig,
    FormatPort, IndentWidth, PortError, Side, StalePolicy, SyncEngine,
};

const SETTLE: Duration = Duration::from_secs(2);

fn upper_lower() -> Converter {
    Converter::new("lower", "upper")
        .with_forward(ConversionPort::map(str::to_uppercase))
        .with_backward(ConversionPort::map(str::to_lowercase))
}

/// Reads the chosen file from disk like a native picker would.
struct DiskPicker(std::path::PathBuf);

impl FilePicker for DiskPicker {
    fn pick_text_file(&mut self) -> Result<Option<String>, CapabilityError> {
        Ok(Some(std::fs::read_to_string(&self.0)?))
    }
}

/// Writes downloads into a directory.
struct DirSaver {
    dir: std::path::PathBuf,
    names: Arc<Mutex<Vec<String>>>,
}

impl FileSaver for DirSaver {
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), CapabilityError> {
        std::fs::write(self.dir.join(file_name), bytes)?;
        self.names
            .lock()
            .expect("names lock")
            .push(file_name.to_string());
        Ok(())
    }
}

#[test]
fn typing_round_trip_follows_each_direction() {
    let mut engine = SyncEngine::new(upper_lower(), EngineConfig::default());

    engine.on_pane_changed(Side::First, "abc", ChangeOrigin::Typed);
    assert_eq!(engine.content(Side::First), "abc");
    assert!(engine.settle(SETTLE));
    assert_eq!(engine.displayed(Side::Second), "ABC");

    engine.on_pane_changed(Side::Second, "XYZ", ChangeOrigin::Typed);
    assert!(engine.settle(SETTLE));
    assert_eq!(engine.displayed(Side::First), "xyz");
}

#[test]
fn async_formatter_output_is_what_the_target_displays() {
    let converter = upper_lower().with_second_format(FormatPort::from_async(
        |input: String, indent: IndentWidth| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok::<String, PortError>(format!("{}{}", indent.unit(), input))
        },
    ));
    let mut engine = SyncEngine::new(converter, EngineConfig::default());

    engine.on_pane_changed(Side::First, "abc", ChangeOrigin::Typed);
    assert!(engine.settle(SETTLE));

    assert_eq!(engine.displayed(Side::Second), "    ABC");
}

#[test]
fn sequenced_and_unsequenced_policies_resolve_race_differently() {
    let slow_then_fast = || {
        ConversionPort::from_async(|input: String| async move {
            let delay = if input == "a" { 150 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok::<String, PortError>(format!("<{}>", input))
        })
    };

    for (policy, expected) in [
        (StalePolicy::DropStale, "<ab>"),
        (StalePolicy::LastResolvedWins, "<a>"),
    ] {
        let config = EngineConfig {
            stale_policy: policy,
            ..EngineConfig::default()
        };
        let converter = Converter::new("in", "out").with_forward(slow_then_fast());
        let mut engine = SyncEngine::new(converter, config);

        engine.on_pane_changed(Side::First, "a", ChangeOrigin::Typed);
        engine.on_pane_changed(Side::First, "ab", ChangeOrigin::Typed);
        assert!(engine.settle(SETTLE), "policy: {:?}", policy);

        assert_eq!(engine.displayed(Side::Second), expected, "policy: {:?}", policy);
    }
}

#[test]
fn upload_then_download_round_trips_through_disk() {
    let dir = TempDir::new().expect("temp dir");
    let source = dir.path().join("input.txt");
    std::fs::write(&source, "from disk").expect("write input");
    let names = Arc::new(Mutex::new(Vec::new()));
    let mut caps = Capabilities::none()
        .with_file_picker(DiskPicker(source))
        .with_file_saver(DirSaver {
            dir: dir.path().to_path_buf(),
            names: names.clone(),
        });
    let mut engine = SyncEngine::new(upper_lower(), EngineConfig::default());

    let notice = actions::upload(&mut engine, &mut caps, Side::First).expect("notice");
    assert_eq!(notice.outcome, Outcome::Done);
    assert!(engine.settle(SETTLE));

    let notice = actions::download(&engine, &mut caps, Side::Second, chrono::Utc::now());
    assert_eq!(notice.outcome, Outcome::Done);

    let names = names.lock().expect("names lock");
    assert_eq!(names.len(), 1);
    assert!(names[0].ends_with(".txt"));
    let saved = std::fs::read_to_string(dir.path().join(&names[0])).expect("read saved");
    assert_eq!(saved, "FROM DISK");
}

#[test]
fn missing_picker_file_reports_failure() {
    let dir = TempDir::new().expect("temp dir");
    let mut caps =
        Capabilities::none().with_file_picker(DiskPicker(dir.path().join("missing.txt")));
    let mut engine = SyncEngine::new(upper_lower(), EngineConfig::default());

    let notice = actions::upload(&mut engine, &mut caps, Side::First).expect("notice");

    assert_eq!(notice.outcome, Outcome::Failed);
    assert_eq!(engine.content(Side::First), "");
}

#[test]
fn clear_with_identity_converter_empties_both_panes() {
    let mut engine = SyncEngine::new(Converter::default(), EngineConfig::default());
    engine.on_pane_changed(Side::Second, "text", ChangeOrigin::Typed);
    assert!(engine.settle(SETTLE));
    assert_eq!(engine.content(Side::First), "text");

    actions::clear(&mut engine, Side::First);
    assert!(engine.settle(SETTLE));

    assert_eq!(engine.content(Side::First), "");
    assert_eq!(engine.content(Side::Second), "");
}
