use super::*;
use std::sync::{Arc, Mutex};
use textconvert_core::capability::Clipboard;
use textconvert_core::{CapabilityError, ConversionPort, StalePolicy};

const SETTLE: Duration = Duration::from_secs(2);

#[derive(Clone, Default)]
struct SharedClipboard {
    contents: Arc<Mutex<String>>,
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        *self.contents.lock().expect("clipboard lock") = text.to_string();
        Ok(())
    }

    fn read_text(&mut self) -> Result<String, CapabilityError> {
        Ok(self.contents.lock().expect("clipboard lock").clone())
    }
}

fn case_converter() -> Converter {
    Converter::new("lower", "upper")
        .with_forward(ConversionPort::map(str::to_uppercase))
        .with_backward(ConversionPort::map(str::to_lowercase))
}

fn make_app(capabilities: Capabilities) -> TextConvertApp {
    TextConvertApp::new(case_converter(), EngineConfig::default(), capabilities)
}

#[test]
fn typed_edit_reaches_engine_on_next_pump() {
    let mut app = make_app(Capabilities::none());
    app.engine.surface_mut(Side::First).text_mut().push_str("abc");
    app.engine.defer_edit(Side::First, "abc".to_string());
    assert!(app.needs_repaint());

    app.pump(false);
    assert!(app.engine.settle(SETTLE));

    assert_eq!(app.engine.displayed(Side::Second), "ABC");
    assert!(app.engine.surface(Side::Second).revision() > 1);
}

#[test]
fn composing_input_holds_edit_back() {
    let mut app = make_app(Capabilities::none());
    app.engine.defer_edit(Side::First, "か".to_string());

    app.pump(true);
    assert_eq!(app.engine.content(Side::First), "");

    app.pump(false);
    assert_eq!(app.engine.content(Side::First), "か");
}

#[test]
fn copy_without_clipboard_shows_update_notice() {
    let mut app = make_app(Capabilities::none());

    app.apply_command(Side::First, PaneCommand::Copy);
    app.apply_command(Side::First, PaneCommand::Copy);

    let status = app.status.as_ref().expect("status");
    assert!(status.is_error);
    assert!(status.text.contains("please update the app"));
    assert_eq!(app.toasts.len(), 1, "repeated notices share one toast");
}

#[test]
fn paste_and_copy_go_through_clipboard() {
    let clipboard = SharedClipboard::default();
    *clipboard.contents.lock().expect("lock") = "from clipboard".to_string();
    let mut app = make_app(Capabilities::none().with_clipboard(clipboard.clone()));

    app.apply_command(Side::First, PaneCommand::Paste);
    assert_eq!(app.engine.displayed(Side::First), "from clipboard");
    assert!(app.engine.settle(SETTLE));

    app.apply_command(Side::Second, PaneCommand::Copy);
    assert_eq!(*clipboard.contents.lock().expect("lock"), "FROM CLIPBOARD");
    let status = app.status.as_ref().expect("status");
    assert!(!status.is_error);
    assert_eq!(status.text, "已复制到剪切板。Copied to clipboard.");
}

#[test]
fn clear_and_settings_commands_update_engine() {
    let mut app = make_app(Capabilities::none());
    app.engine.defer_edit(Side::Second, "TEXT".to_string());
    app.pump(false);
    assert!(app.engine.settle(SETTLE));

    app.apply_command(Side::Second, PaneCommand::Clear);
    app.apply_command(Side::Second, PaneCommand::SetLineWrapping(true));
    app.apply_command(Side::Second, PaneCommand::SetBeautify(false));
    app.apply_command(Side::Second, PaneCommand::SetIndent(IndentWidth::TAB));
    assert!(app.engine.settle(SETTLE));

    assert_eq!(app.engine.content(Side::First), "");
    let settings = app.engine.pane(Side::Second).settings();
    assert!(settings.line_wrapping);
    assert!(!settings.beautify);
    assert!(settings.indent_width.is_tab());
    assert!(app.engine.surface(Side::Second).options().line_wrapping);
    assert!(app.status.is_none(), "settings changes raise no notice");
}

#[test]
fn feedback_expires() {
    let mut app = make_app(Capabilities::none());
    app.apply_command(Side::First, PaneCommand::Download);
    assert!(app.status.is_some());

    app.expire_feedback(Instant::now() + STATUS_TTL + Duration::from_millis(1));

    assert!(app.status.is_none());
    assert!(app.toasts.is_empty());
}

#[test]
fn app_uses_configured_stale_policy() {
    let config = EngineConfig {
        stale_policy: StalePolicy::LastResolvedWins,
        ..EngineConfig::default()
    };
    let app = TextConvertApp::new(Converter::default(), config, Capabilities::none());
    assert_eq!(app.engine.config().stale_policy, StalePolicy::LastResolvedWins);
}
