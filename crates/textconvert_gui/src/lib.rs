//! Desktop host for the dual-pane converter.
//!
//! Exposes a `run` helper so the workspace root can launch the native UI
//! without duplicating initialization logic.

mod app;
/// Built-in converter sets selectable at startup.
pub mod demo;
/// Native clipboard and file dialog capabilities.
pub mod host;

use app::TextConvertApp;
use eframe::egui;
use textconvert_core::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "textconvert_core=info,textconvert_gui=info";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the desktop UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including an
/// unknown `TEXTCONVERT_DEMO` value.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let demo = demo::DemoKind::from_env().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let config = EngineConfig::from_env();
    info!(
        "starting {:?} demo with {:?} stale policy",
        demo, config.stale_policy
    );
    let app = TextConvertApp::new(demo.converter(), config, host::native_capabilities());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("TextConvert"),
        ..Default::default()
    };

    eframe::run_native("TextConvert", options, Box::new(|_cc| Ok(Box::new(app))))
}
