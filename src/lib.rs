//! Root crate facade for the TextConvert sync core and desktop GUI.

pub use textconvert_core::{
    actions, buffer, capability, config, converter, engine, error, ports, selection, side,
    surface, Capabilities, ChangeOrigin, ConversionPort, Converter, EngineConfig, FormatPort,
    Side, StalePolicy, SyncEngine,
};

#[cfg(feature = "gui")]
pub use textconvert_gui::demo;
