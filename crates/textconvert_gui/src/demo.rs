//! Converter sets the desktop app ships with.
//!
//! Selected at startup through `TEXTCONVERT_DEMO` (`json`, `base64`, or
//! `identity`; default `json`).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::str::FromStr;
use textconvert_core::{ConversionPort, Converter, FormatPort, IndentWidth};
use thiserror::Error;

const DEMO_ENV: &str = "TEXTCONVERT_DEMO";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Unknown demo '{0}' (expected json, base64 or identity)")]
    UnknownDemo(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoKind {
    /// Compact JSON on the left, pretty JSON on the right.
    #[default]
    Json,
    /// Plain text on the left, its Base64 encoding on the right.
    Base64,
    /// Two mirrored untitled panes.
    Identity,
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "json" => Ok(Self::Json),
            "base64" | "b64" => Ok(Self::Base64),
            "identity" | "mirror" => Ok(Self::Identity),
            other => Err(DemoError::UnknownDemo(other.to_string())),
        }
    }
}

impl DemoKind {
    /// Reads `TEXTCONVERT_DEMO`; unset selects [`DemoKind::Json`].
    ///
    /// # Errors
    /// Returns [`DemoError::UnknownDemo`] for unrecognized values.
    pub fn from_env() -> Result<Self, DemoError> {
        match std::env::var(DEMO_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn converter(self) -> Converter {
        match self {
            Self::Json => json_converter(),
            Self::Base64 => base64_converter(),
            Self::Identity => Converter::default(),
        }
    }
}

/// Re-serializes JSON with `indent` (Tab or N spaces).
pub fn format_json(input: &str, indent: IndentWidth) -> Result<String, DemoError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let unit = indent.unit();
    let mut out = Vec::with_capacity(input.len());
    let formatter = serde_json::ser::PrettyFormatter::with_indent(unit.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

pub fn compact_json(input: &str) -> Result<String, DemoError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string(&value)?)
}

pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn decode_base64(input: &str) -> Result<String, DemoError> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

fn json_converter() -> Converter {
    Converter::new("JSON (compact)", "JSON (pretty)")
        .with_languages(Some("json"), Some("json"))
        .with_forward(ConversionPort::new(|input: &str| {
            format_json(input, IndentWidth::default())
        }))
        .with_backward(ConversionPort::new(compact_json))
        .with_second_format(FormatPort::new(format_json))
}

fn base64_converter() -> Converter {
    Converter::new("Text", "Base64")
        .with_forward(ConversionPort::map(encode_base64))
        .with_backward(ConversionPort::new(decode_base64))
}
