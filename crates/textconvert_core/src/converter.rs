//! Converter configuration supplied by the host application.

use crate::ports::{ConversionPort, FormatPort};
use crate::side::{Direction, Side};

const DEFAULT_TITLE: &str = "Untitled";

/// Everything the host plugs into the widget.
///
/// Absent ports disable the matching capability: without `forward`, edits of
/// the first pane never reach the second; without either conversion the panes
/// are independent editors.
#[derive(Debug, Clone)]
pub struct Converter {
    pub first_title: String,
    pub second_title: String,
    pub first_language: Option<String>,
    pub second_language: Option<String>,
    pub forward: Option<ConversionPort>,
    pub backward: Option<ConversionPort>,
    pub first_format: Option<FormatPort>,
    pub second_format: Option<FormatPort>,
}

impl Converter {
    /// A converter with titles only and every port absent.
    pub fn new(first_title: impl Into<String>, second_title: impl Into<String>) -> Self {
        Self {
            first_title: first_title.into(),
            second_title: second_title.into(),
            first_language: None,
            second_language: None,
            forward: None,
            backward: None,
            first_format: None,
            second_format: None,
        }
    }

    pub fn with_forward(mut self, port: ConversionPort) -> Self {
        self.forward = Some(port);
        self
    }

    pub fn with_backward(mut self, port: ConversionPort) -> Self {
        self.backward = Some(port);
        self
    }

    pub fn with_first_format(mut self, port: FormatPort) -> Self {
        self.first_format = Some(port);
        self
    }

    pub fn with_second_format(mut self, port: FormatPort) -> Self {
        self.second_format = Some(port);
        self
    }

    pub fn with_languages(
        mut self,
        first: Option<impl Into<String>>,
        second: Option<impl Into<String>>,
    ) -> Self {
        self.first_language = first.map(Into::into);
        self.second_language = second.map(Into::into);
        self
    }

    pub fn conversion(&self, direction: Direction) -> Option<&ConversionPort> {
        match direction {
            Direction::Forward => self.forward.as_ref(),
            Direction::Backward => self.backward.as_ref(),
        }
    }

    pub fn formatter(&self, side: Side) -> Option<&FormatPort> {
        match side {
            Side::First => self.first_format.as_ref(),
            Side::Second => self.second_format.as_ref(),
        }
    }

    pub fn title(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first_title,
            Side::Second => &self.second_title,
        }
    }

    pub fn language(&self, side: Side) -> Option<&str> {
        match side {
            Side::First => self.first_language.as_deref(),
            Side::Second => self.second_language.as_deref(),
        }
    }

    /// True when an edit in either pane can update the other.
    pub fn is_linked(&self) -> bool {
        self.forward.is_some() || self.backward.is_some()
    }
}

impl Default for Converter {
    /// Two untitled panes mirrored by identity conversions.
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_TITLE)
            .with_forward(ConversionPort::identity())
            .with_backward(ConversionPort::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_converter_mirrors_both_ways() {
        let converter = Converter::default();
        assert_eq!(converter.title(Side::First), "Untitled");
        assert_eq!(converter.title(Side::Second), "Untitled");
        assert!(converter.conversion(Direction::Forward).is_some());
        assert!(converter.conversion(Direction::Backward).is_some());
        assert!(converter.formatter(Side::First).is_none());
        assert!(converter.is_linked());
    }

    #[test]
    fn bare_converter_leaves_panes_independent() {
        let converter = Converter::new("A", "B").with_languages(Some("json"), None::<String>);
        assert!(!converter.is_linked());
        assert_eq!(converter.language(Side::First), Some("json"));
        assert_eq!(converter.language(Side::Second), None);
    }
}
