//! Deferral of editor change notifications until input composition settles.
//!
//! Surfaces report edits in the frame they happen, but the text is only read
//! and converted on the following tick, and never while an input method is
//! still composing.

use crate::side::{Side, Sides};

#[derive(Debug, Default)]
pub struct DeferredEdits {
    pending: Sides<Option<String>>,
}

impl DeferredEdits {
    /// Records the latest full text of `side`, replacing any unflushed edit.
    pub fn defer(&mut self, side: Side, text: String) {
        self.pending[side] = Some(text);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.first.is_none() && self.pending.second.is_none()
    }

    /// Drains settled edits; nothing is released while `composing`.
    pub fn take_ready(&mut self, composing: bool) -> Vec<(Side, String)> {
        if composing {
            return Vec::new();
        }
        Side::BOTH
            .into_iter()
            .filter_map(|side| self.pending[side].take().map(|text| (side, text)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_edit_per_side_wins() {
        let mut deferred = DeferredEdits::default();
        deferred.defer(Side::First, "a".to_string());
        deferred.defer(Side::First, "ab".to_string());
        deferred.defer(Side::Second, "z".to_string());

        let ready = deferred.take_ready(false);
        assert_eq!(
            ready,
            vec![(Side::First, "ab".to_string()), (Side::Second, "z".to_string())]
        );
        assert!(deferred.is_empty());
    }

    #[test]
    fn composition_holds_edits_back() {
        let mut deferred = DeferredEdits::default();
        deferred.defer(Side::Second, "にほ".to_string());
        assert!(deferred.take_ready(true).is_empty());
        assert!(!deferred.is_empty());

        deferred.defer(Side::Second, "日本".to_string());
        assert_eq!(
            deferred.take_ready(false),
            vec![(Side::Second, "日本".to_string())]
        );
    }
}
