//! IME composition tracking from raw egui input events.

use eframe::egui;

/// Folds this frame's IME events into the composing flag carried over from
/// the previous frame.
///
/// A non-empty preedit starts composition; a commit, an empty preedit, or
/// IME shutdown ends it.
pub(super) fn track_composition(composing: bool, events: &[egui::Event]) -> bool {
    events.iter().fold(composing, |composing, event| match event {
        egui::Event::Ime(egui::ImeEvent::Enabled) => composing,
        egui::Event::Ime(egui::ImeEvent::Preedit(text)) => !text.is_empty(),
        egui::Event::Ime(egui::ImeEvent::Commit(_)) => false,
        egui::Event::Ime(egui::ImeEvent::Disabled) => false,
        _ => composing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ime(event: egui::ImeEvent) -> egui::Event {
        egui::Event::Ime(event)
    }

    #[test]
    fn preedit_starts_and_commit_ends_composition() {
        let composing = track_composition(
            false,
            &[
                ime(egui::ImeEvent::Enabled),
                ime(egui::ImeEvent::Preedit("に".to_string())),
            ],
        );
        assert!(composing);

        let composing =
            track_composition(composing, &[ime(egui::ImeEvent::Commit("日".to_string()))]);
        assert!(!composing);
    }

    #[test]
    fn composition_persists_across_quiet_frames() {
        assert!(track_composition(true, &[]));
        assert!(track_composition(
            true,
            &[egui::Event::Text("ignored".to_string())]
        ));
    }

    #[test]
    fn empty_preedit_or_disable_ends_composition() {
        assert!(!track_composition(
            true,
            &[ime(egui::ImeEvent::Preedit(String::new()))]
        ));
        assert!(!track_composition(true, &[ime(egui::ImeEvent::Disabled)]));
    }
}
