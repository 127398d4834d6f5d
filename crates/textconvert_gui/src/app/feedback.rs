//! UI-facing feedback helpers for status and toasts.

use super::{StatusMessage, TextConvertApp, ToastMessage, STATUS_TTL, TOAST_LIMIT, TOAST_TTL};
use std::time::Instant;
use textconvert_core::actions::Notice;

impl TextConvertApp {
    /// Shows an action notice in the status bar and the toast queue.
    pub(super) fn show_notice(&mut self, notice: Notice) {
        self.set_status(notice.message(), notice.is_error());
    }

    /// Sets the status banner message and mirrors it into the toast queue.
    pub(super) fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        let text = text.into();
        self.status = Some(StatusMessage {
            text: text.clone(),
            is_error,
            expires_at: Instant::now() + STATUS_TTL,
        });
        self.push_toast(text, is_error);
    }

    fn push_toast(&mut self, text: String, is_error: bool) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            text,
            is_error,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Drops the status banner and toasts whose time is up.
    pub(super) fn expire_feedback(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if now >= status.expires_at {
                self.status = None;
            }
        }
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }
}
