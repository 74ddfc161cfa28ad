//! Single-slot status messages with auto-expiry.
//!
//! A new post replaces the current message and restarts its timer; posts
//! never stack.

use crate::model::DEFAULT_STATUS_DURATION_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    /// Monotonic time (ms) at which the message hides.
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBoard {
    current: Option<StatusMessage>,
    duration_ms: f64,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION_MS)
    }
}

impl StatusBoard {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            current: None,
            duration_ms,
        }
    }

    /// Shows `text` until `now_ms + duration`.
    pub fn post(&mut self, text: impl Into<String>, now_ms: f64) {
        let text = text.into();
        log::debug!("Status: {}", text);
        self.current = Some(StatusMessage {
            text,
            expires_at_ms: now_ms + self.duration_ms,
        });
    }

    /// Hides an expired message. Returns true if visibility changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match &self.current {
            Some(msg) if now_ms >= msg.expires_at_ms => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_expire() {
        let mut board = StatusBoard::default();
        board.post("Armed", 100.0);
        assert_eq!(board.text(), Some("Armed"));
        assert!(!board.tick(2099.0));
        assert!(board.tick(2100.0));
        assert!(board.current().is_none());
        assert!(!board.tick(5000.0));
    }

    #[test]
    fn test_second_post_restarts_timer() {
        let mut board = StatusBoard::default();
        board.post("Armed", 0.0);
        board.post("Spinning...", 1500.0);
        let msg = board.current().unwrap();
        assert_eq!(msg.text, "Spinning...");
        assert_eq!(msg.expires_at_ms, 3500.0);
        // The first post's expiry must not hide the second message.
        assert!(!board.tick(2000.0));
        assert_eq!(board.text(), Some("Spinning..."));
        assert!(board.tick(3500.0));
    }

    #[test]
    fn test_custom_duration() {
        let mut board = StatusBoard::new(500.0);
        board.post("x", 10.0);
        assert_eq!(board.current().unwrap().expires_at_ms, 510.0);
        board.clear();
        assert!(board.current().is_none());
    }
}
