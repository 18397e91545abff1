//! Single-slot transient notification state.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless evicted earlier.
pub const NOTICE_TTL: Duration = Duration::from_millis(3000);

/// Severity of a notice, controlling its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// A completed action.
    Success,
    /// A failed validation or request.
    Error,
}

/// One visible notice.
#[derive(Clone, Debug)]
pub struct Notice {
    /// Message shown verbatim.
    pub message: String,
    /// Color tone.
    pub severity: Severity,
    /// Deadline after which the notice removes itself.
    pub expires_at: Instant,
}

/// Holds at most one notice at a time.
///
/// There is no queue: a new notice evicts the current one, and a rapidly
/// superseded notice may never be seen. Eviction stamps a fresh deadline,
/// so the old notice's deadline never fires against the new one.
#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    /// Replace any visible notice with a new one expiring after [`NOTICE_TTL`].
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Notice {
            message: message.into(),
            severity,
            expires_at: now + NOTICE_TTL,
        });
    }

    /// Drop the notice once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|notice| now >= notice.expires_at)
        {
            self.current = None;
        }
    }

    /// The visible notice, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_show_evicts_the_first() {
        let now = Instant::now();
        let mut state = NoticeState::default();
        state.show("first", Severity::Info, now);
        state.show("second", Severity::Error, now);
        let notice = state.current().unwrap();
        assert_eq!(notice.message, "second");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn notice_expires_after_ttl() {
        let now = Instant::now();
        let mut state = NoticeState::default();
        state.show("hello", Severity::Success, now);

        state.tick(now + NOTICE_TTL - Duration::from_millis(1));
        assert!(state.current().is_some());

        state.tick(now + NOTICE_TTL);
        assert!(state.current().is_none());
    }

    #[test]
    fn eviction_restarts_the_deadline() {
        let now = Instant::now();
        let mut state = NoticeState::default();
        state.show("first", Severity::Info, now);
        let later = now + Duration::from_millis(2000);
        state.show("second", Severity::Info, later);

        // The first notice's deadline passing must not remove the second.
        state.tick(now + NOTICE_TTL);
        let notice = state.current().unwrap();
        assert_eq!(notice.message, "second");

        state.tick(later + NOTICE_TTL);
        assert!(state.current().is_none());
    }
}
