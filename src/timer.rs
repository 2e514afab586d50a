//! Deadline-based timers for the gesture engine.
//!
//! The engine runs on the host's event loop and never blocks, so a timer is just a
//! deadline plus the tag describing what to do when it is reached. An [`ArmedTimer`]
//! slot holds at most one pending deadline; the only ways to change it are
//! [`ArmedTimer::rearm`] (cancel, then replace) and [`ArmedTimer::cancel`], so two
//! competing callbacks of the same class can never coexist.

/// A single pending deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Armed<T> {
    pub deadline_ms: u64,
    pub tag: T,
}

/// Slot for at most one pending timer of a given class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedTimer<T> {
    slot: Option<Armed<T>>,
}

impl<T> Default for ArmedTimer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArmedTimer<T> {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Cancels whatever is pending and arms a new deadline.
    ///
    /// Returns the tag of the timer that was cancelled, if any.
    pub fn rearm(&mut self, deadline_ms: u64, tag: T) -> Option<T> {
        let cancelled = self.cancel();
        self.slot = Some(Armed { deadline_ms, tag });
        cancelled
    }

    /// Disarms the slot. A cancelled timer never fires.
    pub fn cancel(&mut self) -> Option<T> {
        self.slot.take().map(|armed| armed.tag)
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.slot.as_ref().map(|armed| armed.deadline_ms)
    }

    pub fn tag(&self) -> Option<&T> {
        self.slot.as_ref().map(|armed| &armed.tag)
    }

    /// Returns true if a deadline is pending and has been reached at `now_ms`.
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.deadline().is_some_and(|deadline| deadline <= now_ms)
    }

    /// Disarms and returns the pending timer if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<Armed<T>> {
        if self.is_due(now_ms) {
            self.slot.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let timer: ArmedTimer<u8> = ArmedTimer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
        assert!(!timer.is_due(u64::MAX));
    }

    #[test]
    fn test_rearm_replaces_pending_timer() {
        let mut timer = ArmedTimer::new();
        assert_eq!(timer.rearm(100, "first"), None);
        assert_eq!(timer.rearm(250, "second"), Some("first"));

        assert_eq!(timer.deadline(), Some(250));
        assert_eq!(timer.tag(), Some(&"second"));
        // The replaced deadline is gone: nothing fires at 100.
        assert!(timer.take_due(100).is_none());
    }

    #[test]
    fn test_take_due_disarms() {
        let mut timer = ArmedTimer::new();
        timer.rearm(300, 7u32);

        assert!(timer.take_due(299).is_none());
        let fired = timer.take_due(300).expect("timer should be due");
        assert_eq!(fired, Armed { deadline_ms: 300, tag: 7 });
        assert!(!timer.is_armed());
        assert!(timer.take_due(1_000).is_none());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timer = ArmedTimer::new();
        timer.rearm(10, ());
        assert_eq!(timer.cancel(), Some(()));
        assert!(timer.take_due(10_000).is_none());
        assert_eq!(timer.cancel(), None);
    }
}
