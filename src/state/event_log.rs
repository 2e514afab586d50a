//! Emitted action log.
//!
//! The demo's stand-in for the dashboard's action dispatcher: every action the pad
//! emits is appended here and shown in the bottom panel.

use rtouchpad::{ActionEvent, ActionSource};
use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 200;

/// One emitted action as shown in the log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Running number, starting at 1
    pub seq: u64,
    pub event: ActionEvent,
}

/// Bounded log of emitted actions, newest last.
#[derive(Debug, Clone)]
pub struct EventLogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    /// Total number of actions ever logged, including evicted ones
    total: u64,
    visible: bool,
}

impl Default for EventLogState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLogState {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            total: 0,
            visible: true,
        }
    }

    // ===== Mutations =====

    /// Appends events, evicting the oldest entries beyond capacity.
    pub fn extend(&mut self, events: impl IntoIterator<Item = ActionEvent>) {
        for event in events {
            self.total += 1;
            log::info!("action {} -> {}", event.source, event.to_hass_payload());
            if self.entries.len() == self.capacity {
                self.entries.pop_front();
            }
            self.entries.push_back(LogEntry {
                seq: self.total,
                event,
            });
        }
    }

    /// Empties the log. The running count keeps going.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ===== Queries =====

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn last_source(&self) -> Option<ActionSource> {
        self.entries.back().map(|entry| entry.event.source)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
