//! Live configuration editor state.
//!
//! The editor applies its text only after typing pauses, and holds back parse errors a
//! little longer so half-typed JSON does not flash an error on every keystroke.

/// Quiet period after the last edit before the text is parsed and applied.
pub const APPLY_DEBOUNCE_MS: u64 = 500;
/// How long a parse error must persist before it is shown.
pub const ERROR_DISPLAY_DELAY_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq)]
struct ParseError {
    message: String,
    since_ms: u64,
}

/// State of the JSON configuration editor.
///
/// Responsibilities:
/// - Holding the editor text buffer
/// - Debouncing edits before they are applied
/// - Delaying the display of parse errors
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Editor text buffer
    text: String,
    /// Time of the last edit not yet applied
    pending_edit_ms: Option<u64>,
    /// Most recent parse failure, cleared by the next successful apply
    error: Option<ParseError>,
}

impl EditorState {
    /// Creates an editor holding `text`, with nothing pending.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pending_edit_ms: None,
            error: None,
        }
    }

    // ===== Text =====

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable buffer for the text widget; call [`EditorState::mark_edited`] on change.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replaces the whole buffer (file load, example). Nothing stays pending.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.pending_edit_ms = None;
        self.error = None;
    }

    // ===== Debounce =====

    /// Records an edit; restarts the debounce window.
    pub fn mark_edited(&mut self, now_ms: u64) {
        self.pending_edit_ms = Some(now_ms);
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_edit_ms.is_some()
    }

    /// Returns true once, when the debounce window after the last edit has passed.
    pub fn take_due_edit(&mut self, now_ms: u64) -> bool {
        match self.pending_edit_ms {
            Some(edited) if now_ms.saturating_sub(edited) >= APPLY_DEBOUNCE_MS => {
                self.pending_edit_ms = None;
                true
            }
            _ => false,
        }
    }

    /// When the pending edit becomes due, if any.
    pub fn apply_deadline(&self) -> Option<u64> {
        self.pending_edit_ms.map(|edited| edited + APPLY_DEBOUNCE_MS)
    }

    // ===== Errors =====

    /// Records a failed parse. The display delay restarts with every failure.
    pub fn record_parse_error(&mut self, message: impl Into<String>, now_ms: u64) {
        self.error = Some(ParseError {
            message: message.into(),
            since_ms: now_ms,
        });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The parse error, once it has persisted long enough to be shown.
    pub fn visible_error(&self, now_ms: u64) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|err| now_ms.saturating_sub(err.since_ms) >= ERROR_DISPLAY_DELAY_MS)
            .map(|err| err.message.as_str())
    }

    /// When a recorded error becomes visible, if it is not yet.
    pub fn error_deadline(&self, now_ms: u64) -> Option<u64> {
        self.error
            .as_ref()
            .map(|err| err.since_ms + ERROR_DISPLAY_DELAY_MS)
            .filter(|&deadline| deadline > now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_applies_after_quiet_period() {
        let mut editor = EditorState::new("{}");
        editor.mark_edited(1_000);
        assert!(!editor.take_due_edit(1_499));

        // Typing again restarts the window.
        editor.mark_edited(1_400);
        assert!(!editor.take_due_edit(1_800));
        assert_eq!(editor.apply_deadline(), Some(1_900));
        assert!(editor.take_due_edit(1_900));
        assert!(!editor.take_due_edit(5_000));
        assert!(!editor.has_pending_edit());
    }

    #[test]
    fn test_error_shown_after_delay() {
        let mut editor = EditorState::new("{");
        editor.record_parse_error("EOF while parsing", 10_000);

        assert_eq!(editor.visible_error(11_999), None);
        assert_eq!(editor.error_deadline(11_999), Some(12_000));
        assert_eq!(editor.visible_error(12_000), Some("EOF while parsing"));
        assert_eq!(editor.error_deadline(12_000), None);
    }

    #[test]
    fn test_new_failure_restarts_error_delay() {
        let mut editor = EditorState::new("{");
        editor.record_parse_error("first", 0);
        editor.record_parse_error("second", 1_500);

        assert_eq!(editor.visible_error(2_500), None);
        assert_eq!(editor.visible_error(3_500), Some("second"));
    }

    #[test]
    fn test_set_text_discards_pending_state() {
        let mut editor = EditorState::new("{");
        editor.mark_edited(0);
        editor.record_parse_error("bad", 0);

        editor.set_text("{\"tap_threshold\": 8}");
        assert!(!editor.has_pending_edit());
        assert_eq!(editor.visible_error(10_000), None);
        assert_eq!(editor.text(), "{\"tap_threshold\": 8}");
    }
}
