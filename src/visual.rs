//! Visual state driven by the gesture engine: the tracking cursor and the
//! per-gesture feedback flashes.
//!
//! Nothing here draws. The host samples [`CursorVisual::rendered_offset`] and
//! [`FeedbackState::opacity`] each frame and paints whatever it likes.

use crate::action::Gesture;
use crate::geometry::Offset;

/// Duration of the cursor's return-to-center transition.
pub const SNAP_BACK_MS: u64 = 500;
/// Duration of one feedback fade (in and out).
pub const FEEDBACK_FADE_MS: u64 = 500;

/// How the cursor reaches its current target offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorTransition {
    /// Follow the finger with no animation.
    Immediate,
    /// Animate from `from` back to the center.
    SnapBack { from: Offset, started_ms: u64 },
}

/// The visual cursor: a target offset from the pad center plus the transition used to
/// reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorVisual {
    offset: Offset,
    transition: CursorTransition,
}

impl Default for CursorVisual {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorVisual {
    pub fn new() -> Self {
        Self {
            offset: Offset::ZERO,
            transition: CursorTransition::Immediate,
        }
    }

    /// Drops any in-flight animation so the next drag is applied immediately.
    ///
    /// The target is already the center once a snap-back has been started, so an
    /// interrupted animation lands there rather than at a stale intermediate point.
    pub fn interrupt(&mut self) {
        self.transition = CursorTransition::Immediate;
    }

    /// Moves the cursor to an already-clamped offset.
    pub fn track(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Starts the animated return to the center from wherever the cursor is now.
    pub fn snap_back(&mut self, now_ms: u64) {
        let from = self.rendered_offset(now_ms);
        self.offset = Offset::ZERO;
        self.transition = CursorTransition::SnapBack {
            from,
            started_ms: now_ms,
        };
    }

    /// Target offset, ignoring any animation in progress.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn transition(&self) -> CursorTransition {
        self.transition
    }

    /// Offset to draw at `now_ms`, with the snap-back animation applied.
    pub fn rendered_offset(&self, now_ms: u64) -> Offset {
        match self.transition {
            CursorTransition::Immediate => self.offset,
            CursorTransition::SnapBack { from, started_ms } => {
                let elapsed = now_ms.saturating_sub(started_ms);
                if elapsed >= SNAP_BACK_MS {
                    self.offset
                } else {
                    let t = elapsed as f32 / SNAP_BACK_MS as f32;
                    from.lerp(self.offset, ease(t))
                }
            }
        }
    }

    /// True while a snap-back animation still needs frames.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        match self.transition {
            CursorTransition::Immediate => false,
            CursorTransition::SnapBack { started_ms, .. } => {
                now_ms.saturating_sub(started_ms) < SNAP_BACK_MS
            }
        }
    }
}

// Smoothstep, close enough to the CSS `ease` curve for a 500ms return.
fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Start times of the feedback flash for each gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackState {
    started_ms: [Option<u64>; 6],
}

impl FeedbackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)starts the flash for `gesture`. A flash already running is reset.
    pub fn trigger(&mut self, gesture: Gesture, now_ms: u64) {
        self.started_ms[gesture.index()] = Some(now_ms);
    }

    /// Opacity of the glyph for `gesture` at `now_ms`: 0 → 1 → 0 over the fade.
    pub fn opacity(&self, gesture: Gesture, now_ms: u64) -> f32 {
        let Some(started_ms) = self.started_ms[gesture.index()] else {
            return 0.0;
        };
        let elapsed = now_ms.saturating_sub(started_ms);
        if elapsed >= FEEDBACK_FADE_MS {
            return 0.0;
        }
        let t = elapsed as f32 / FEEDBACK_FADE_MS as f32;
        1.0 - (2.0 * t - 1.0).abs()
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.started_ms
            .iter()
            .flatten()
            .any(|&started| now_ms.saturating_sub(started) < FEEDBACK_FADE_MS)
    }
}

/// Everything the host needs to draw the pad's dynamic parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadVisual {
    pub cursor: CursorVisual,
    pub feedback: FeedbackState,
}

impl PadVisual {
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.cursor.is_animating(now_ms) || self.feedback.is_animating(now_ms)
    }
}
