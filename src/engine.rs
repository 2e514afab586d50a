//! Gesture recognition and timing engine.
//!
//! The engine consumes one touch point's `start → move* → end` samples and turns them
//! into at most one discrete action per gesture (tap, double tap or swipe), plus the
//! periodic hold-repeat emissions while a directional drag is held.
//!
//! Time is supplied by the host. Every entry point takes the current monotonic time in
//! milliseconds and first fires any timer whose deadline has already passed, so timer
//! callbacks are always ordered before later input, just like on an event loop.
//! Between input events the host calls [`GestureEngine::poll`] (typically once per
//! frame, or when [`GestureEngine::next_deadline`] is reached).

use crate::action::{ActionEvent, ActionSink, ActionSource, CornerId, Gesture, SwipeDirection};
use crate::config::PadConfig;
use crate::geometry::{self, Offset, PadGeometry, Point};
use crate::timer::ArmedTimer;
use crate::visual::PadVisual;

/// Classifies a displacement into a swipe direction.
///
/// The dominant axis must be strictly larger than the other one and strictly past the
/// threshold. Equal displacements on both axes are ambiguous and yield `None`.
pub fn classify_direction(delta: Offset, swipe_threshold: f32) -> Option<SwipeDirection> {
    let unsigned_x = delta.x.abs();
    let unsigned_y = delta.y.abs();

    if unsigned_x > unsigned_y && unsigned_x > swipe_threshold {
        Some(if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else if unsigned_y > unsigned_x && unsigned_y > swipe_threshold {
        Some(if delta.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        })
    } else {
        None
    }
}

/// True if a displacement is small enough on both axes to count as a tap.
pub fn is_tap_candidate(delta: Offset, tap_threshold: f32) -> bool {
    delta.x.abs() < tap_threshold && delta.y.abs() < tap_threshold
}

/// Phase of an armed hold-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    /// Waiting for the initial delay; nothing has been emitted yet.
    Delay,
    /// The interval is active and re-emits on every tick.
    Repeating,
}

/// Tag of the hold-repeat timer: which direction is armed and in which phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldRepeat {
    pub direction: SwipeDirection,
    pub phase: HoldPhase,
    interval_ms: u64,
}

/// What a release resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Second tap inside the window; `double_tap_action` was emitted.
    DoubleTap,
    /// First tap; `tap_action` fires when the single-tap timer expires.
    TapPending,
    /// Fast swipe; the directional action was emitted once.
    Swipe(SwipeDirection),
    /// Swipe released while its hold-repeat was firing; nothing more is emitted.
    HeldSwipe(SwipeDirection),
    /// Neither a tap nor a clear swipe.
    Nothing,
    /// There was no gesture in progress.
    Ignored,
}

/// State captured at touch-down and discarded at touch-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    origin: Point,
}

/// The gesture state machine for one pad.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: PadConfig,
    /// Configuration received mid-gesture, applied by the end-of-gesture teardown.
    staged_config: Option<PadConfig>,
    session: Option<GestureSession>,
    /// Outlives sessions: needed to recognize the second tap of a double tap.
    last_release_ms: Option<u64>,
    tap_timer: ArmedTimer<()>,
    hold_timer: ArmedTimer<HoldRepeat>,
    visual: PadVisual,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(PadConfig::default())
    }
}

impl GestureEngine {
    pub fn new(config: PadConfig) -> Self {
        Self {
            config,
            staged_config: None,
            session: None,
            last_release_ms: None,
            tap_timer: ArmedTimer::new(),
            hold_timer: ArmedTimer::new(),
            visual: PadVisual::default(),
        }
    }

    // ===== Configuration =====

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// A gesture in progress keeps the configuration it started with; the new one is
    /// applied when that gesture ends.
    pub fn set_config(&mut self, config: PadConfig) {
        if self.session.is_some() {
            log::debug!("configuration staged until the current gesture ends");
            self.staged_config = Some(config);
        } else {
            log::debug!("configuration applied");
            self.config = config;
        }
    }

    // ===== State Queries =====

    pub fn visual(&self) -> &PadVisual {
        &self.visual
    }

    /// True between `start` and `end`.
    pub fn in_gesture(&self) -> bool {
        self.session.is_some()
    }

    /// Direction currently armed for hold-repeat, if any.
    pub fn armed_direction(&self) -> Option<SwipeDirection> {
        self.hold_timer.tag().map(|hold| hold.direction)
    }

    /// True once the hold delay has elapsed and the interval is re-emitting.
    pub fn is_repeating(&self) -> bool {
        self.hold_timer
            .tag()
            .is_some_and(|hold| hold.phase == HoldPhase::Repeating)
    }

    pub fn has_pending_tap(&self) -> bool {
        self.tap_timer.is_armed()
    }

    /// Earliest pending timer deadline; the host should poll no later than this.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.tap_timer.deadline(), self.hold_timer.deadline()) {
            (Some(tap), Some(hold)) => Some(tap.min(hold)),
            (tap, hold) => tap.or(hold),
        }
    }

    // ===== Input =====

    /// Touch-down: records the origin and clears leftovers from earlier gestures.
    pub fn start<S: ActionSink + ?Sized>(&mut self, position: Point, now_ms: u64, sink: &mut S) {
        self.poll(now_ms, sink);

        if self.tap_timer.cancel().is_some() {
            log::trace!("pending single tap cancelled by new gesture");
        }
        if let Some(hold) = self.hold_timer.cancel() {
            log::trace!("hold-repeat {:?} cancelled by new gesture", hold.direction);
        }
        self.visual.cursor.interrupt();
        self.session = Some(GestureSession { origin: position });
    }

    /// Touch-move: tracks the cursor and arms, rearms or cancels hold-repeat.
    ///
    /// Never emits a tap or swipe. Returns the tentative direction of the drag.
    pub fn move_to<S: ActionSink + ?Sized>(
        &mut self,
        position: Point,
        now_ms: u64,
        geometry: PadGeometry,
        sink: &mut S,
    ) -> Option<SwipeDirection> {
        self.poll(now_ms, sink);

        let Some(session) = self.session else {
            log::trace!("move ignored: no gesture in progress");
            return None;
        };

        let delta = position.delta_from(session.origin);
        let offset = geometry::project(delta, geometry.container, geometry.cursor);
        self.visual.cursor.track(offset);

        let tentative = classify_direction(delta, self.config.swipe_threshold);
        if let Some(repeat) = self.config.repeat {
            if tentative != self.armed_direction() {
                match tentative {
                    Some(direction) => {
                        let hold = HoldRepeat {
                            direction,
                            phase: HoldPhase::Delay,
                            interval_ms: repeat.interval_ms(),
                        };
                        let deadline = now_ms.saturating_add(repeat.delay_ms());
                        if let Some(previous) = self.hold_timer.rearm(deadline, hold) {
                            log::trace!("hold-repeat {:?} replaced", previous.direction);
                        }
                        log::trace!("hold-repeat {:?} armed for {}ms", direction, deadline);
                    }
                    None => {
                        if let Some(previous) = self.hold_timer.cancel() {
                            log::trace!("hold-repeat {:?} released to center", previous.direction);
                        }
                    }
                }
            }
        }

        tentative
    }

    /// Touch-up: final classification, then teardown.
    pub fn end<S: ActionSink + ?Sized>(
        &mut self,
        position: Point,
        now_ms: u64,
        sink: &mut S,
    ) -> ReleaseOutcome {
        self.poll(now_ms, sink);

        let Some(session) = self.session.take() else {
            log::trace!("end ignored: no gesture in progress");
            return ReleaseOutcome::Ignored;
        };

        let delta = position.delta_from(session.origin);
        let outcome = if is_tap_candidate(delta, self.config.tap_threshold) {
            let window = self.config.tap_window_ms();
            let is_double = self
                .last_release_ms
                .is_some_and(|last| now_ms.saturating_sub(last) < window);

            self.tap_timer.cancel();
            let outcome = if is_double {
                self.fire(ActionSource::Gesture(Gesture::DoubleTap), now_ms, sink);
                ReleaseOutcome::DoubleTap
            } else {
                self.tap_timer.rearm(now_ms.saturating_add(window), ());
                log::trace!("single tap pending for {}ms", window);
                ReleaseOutcome::TapPending
            };
            self.last_release_ms = Some(now_ms);
            outcome
        } else if let Some(direction) = classify_direction(delta, self.config.swipe_threshold) {
            if self.is_repeating() {
                ReleaseOutcome::HeldSwipe(direction)
            } else {
                self.fire(ActionSource::Gesture(direction.into()), now_ms, sink);
                ReleaseOutcome::Swipe(direction)
            }
        } else {
            ReleaseOutcome::Nothing
        };

        self.reset_state(now_ms);
        outcome
    }

    /// Release inside a corner region: emits the corner's action instead of
    /// classifying the gesture, then tears down like a normal end.
    pub fn corner_release<S: ActionSink + ?Sized>(
        &mut self,
        corner: CornerId,
        now_ms: u64,
        sink: &mut S,
    ) {
        self.poll(now_ms, sink);
        self.session = None;
        self.fire(ActionSource::Corner(corner), now_ms, sink);
        self.reset_state(now_ms);
    }

    /// Drops an armed hold-repeat while the gesture continues (finger over a corner).
    ///
    /// The next move outside the corner arms it again from scratch.
    pub fn cancel_hold(&mut self) {
        if let Some(hold) = self.hold_timer.cancel() {
            log::trace!("hold-repeat {:?} suspended over a corner", hold.direction);
        }
    }

    /// Abandons the current gesture without classifying it (touch cancelled by the
    /// host).
    pub fn cancel_gesture(&mut self, now_ms: u64) {
        if self.session.take().is_some() {
            log::trace!("gesture cancelled");
        }
        self.reset_state(now_ms);
    }

    /// Fires every timer whose deadline is at or before `now_ms`, in deadline order.
    ///
    /// A late poll catches up: each elapsed repeat tick is emitted with its own
    /// scheduled timestamp.
    pub fn poll<S: ActionSink + ?Sized>(&mut self, now_ms: u64, sink: &mut S) {
        loop {
            let tap_due = self.tap_timer.deadline().filter(|&d| d <= now_ms);
            let hold_due = self.hold_timer.deadline().filter(|&d| d <= now_ms);

            match (tap_due, hold_due) {
                (None, None) => break,
                (Some(tap), Some(hold)) if hold < tap => self.fire_hold(now_ms, sink),
                (Some(_), _) => self.fire_tap(now_ms, sink),
                (None, Some(_)) => self.fire_hold(now_ms, sink),
            }
        }
    }

    /// End-of-gesture teardown: snap the cursor home, drop hold-repeat, clear the
    /// armed marker and apply any staged configuration.
    pub fn reset_state(&mut self, now_ms: u64) {
        self.visual.cursor.snap_back(now_ms);
        if let Some(hold) = self.hold_timer.cancel() {
            log::trace!("hold-repeat {:?} stopped", hold.direction);
        }
        if self.session.is_none() {
            if let Some(config) = self.staged_config.take() {
                log::debug!("staged configuration applied");
                self.config = config;
            }
        }
    }

    // ===== Timer callbacks =====

    fn fire_tap<S: ActionSink + ?Sized>(&mut self, now_ms: u64, sink: &mut S) {
        if let Some(armed) = self.tap_timer.take_due(now_ms) {
            self.fire(ActionSource::Gesture(Gesture::Tap), armed.deadline_ms, sink);
        }
    }

    fn fire_hold<S: ActionSink + ?Sized>(&mut self, now_ms: u64, sink: &mut S) {
        if let Some(armed) = self.hold_timer.take_due(now_ms) {
            let hold = armed.tag;
            self.fire(
                ActionSource::Gesture(hold.direction.into()),
                armed.deadline_ms,
                sink,
            );
            // A zero interval would never let the catch-up loop terminate.
            let next = armed.deadline_ms.saturating_add(hold.interval_ms.max(1));
            self.hold_timer.rearm(
                next,
                HoldRepeat {
                    phase: HoldPhase::Repeating,
                    ..hold
                },
            );
        }
    }

    /// Looks up the binding for `source` and forwards it. Missing bindings are a
    /// silent no-op.
    fn fire<S: ActionSink + ?Sized>(&mut self, source: ActionSource, t_ms: u64, sink: &mut S) {
        let action = match source {
            ActionSource::Gesture(gesture) => self.config.action_for(gesture),
            ActionSource::Corner(corner) => self.config.corner_action(corner),
        };
        let Some(action) = action.cloned() else {
            log::trace!("{} has no action bound", source);
            return;
        };

        log::debug!("emit {} at {}ms", source, t_ms);
        sink.emit(ActionEvent {
            source,
            action,
            t_ms,
        });

        if let ActionSource::Gesture(gesture) = source {
            if self.config.visual_feedback.is_some() {
                self.visual.feedback.trigger(gesture, t_ms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Extent;
    use serde_json::json;

    const ORIGIN: Point = Point::new(150.0, 150.0);

    fn geometry() -> PadGeometry {
        PadGeometry::new(Extent::square(300.0), Extent::square(60.0))
    }

    fn all_bound(extra: serde_json::Value) -> PadConfig {
        let mut partial = json!({
            "tap_action": {"action": "tap"},
            "double_tap_action": {"action": "double"},
            "up_action": {"action": "up"},
            "down_action": {"action": "down"},
            "left_action": {"action": "left"},
            "right_action": {"action": "right"},
            "corners": {
                "top_left": {"hass_action": {"action": "corner-tl"}}
            }
        });
        if let (Some(base), Some(extra)) = (partial.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        PadConfig::from_partial(&partial).unwrap()
    }

    fn at(dx: f32, dy: f32) -> Point {
        Point::new(ORIGIN.x + dx, ORIGIN.y + dy)
    }

    fn sources(events: &[ActionEvent]) -> Vec<ActionSource> {
        events.iter().map(|e| e.source).collect()
    }

    fn times(events: &[ActionEvent]) -> Vec<u64> {
        events.iter().map(|e| e.t_ms).collect()
    }

    fn tap(engine: &mut GestureEngine, now_ms: u64, sink: &mut Vec<ActionEvent>) -> ReleaseOutcome {
        engine.start(ORIGIN, now_ms, sink);
        engine.end(at(2.0, 1.0), now_ms + 40, sink)
    }

    // ===== Classification =====

    #[test]
    fn test_classify_dominant_axis() {
        assert_eq!(classify_direction(Offset::new(80.0, 10.0), 50.0), Some(SwipeDirection::Right));
        assert_eq!(classify_direction(Offset::new(-80.0, 10.0), 50.0), Some(SwipeDirection::Left));
        assert_eq!(classify_direction(Offset::new(5.0, 60.0), 50.0), Some(SwipeDirection::Down));
        assert_eq!(classify_direction(Offset::new(5.0, -60.0), 50.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn test_classify_below_threshold_or_tied() {
        assert_eq!(classify_direction(Offset::new(50.0, 0.0), 50.0), None);
        assert_eq!(classify_direction(Offset::new(70.0, 70.0), 50.0), None);
        assert_eq!(classify_direction(Offset::new(-70.0, 70.0), 50.0), None);
        assert_eq!(classify_direction(Offset::ZERO, 50.0), None);
    }

    #[test]
    fn test_classify_sign_rule_over_grid() {
        let threshold = 50.0;
        for dx in (-200..=200).step_by(13) {
            for dy in (-200..=200).step_by(17) {
                let (dx, dy) = (dx as f32, dy as f32);
                let result = classify_direction(Offset::new(dx, dy), threshold);
                if dx.abs() > dy.abs() && dx.abs() > threshold {
                    let expected = if dx > 0.0 { SwipeDirection::Right } else { SwipeDirection::Left };
                    assert_eq!(result, Some(expected), "dx={} dy={}", dx, dy);
                } else if dy.abs() > dx.abs() && dy.abs() > threshold {
                    let expected = if dy > 0.0 { SwipeDirection::Down } else { SwipeDirection::Up };
                    assert_eq!(result, Some(expected), "dx={} dy={}", dx, dy);
                } else {
                    assert_eq!(result, None, "dx={} dy={}", dx, dy);
                }
            }
        }
    }

    #[test]
    fn test_tap_candidates_never_swipe() {
        let config = all_bound(json!({}));
        for dx in -4..=4 {
            for dy in -4..=4 {
                let delta = Offset::new(dx as f32, dy as f32);
                assert!(is_tap_candidate(delta, config.tap_threshold));
                assert_eq!(classify_direction(delta, config.swipe_threshold), None);
            }
        }
        assert!(!is_tap_candidate(Offset::new(5.0, 0.0), config.tap_threshold));
    }

    // ===== Taps =====

    #[test]
    fn test_single_tap_fires_after_timeout() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        assert_eq!(tap(&mut engine, 1_000, &mut sink), ReleaseOutcome::TapPending);
        assert!(sink.is_empty(), "tap must not fire immediately");
        assert_eq!(engine.next_deadline(), Some(1_340));

        engine.poll(1_339, &mut sink);
        assert!(sink.is_empty());

        engine.poll(1_340, &mut sink);
        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::Tap)]);
        assert_eq!(times(&sink), vec![1_340]);

        engine.poll(5_000, &mut sink);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_double_tap_within_window() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        tap(&mut engine, 0, &mut sink);
        assert_eq!(tap(&mut engine, 110, &mut sink), ReleaseOutcome::DoubleTap);
        engine.poll(10_000, &mut sink);

        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::DoubleTap)]);
        assert_eq!(times(&sink), vec![150]);
    }

    #[test]
    fn test_taps_outside_window_are_two_singles() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        tap(&mut engine, 0, &mut sink);
        assert_eq!(tap(&mut engine, 500, &mut sink), ReleaseOutcome::TapPending);
        engine.poll(10_000, &mut sink);

        assert_eq!(
            sources(&sink),
            vec![
                ActionSource::Gesture(Gesture::Tap),
                ActionSource::Gesture(Gesture::Tap)
            ]
        );
        assert_eq!(times(&sink), vec![340, 840]);
    }

    #[test]
    fn test_tap_without_double_binding_fires_on_next_poll() {
        let mut config = all_bound(json!({}));
        config.double_tap_action = None;
        let mut engine = GestureEngine::new(config);
        let mut sink = Vec::new();

        tap(&mut engine, 0, &mut sink);
        assert!(sink.is_empty());
        engine.poll(40, &mut sink);
        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::Tap)]);

        // A quick second tap is just another tap.
        tap(&mut engine, 60, &mut sink);
        engine.poll(100, &mut sink);
        assert_eq!(sink.len(), 2);
        assert!(sink.iter().all(|e| e.source == ActionSource::Gesture(Gesture::Tap)));
    }

    #[test]
    fn test_new_gesture_cancels_pending_tap() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        tap(&mut engine, 0, &mut sink);
        engine.start(ORIGIN, 100, &mut sink);
        assert!(!engine.has_pending_tap());
        engine.end(at(120.0, 0.0), 200, &mut sink);
        engine.poll(10_000, &mut sink);

        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::Right)]);
    }

    // ===== Swipes =====

    #[test]
    fn test_swipe_right_emits_once_on_release() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        for step in 1..=8 {
            let dir = engine.move_to(at(step as f32 * 10.0, 1.25 * step as f32), step * 16, geometry(), &mut sink);
            if step > 5 {
                assert_eq!(dir, Some(SwipeDirection::Right));
            }
        }
        assert!(sink.is_empty(), "move must not emit without repeat");

        let outcome = engine.end(at(80.0, 10.0), 150, &mut sink);
        assert_eq!(outcome, ReleaseOutcome::Swipe(SwipeDirection::Right));
        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::Right)]);
        assert!(!engine.has_pending_tap());
    }

    #[test]
    fn test_ambiguous_release_emits_nothing() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        assert_eq!(engine.end(at(30.0, 20.0), 100, &mut sink), ReleaseOutcome::Nothing);
        engine.start(ORIGIN, 200, &mut sink);
        assert_eq!(engine.end(at(90.0, 90.0), 300, &mut sink), ReleaseOutcome::Nothing);
        engine.poll(10_000, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_binding_is_silent() {
        let mut engine = GestureEngine::new(PadConfig::default());
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        assert_eq!(engine.end(at(0.0, -90.0), 100, &mut sink), ReleaseOutcome::Swipe(SwipeDirection::Up));
        tap(&mut engine, 200, &mut sink);
        engine.poll(10_000, &mut sink);
        assert!(sink.is_empty());
    }

    // ===== Hold-repeat =====

    #[test]
    fn test_hold_repeat_delay_then_interval() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": {"delay": 300, "interval": 100}})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(0.0, 70.0), 0, geometry(), &mut sink);
        assert_eq!(engine.armed_direction(), Some(SwipeDirection::Down));
        assert!(!engine.is_repeating());

        engine.poll(299, &mut sink);
        assert!(sink.is_empty());

        for now in (300..=560).step_by(20) {
            engine.move_to(at(0.0, 75.0), now, geometry(), &mut sink);
        }
        assert!(engine.is_repeating());
        assert_eq!(times(&sink), vec![300, 400, 500]);

        let outcome = engine.end(at(0.0, 75.0), 560, &mut sink);
        assert_eq!(outcome, ReleaseOutcome::HeldSwipe(SwipeDirection::Down));
        engine.poll(10_000, &mut sink);

        assert_eq!(times(&sink), vec![300, 400, 500]);
        assert!(sink.iter().all(|e| e.source == ActionSource::Gesture(Gesture::Down)));
        assert_eq!(engine.armed_direction(), None);
    }

    #[test]
    fn test_late_poll_catches_up_every_tick() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": {"delay": 300, "interval": 100}})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(-90.0, 0.0), 0, geometry(), &mut sink);
        engine.poll(720, &mut sink);

        assert_eq!(times(&sink), vec![300, 400, 500, 600, 700]);
        assert_eq!(engine.next_deadline(), Some(800));
    }

    #[test]
    fn test_direction_change_rearms_from_zero() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": {"delay": 300, "interval": 100}})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(70.0, 0.0), 0, geometry(), &mut sink);
        engine.poll(450, &mut sink);
        assert_eq!(times(&sink), vec![300, 400]);

        // Swing over to the left side of the origin.
        engine.move_to(at(-70.0, 0.0), 450, geometry(), &mut sink);
        assert_eq!(engine.armed_direction(), Some(SwipeDirection::Left));
        assert!(!engine.is_repeating());

        engine.poll(749, &mut sink);
        assert_eq!(sink.len(), 2, "old interval must be cancelled");

        engine.poll(850, &mut sink);
        assert_eq!(
            sources(&sink),
            vec![
                ActionSource::Gesture(Gesture::Right),
                ActionSource::Gesture(Gesture::Right),
                ActionSource::Gesture(Gesture::Left),
                ActionSource::Gesture(Gesture::Left),
            ]
        );
        assert_eq!(times(&sink), vec![300, 400, 750, 850]);
    }

    #[test]
    fn test_same_direction_does_not_rearm() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": 200})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(0.0, -60.0), 0, geometry(), &mut sink);
        engine.move_to(at(0.0, -80.0), 150, geometry(), &mut sink);
        engine.move_to(at(0.0, -95.0), 199, geometry(), &mut sink);
        engine.poll(200, &mut sink);

        assert_eq!(times(&sink), vec![200]);
        assert_eq!(engine.next_deadline(), Some(400));
    }

    #[test]
    fn test_release_before_delay_is_a_swipe() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": {"delay": 300, "interval": 100}})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(0.0, -70.0), 50, geometry(), &mut sink);
        let outcome = engine.end(at(0.0, -70.0), 120, &mut sink);
        engine.poll(10_000, &mut sink);

        assert_eq!(outcome, ReleaseOutcome::Swipe(SwipeDirection::Up));
        assert_eq!(sources(&sink), vec![ActionSource::Gesture(Gesture::Up)]);
        assert_eq!(times(&sink), vec![120]);
    }

    #[test]
    fn test_returning_to_center_cancels_hold() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": 100})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(60.0, 0.0), 0, geometry(), &mut sink);
        engine.move_to(at(10.0, 0.0), 50, geometry(), &mut sink);
        assert_eq!(engine.armed_direction(), None);

        engine.poll(1_000, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_no_repeat_config_never_arms() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(0.0, 90.0), 10, geometry(), &mut sink);
        assert_eq!(engine.armed_direction(), None);
        assert_eq!(engine.next_deadline(), None);
    }

    // ===== Corners =====

    #[test]
    fn test_corner_release_emits_corner_action_and_tears_down() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": 100})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(-80.0, 0.0), 0, geometry(), &mut sink);
        engine.corner_release(CornerId::TopLeft, 50, &mut sink);
        engine.poll(10_000, &mut sink);

        assert_eq!(sources(&sink), vec![ActionSource::Corner(CornerId::TopLeft)]);
        assert!(!engine.in_gesture());
        assert_eq!(engine.armed_direction(), None);
        // The pad's own end no longer has a session to classify.
        assert_eq!(engine.end(at(-80.0, 0.0), 60, &mut sink), ReleaseOutcome::Ignored);
    }

    #[test]
    fn test_unbound_corner_is_silent() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.corner_release(CornerId::BottomRight, 30, &mut sink);
        assert!(sink.is_empty());
    }

    // ===== Visual state =====

    #[test]
    fn test_cursor_is_clamped_and_snaps_back() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(400.0, -20.0), 16, geometry(), &mut sink);
        assert_eq!(engine.visual().cursor.offset(), Offset::new(120.0, -20.0));

        engine.end(at(400.0, -20.0), 32, &mut sink);
        assert_eq!(engine.visual().cursor.offset(), Offset::ZERO);
        assert!(engine.visual().cursor.is_animating(100));
        assert_eq!(engine.visual().cursor.rendered_offset(32), Offset::new(120.0, -20.0));
    }

    #[test]
    fn test_start_interrupts_snap_back() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(100.0, 0.0), 16, geometry(), &mut sink);
        engine.end(at(100.0, 0.0), 32, &mut sink);
        engine.start(ORIGIN, 100, &mut sink);

        assert!(!engine.visual().cursor.is_animating(100));
        assert_eq!(engine.visual().cursor.rendered_offset(100), Offset::ZERO);
    }

    #[test]
    fn test_feedback_only_when_configured() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();
        engine.start(ORIGIN, 0, &mut sink);
        engine.end(at(-90.0, 0.0), 100, &mut sink);
        assert!(!engine.visual().feedback.is_animating(200));

        let mut engine = GestureEngine::new(all_bound(json!({"visual_feedback": {}})));
        engine.start(ORIGIN, 0, &mut sink);
        engine.end(at(-90.0, 0.0), 100, &mut sink);
        assert!(engine.visual().feedback.opacity(Gesture::Left, 350) > 0.9);
        assert_eq!(engine.visual().feedback.opacity(Gesture::Right, 350), 0.0);
    }

    // ===== Session bookkeeping =====

    #[test]
    fn test_input_without_start_is_ignored() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": 100})));
        let mut sink = Vec::new();

        assert_eq!(engine.move_to(at(90.0, 0.0), 0, geometry(), &mut sink), None);
        assert_eq!(engine.end(at(90.0, 0.0), 10, &mut sink), ReleaseOutcome::Ignored);
        engine.poll(1_000, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_config_change_mid_gesture_is_staged() {
        let mut engine = GestureEngine::new(all_bound(json!({})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.set_config(all_bound(json!({"swipe_threshold": 200})));
        assert_eq!(engine.config().swipe_threshold, 50.0);

        // Still judged with the threshold the gesture started under.
        assert_eq!(engine.end(at(120.0, 0.0), 100, &mut sink), ReleaseOutcome::Swipe(SwipeDirection::Right));
        assert_eq!(engine.config().swipe_threshold, 200.0);
    }

    #[test]
    fn test_cancel_gesture_skips_classification() {
        let mut engine = GestureEngine::new(all_bound(json!({"repeat": 100})));
        let mut sink = Vec::new();

        engine.start(ORIGIN, 0, &mut sink);
        engine.move_to(at(90.0, 0.0), 10, geometry(), &mut sink);
        engine.cancel_gesture(20);
        engine.poll(1_000, &mut sink);

        assert!(sink.is_empty());
        assert!(!engine.in_gesture());
    }
}
