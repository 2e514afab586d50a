//! Gesture scripts: recorded or synthesized touch sequences that can be replayed
//! through a [`TouchPad`] without a UI.

use crate::action::{ActionSink, Gesture, SwipeDirection};
use crate::config::PadConfig;
use crate::geometry::{Extent, Point};
use crate::surface::{TouchId, TouchPad};
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PAD_SIDE: f32 = 300.0;
const SAMPLE_PERIOD_MS: u64 = 16;

/// One timestamped input sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    Start {
        t: u64,
        x: f32,
        y: f32,
        #[serde(default)]
        id: TouchId,
    },
    Move {
        t: u64,
        x: f32,
        y: f32,
        #[serde(default)]
        id: TouchId,
    },
    End {
        t: u64,
        x: f32,
        y: f32,
        #[serde(default)]
        id: TouchId,
    },
    Cancel {
        t: u64,
        #[serde(default)]
        id: TouchId,
    },
    /// No input; only lets timers run up to `t`.
    Wait { t: u64 },
}

impl ScriptStep {
    pub fn t(&self) -> u64 {
        match self {
            ScriptStep::Start { t, .. }
            | ScriptStep::Move { t, .. }
            | ScriptStep::End { t, .. }
            | ScriptStep::Cancel { t, .. }
            | ScriptStep::Wait { t } => *t,
        }
    }
}

fn default_side() -> f32 {
    DEFAULT_PAD_SIDE
}

/// A replayable touch sequence plus the pad it was recorded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default = "default_side")]
    pub width: f32,
    #[serde(default = "default_side")]
    pub height: f32,
    /// Cursor side in pixels; sized from the configuration when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<f32>,
    /// Partial pad configuration recorded with the script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    pub steps: Vec<ScriptStep>,
}

impl Default for GestureScript {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAD_SIDE,
            height: DEFAULT_PAD_SIDE,
            cursor: None,
            config: None,
            steps: Vec::new(),
        }
    }
}

impl GestureScript {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid gesture script")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file '{}'", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in script file '{}'", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize gesture script")
    }

    pub fn container(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// The recorded configuration merged over the defaults.
    pub fn pad_config(&self) -> Result<PadConfig> {
        match &self.config {
            Some(partial) => PadConfig::from_partial(partial),
            None => Ok(PadConfig::default()),
        }
    }

    /// Timestamp of the last step.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map(ScriptStep::t).unwrap_or(0)
    }
}

/// Feeds every step of `script` into `pad`, then settles a pending single tap.
///
/// The pad's layout is taken from the script. Steps must be in non-decreasing time
/// order. Returns the time of the last poll.
pub fn replay_script<S: ActionSink>(pad: &mut TouchPad<S>, script: &GestureScript) -> Result<u64> {
    match script.cursor {
        Some(side) => pad.set_layout(script.container(), Extent::square(side)),
        None => pad.set_container(script.container()),
    }

    let mut now_ms = 0;
    for (index, step) in script.steps.iter().enumerate() {
        let t = step.t();
        if t < now_ms {
            bail!(
                "step {} at {}ms is earlier than the previous step ({}ms)",
                index,
                t,
                now_ms
            );
        }
        now_ms = t;

        match *step {
            ScriptStep::Start { t, x, y, id } => {
                pad.touch_start(id, Point::new(x, y), t);
            }
            ScriptStep::Move { t, x, y, id } => {
                pad.touch_move(id, Point::new(x, y), t);
            }
            ScriptStep::End { t, x, y, id } => {
                pad.touch_end(id, Point::new(x, y), t);
            }
            ScriptStep::Cancel { t, id } => pad.touch_cancel(id, t),
            ScriptStep::Wait { t } => pad.poll(t),
        }
    }

    if pad.active_touch().is_some() {
        log::warn!("script ended with a touch still down; hold timers left running");
        return Ok(now_ms);
    }
    // Only the single-tap timer can outlive a finished gesture.
    if let Some(deadline) = pad.next_deadline() {
        now_ms = now_ms.max(deadline);
        pad.poll(now_ms);
    }
    Ok(now_ms)
}

/// Synthesizes gesture scripts from a seeded RNG.
///
/// Gestures are separated by pauses longer than the default tap timeout, so with the
/// default thresholds and no `repeat` each synthesized gesture produces exactly the
/// outcome recorded in [`ScriptGenerator::expected`].
pub struct ScriptGenerator {
    rng: StdRng,
    container: Extent,
    steps: Vec<ScriptStep>,
    expected: Vec<Gesture>,
    now_ms: u64,
    next_id: TouchId,
}

impl ScriptGenerator {
    pub fn new() -> Self {
        Self::with_config(42, Extent::square(DEFAULT_PAD_SIDE))
    }

    pub fn with_config(seed: u64, container: Extent) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            container,
            steps: Vec::new(),
            expected: Vec::new(),
            now_ms: 0,
            next_id: 1,
        }
    }

    /// Gestures the current script should resolve to.
    ///
    /// Still available after [`ScriptGenerator::finish`]; cleared when the next script
    /// starts.
    pub fn expected(&self) -> &[Gesture] {
        &self.expected
    }

    /// A script of `count` random taps, double taps, swipes and short holds.
    pub fn random(&mut self, count: usize) -> GestureScript {
        for _ in 0..count {
            match self.rng.gen_range(0..4) {
                0 => self.push_tap(),
                1 => self.push_double_tap(),
                2 => {
                    let direction = self.random_direction();
                    self.push_swipe(direction)
                }
                _ => {
                    let direction = self.random_direction();
                    let hold_ms = self.rng.gen_range(200..800);
                    self.push_hold(direction, hold_ms)
                }
            };
        }
        self.finish()
    }

    pub fn push_tap(&mut self) -> &mut Self {
        self.pause();
        self.tap_steps();
        self.expected.push(Gesture::Tap);
        self
    }

    pub fn push_double_tap(&mut self) -> &mut Self {
        self.pause();
        self.tap_steps();
        self.now_ms += self.rng.gen_range(40..120);
        self.tap_steps();
        self.expected.push(Gesture::DoubleTap);
        self
    }

    pub fn push_swipe(&mut self, direction: SwipeDirection) -> &mut Self {
        self.pause();
        let samples = self.rng.gen_range(4..=8);
        self.drag(direction, samples, 0);
        self.expected.push(direction.into());
        self
    }

    /// Drags past the swipe threshold and stays there for `hold_ms` before lifting.
    pub fn push_hold(&mut self, direction: SwipeDirection, hold_ms: u64) -> &mut Self {
        self.pause();
        self.drag(direction, 4, hold_ms);
        self.expected.push(direction.into());
        self
    }

    /// Takes the accumulated steps and resets the generator's timeline.
    pub fn finish(&mut self) -> GestureScript {
        self.now_ms = 0;
        GestureScript {
            width: self.container.width,
            height: self.container.height,
            cursor: None,
            config: None,
            steps: std::mem::take(&mut self.steps),
        }
    }

    fn random_direction(&mut self) -> SwipeDirection {
        SwipeDirection::ALL[self.rng.gen_range(0..SwipeDirection::ALL.len())]
    }

    fn pause(&mut self) {
        if self.steps.is_empty() {
            self.expected.clear();
        } else {
            self.now_ms += self.rng.gen_range(400..700);
        }
    }

    fn origin(&mut self) -> Point {
        let center = self.container.center();
        Point::new(
            center.x + self.rng.gen_range(-20.0..20.0),
            center.y + self.rng.gen_range(-20.0..20.0),
        )
    }

    fn take_id(&mut self) -> TouchId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn tap_steps(&mut self) {
        let id = self.take_id();
        let origin = self.origin();
        let release = Point::new(
            origin.x + self.rng.gen_range(-2.0..2.0),
            origin.y + self.rng.gen_range(-2.0..2.0),
        );
        self.steps.push(ScriptStep::Start {
            t: self.now_ms,
            x: origin.x,
            y: origin.y,
            id,
        });
        self.now_ms += self.rng.gen_range(30..90);
        self.steps.push(ScriptStep::End {
            t: self.now_ms,
            x: release.x,
            y: release.y,
            id,
        });
    }

    fn drag(&mut self, direction: SwipeDirection, samples: u32, hold_ms: u64) {
        let id = self.take_id();
        let origin = self.origin();
        let distance: f32 = self.rng.gen_range(70.0..110.0);
        let drift: f32 = self.rng.gen_range(-20.0..20.0);
        let (dx, dy) = match direction {
            SwipeDirection::Up => (drift, -distance),
            SwipeDirection::Down => (drift, distance),
            SwipeDirection::Left => (-distance, drift),
            SwipeDirection::Right => (distance, drift),
        };

        self.steps.push(ScriptStep::Start {
            t: self.now_ms,
            x: origin.x,
            y: origin.y,
            id,
        });
        let mut at = origin;
        for sample in 1..=samples {
            let progress = sample as f32 / samples as f32;
            at = Point::new(origin.x + dx * progress, origin.y + dy * progress);
            self.now_ms += SAMPLE_PERIOD_MS;
            self.steps.push(ScriptStep::Move {
                t: self.now_ms,
                x: at.x,
                y: at.y,
                id,
            });
        }

        let held_until = self.now_ms + hold_ms;
        while self.now_ms + SAMPLE_PERIOD_MS <= held_until {
            self.now_ms += SAMPLE_PERIOD_MS;
            self.steps.push(ScriptStep::Move {
                t: self.now_ms,
                x: at.x,
                y: at.y,
                id,
            });
        }
        self.now_ms = held_until.max(self.now_ms);

        self.steps.push(ScriptStep::End {
            t: self.now_ms,
            x: at.x,
            y: at.y,
            id,
        });
    }
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}
