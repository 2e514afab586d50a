//! The pad surface: touch routing, corner hit-regions and layout.
//!
//! [`TouchPad`] is what a host embeds. It owns the [`GestureEngine`], the measured
//! geometry and the action sink, and decides for every touch sample whether it belongs
//! to the pad itself, to one of the corner regions, or to nobody (a second finger).

use crate::action::{ActionEvent, ActionSink, CornerId};
use crate::config::PadConfig;
use crate::engine::{GestureEngine, ReleaseOutcome};
use crate::geometry::{Extent, PadGeometry, Point, Region};
use crate::visual::PadVisual;

/// Host-assigned identifier of one touch point.
pub type TouchId = u64;

/// Where a start or move sample went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Handled by the gesture engine.
    Pad,
    /// Swallowed by a corner region.
    Corner(CornerId),
    /// Not the tracked touch, or no gesture in progress.
    Ignored,
}

/// What a touch-up resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Pad(ReleaseOutcome),
    Corner(CornerId),
    Ignored,
}

/// Computes the geometry for a container, sizing the cursor from `cursor_size`.
///
/// Percentages resolve against the matching container axis.
pub fn layout_for(config: &PadConfig, container: Extent) -> PadGeometry {
    let cursor = Extent::new(
        config.cursor_size.resolve(container.width),
        config.cursor_size.resolve(container.height),
    );
    PadGeometry::new(container, cursor)
}

/// Hit-regions of every configured corner, in `CornerId` order.
///
/// Each region is a square of `corner_size` (percentages resolve against the container
/// width) anchored at its corner.
pub fn corner_regions(config: &PadConfig, container: Extent) -> Vec<(CornerId, Region)> {
    let side = config.corner_size.resolve(container.width).max(0.0);
    let size = Extent::square(side);
    let far_x = container.width - side;
    let far_y = container.height - side;

    config
        .corners
        .keys()
        .map(|&corner| {
            let min = match corner {
                CornerId::TopLeft => Point::new(0.0, 0.0),
                CornerId::TopRight => Point::new(far_x, 0.0),
                CornerId::BottomLeft => Point::new(0.0, far_y),
                CornerId::BottomRight => Point::new(far_x, far_y),
            };
            (corner, Region::from_min_size(min, size))
        })
        .collect()
}

/// A complete virtual touch pad.
pub struct TouchPad<S: ActionSink = Vec<ActionEvent>> {
    engine: GestureEngine,
    sink: S,
    geometry: PadGeometry,
    /// First touch of the current gesture; other touches are ignored until it ends.
    active_touch: Option<TouchId>,
}

impl<S: ActionSink> TouchPad<S> {
    pub fn new(config: PadConfig, sink: S) -> Self {
        Self {
            engine: GestureEngine::new(config),
            sink,
            geometry: PadGeometry::default(),
            active_touch: None,
        }
    }

    // ===== Configuration & layout =====

    /// Replaces the configuration; staged until the current gesture ends.
    pub fn set_config(&mut self, config: PadConfig) {
        self.engine.set_config(config);
    }

    pub fn config(&self) -> &PadConfig {
        self.engine.config()
    }

    /// Records the measured container and cursor extents.
    pub fn set_layout(&mut self, container: Extent, cursor: Extent) {
        self.geometry = PadGeometry::new(container, cursor);
    }

    /// Records the container extent and sizes the cursor from the configuration.
    pub fn set_container(&mut self, container: Extent) {
        self.geometry = layout_for(self.engine.config(), container);
    }

    pub fn geometry(&self) -> PadGeometry {
        self.geometry
    }

    /// Corner whose hit-region contains `position`, if any.
    pub fn corner_at(&self, position: Point) -> Option<CornerId> {
        corner_regions(self.engine.config(), self.geometry.container)
            .into_iter()
            .find(|(_, region)| region.contains(position))
            .map(|(corner, _)| corner)
    }

    // ===== Accessors =====

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn visual(&self) -> &PadVisual {
        self.engine.visual()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn active_touch(&self) -> Option<TouchId> {
        self.active_touch
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    // ===== Touch input =====

    /// Touch-down. Corners never intercept a start; the pad always records the origin.
    pub fn touch_start(&mut self, id: TouchId, position: Point, now_ms: u64) -> Routing {
        if self.active_touch.is_some_and(|active| active != id) {
            log::trace!("touch {} ignored: touch {:?} is active", id, self.active_touch);
            self.engine.poll(now_ms, &mut self.sink);
            return Routing::Ignored;
        }

        self.active_touch = Some(id);
        self.engine.start(position, now_ms, &mut self.sink);
        Routing::Pad
    }

    pub fn touch_move(&mut self, id: TouchId, position: Point, now_ms: u64) -> Routing {
        if self.active_touch != Some(id) {
            self.engine.poll(now_ms, &mut self.sink);
            return Routing::Ignored;
        }

        if let Some(corner) = self.corner_at(position) {
            self.engine.poll(now_ms, &mut self.sink);
            self.engine.cancel_hold();
            return Routing::Corner(corner);
        }

        self.engine
            .move_to(position, now_ms, self.geometry, &mut self.sink);
        Routing::Pad
    }

    pub fn touch_end(&mut self, id: TouchId, position: Point, now_ms: u64) -> Release {
        if self.active_touch != Some(id) {
            self.engine.poll(now_ms, &mut self.sink);
            return Release::Ignored;
        }
        self.active_touch = None;

        match self.corner_at(position) {
            Some(corner) => {
                self.engine.corner_release(corner, now_ms, &mut self.sink);
                Release::Corner(corner)
            }
            None => Release::Pad(self.engine.end(position, now_ms, &mut self.sink)),
        }
    }

    /// The host lost the touch (e.g. the pointer left the window).
    pub fn touch_cancel(&mut self, id: TouchId, now_ms: u64) {
        self.engine.poll(now_ms, &mut self.sink);
        if self.active_touch == Some(id) {
            self.active_touch = None;
            self.engine.cancel_gesture(now_ms);
        }
    }

    /// Fires every timer due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) {
        self.engine.poll(now_ms, &mut self.sink);
    }
}
