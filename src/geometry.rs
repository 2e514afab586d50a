//! Pad geometry and the cursor projector.
//!
//! Coordinates are pad-local pixels with the origin at the pad's top-left corner and
//! y growing downwards. Offsets are measured from the pad center.

/// A position in pad-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Signed displacement from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }
}

/// A signed displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `target`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, target: Offset, t: f32) -> Offset {
        let t = t.clamp(0.0, 1.0);
        Offset::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }
}

/// Width and height of a measured element in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Container and cursor extents as measured by the host at the time of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadGeometry {
    pub container: Extent,
    pub cursor: Extent,
}

impl PadGeometry {
    pub const fn new(container: Extent, cursor: Extent) -> Self {
        Self { container, cursor }
    }

    /// Largest offset the cursor may take on each axis.
    pub fn max_offset(self) -> Offset {
        max_offset(self.container, self.cursor)
    }
}

/// Axis-aligned rectangle in pad-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub min: Point,
    pub max: Point,
}

impl Region {
    pub fn from_min_size(min: Point, size: Extent) -> Self {
        Self {
            min,
            max: Point::new(min.x + size.width, min.y + size.height),
        }
    }

    /// Inclusive on the top/left edges, exclusive on the bottom/right edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}

fn max_offset(container: Extent, cursor: Extent) -> Offset {
    Offset::new(
        ((container.width - cursor.width) / 2.0).max(0.0),
        ((container.height - cursor.height) / 2.0).max(0.0),
    )
}

/// Projects a raw finger displacement onto the cursor's allowed travel.
///
/// The result keeps the cursor fully inside the container: each axis is clamped to
/// `±(container - cursor) / 2`. A cursor larger than its container cannot move.
pub fn project(delta: Offset, container: Extent, cursor: Extent) -> Offset {
    let max = max_offset(container, cursor);
    Offset::new(
        delta.x.min(max.x).max(-max.x),
        delta.y.min(max.y).max(-max.y),
    )
}
