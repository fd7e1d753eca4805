// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handles: pure corner-drag math for one element.

use kurbo::{Point, Rect, Vec2};

use crate::config::ElementConfig;
use crate::scalar;
use crate::units::GridSize;

/// Which corner of the element's frame a handle grabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleAnchor {
    /// The `(x0, y0)` corner.
    TopLeft,
    /// The `(x1, y0)` corner.
    TopRight,
    /// The `(x0, y1)` corner.
    BottomLeft,
    /// The `(x1, y1)` corner.
    BottomRight,
}

impl HandleAnchor {
    /// All four corners, in the order handles are presented.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

/// A draggable corner of one element.
///
/// A handle holds no element state of its own: every query recomputes from
/// the configuration passed in, so it can never report stale geometry. The
/// minimum sizes and cell size it carries are in the element's current
/// coordinate space; [`ElementProxy::handles`](crate::ElementProxy::handles)
/// rebuilds handles whenever that space or the grid changes.
#[derive(Clone, Copy, Debug)]
pub struct ResizeHandle {
    anchor: HandleAnchor,
    min_width: f64,
    min_height: f64,
    cell: GridSize,
}

impl ResizeHandle {
    /// Creates a handle for `anchor` with minimum sizes (in element units)
    /// and the pixel size of one element unit.
    #[must_use]
    pub const fn new(anchor: HandleAnchor, min_width: f64, min_height: f64, cell: GridSize) -> Self {
        Self {
            anchor,
            min_width,
            min_height,
            cell,
        }
    }

    /// Returns which corner this handle grabs.
    #[must_use]
    pub const fn anchor(&self) -> HandleAnchor {
        self.anchor
    }

    /// Returns the handle's grab point in the element's current space.
    #[must_use]
    pub fn grab_point(&self, config: &ElementConfig) -> Point {
        let f = config.frame();
        match self.anchor {
            HandleAnchor::TopLeft => Point::new(f.x0, f.y0),
            HandleAnchor::TopRight => Point::new(f.x1, f.y0),
            HandleAnchor::BottomLeft => Point::new(f.x0, f.y1),
            HandleAnchor::BottomRight => Point::new(f.x1, f.y1),
        }
    }

    /// Computes the frame that results from dragging the grab point by
    /// `delta` pixels.
    ///
    /// The pointer delta is converted into element units through the cell
    /// size, so the same gesture math serves pixel- and grid-based elements.
    #[must_use]
    pub fn drag_by(&self, config: &ElementConfig, delta: Vec2) -> Rect {
        let target = self.grab_point(config) + Vec2::new(delta.x / self.cell.x, delta.y / self.cell.y);
        self.drag_to(config, target)
    }

    /// Computes the frame that results from moving the grab point to
    /// `target`, given in the element's current space.
    ///
    /// The target snaps to whole units (a no-op for sub-pixel precision in
    /// pixel space, cell snapping in grid space), then the frame is clamped:
    /// width and height never drop below the handle's minimums and the
    /// origin never goes negative. The opposite corner stays fixed.
    ///
    /// Expects a frame that already satisfies the minimums, which every
    /// conversion and resize in this crate maintains. For a frame smaller
    /// than the minimum that also hugs the origin, a left- or top-anchor
    /// drag keeps the origin at zero rather than pushing the fixed corner
    /// outward.
    #[must_use]
    pub fn drag_to(&self, config: &ElementConfig, target: Point) -> Rect {
        let f = config.frame();
        let tx = scalar::round_half_up(target.x);
        let ty = scalar::round_half_up(target.y);

        let (x0, x1) = match self.anchor {
            HandleAnchor::TopLeft | HandleAnchor::BottomLeft => {
                (tx.clamp(0.0, (f.x1 - self.min_width).max(0.0)), f.x1)
            }
            HandleAnchor::TopRight | HandleAnchor::BottomRight => {
                (f.x0, tx.max(f.x0 + self.min_width))
            }
        };
        let (y0, y1) = match self.anchor {
            HandleAnchor::TopLeft | HandleAnchor::TopRight => {
                (ty.clamp(0.0, (f.y1 - self.min_height).max(0.0)), f.y1)
            }
            HandleAnchor::BottomLeft | HandleAnchor::BottomRight => {
                (f.y0, ty.max(f.y0 + self.min_height))
            }
        };
        Rect::new(x0, y0, x1, y1)
    }
}
