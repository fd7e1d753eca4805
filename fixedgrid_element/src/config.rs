// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted configuration record for one placed element.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::scalar;
use crate::units::{CoordSpace, GridSize, min_height_for, min_width_for};

/// Stored configuration for one element of a fixed-position view.
///
/// This is the record a containing view persists. Position and size are
/// plain numbers whose meaning depends on the element's current
/// [`CoordSpace`]: pixel-based elements store pixels, grid-based elements
/// store whole grid cells. The space tag itself is private and can only
/// change through [`ElementConfig::set_coord_space`], which converts every
/// stored field in the same step, so the fields and the tag can never
/// disagree.
///
/// Line-shaped elements carry a second endpoint; all other shapes leave it
/// `None`. A single `Option` encodes "both coordinates present", so a
/// conversion can never touch half an endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementConfig {
    /// Position along the x axis, in the element's current space.
    pub x: f64,
    /// Position along the y axis, in the element's current space.
    pub y: f64,
    /// Width, in the element's current space.
    pub width: f64,
    /// Height, in the element's current space.
    pub height: f64,
    /// Far endpoint of a line element, in the element's current space.
    pub endpoint: Option<Point>,
    /// Stroke color, if styled.
    pub stroke: Option<Color>,
    space: CoordSpace,
}

impl ElementConfig {
    /// Creates an element at `(x, y)` with the given extent, measured in
    /// `space`.
    #[must_use]
    pub const fn new(space: CoordSpace, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            endpoint: None,
            stroke: None,
            space,
        }
    }

    /// Attaches a second endpoint, making this a line element.
    #[must_use]
    pub const fn with_endpoint(mut self, endpoint: Point) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Attaches a stroke color.
    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns the coordinate space the stored fields are expressed in.
    #[must_use]
    pub const fn coord_space(&self) -> CoordSpace {
        self.space
    }

    /// Returns `true` if this element is line-shaped.
    #[must_use]
    pub const fn is_line(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Returns the element's bounding frame in its current space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Replaces position and size from a frame in the element's current space.
    ///
    /// The endpoint, stroke, and coordinate space are untouched.
    pub fn set_frame(&mut self, frame: Rect) {
        self.x = frame.x0;
        self.y = frame.y0;
        self.width = frame.width();
        self.height = frame.height();
    }

    /// Re-expresses the stored fields in `target` space, measured against
    /// `grid`.
    ///
    /// Requesting the space the element is already in is a no-op, so
    /// repeated identical requests never convert twice. On an actual switch
    /// the tag and every stored field change together:
    ///
    /// - **To pixels**: multiply through by the grid cell size. Exact.
    /// - **To grid**: divide by the cell size; positions and the endpoint
    ///   round half-up to the nearest cell, width and height round the same
    ///   way and are then clamped up to the minimum size in grid units, so
    ///   a visible element never collapses below its rendered floor. Lossy
    ///   by design; grid cells are coarser than pixels.
    ///
    /// Elements without a second endpoint skip the endpoint branch.
    pub fn set_coord_space(&mut self, target: CoordSpace, grid: GridSize) {
        if self.space == target {
            return;
        }
        self.space = target;
        match target {
            CoordSpace::Pixels => {
                self.x *= grid.x;
                self.y *= grid.y;
                self.width *= grid.x;
                self.height *= grid.y;
                if let Some(endpoint) = &mut self.endpoint {
                    endpoint.x *= grid.x;
                    endpoint.y *= grid.y;
                }
            }
            CoordSpace::Grid => {
                self.x = scalar::round_half_up(self.x / grid.x);
                self.y = scalar::round_half_up(self.y / grid.y);
                self.width = scalar::round_half_up(self.width / grid.x).max(min_width_for(grid));
                self.height = scalar::round_half_up(self.height / grid.y).max(min_height_for(grid));
                if let Some(endpoint) = &mut self.endpoint {
                    endpoint.x = scalar::round_half_up(endpoint.x / grid.x);
                    endpoint.y = scalar::round_half_up(endpoint.y / grid.y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{CoordSpace, ElementConfig, GridSize};

    #[test]
    fn converting_to_grid_rounds_and_enforces_minimums() {
        let grid = GridSize::square(10.0);
        let mut config = ElementConfig::new(CoordSpace::Pixels, 25.0, 35.0, 47.0, 12.0);

        config.set_coord_space(CoordSpace::Grid, grid);

        assert_eq!(config.coord_space(), CoordSpace::Grid);
        assert_eq!(config.x, 3.0, "round(2.5) breaks the tie upward");
        assert_eq!(config.y, 4.0, "round(3.5) breaks the tie upward");
        assert_eq!(config.width, 5.0);
        assert_eq!(config.height, 1.0, "round(1.2) = 1, at the minimum");
    }

    #[test]
    fn converting_to_pixels_is_exact() {
        let grid = GridSize::new(10.0, 12.0);
        let mut config = ElementConfig::new(CoordSpace::Grid, 3.0, 4.0, 5.0, 2.0);

        config.set_coord_space(CoordSpace::Pixels, grid);

        assert_eq!(config.coord_space(), CoordSpace::Pixels);
        assert_eq!(config.x, 30.0);
        assert_eq!(config.y, 48.0);
        assert_eq!(config.width, 50.0);
        assert_eq!(config.height, 24.0);
    }

    #[test]
    fn redundant_conversion_is_a_no_op() {
        let grid = GridSize::square(10.0);
        let mut config = ElementConfig::new(CoordSpace::Pixels, 25.0, 35.0, 47.0, 12.0);

        config.set_coord_space(CoordSpace::Grid, grid);
        let once = config.clone();
        config.set_coord_space(CoordSpace::Grid, grid);
        assert_eq!(config, once, "a second identical request must not reconvert");
    }

    #[test]
    fn endpoint_converts_with_the_position_rounding_rule() {
        let grid = GridSize::square(10.0);
        let mut config = ElementConfig::new(CoordSpace::Pixels, 0.0, 0.0, 47.0, 33.0)
            .with_endpoint(Point::new(47.0, 33.0));

        config.set_coord_space(CoordSpace::Grid, grid);
        assert_eq!(config.endpoint, Some(Point::new(5.0, 3.0)));

        config.set_coord_space(CoordSpace::Pixels, grid);
        assert_eq!(config.endpoint, Some(Point::new(50.0, 30.0)));
    }

    #[test]
    fn endpoint_at_origin_still_converts() {
        // A line endpoint sitting on the origin is a legitimate coordinate,
        // not an absent one.
        let grid = GridSize::square(4.0);
        let mut config = ElementConfig::new(CoordSpace::Grid, 2.0, 2.0, 3.0, 3.0)
            .with_endpoint(Point::new(0.0, 0.0));

        config.set_coord_space(CoordSpace::Pixels, grid);
        assert_eq!(config.endpoint, Some(Point::new(0.0, 0.0)));
        assert_eq!(config.x, 8.0);
    }

    #[test]
    fn non_line_shapes_never_grow_an_endpoint() {
        let grid = GridSize::square(10.0);
        let mut config = ElementConfig::new(CoordSpace::Pixels, 5.0, 5.0, 40.0, 40.0);

        config.set_coord_space(CoordSpace::Grid, grid);
        assert_eq!(config.endpoint, None);
        assert!(config.width.is_finite() && config.height.is_finite());
    }

    #[test]
    fn grid_pixel_grid_round_trip_is_stable_for_positions() {
        let grid = GridSize::square(8.0);
        let mut config = ElementConfig::new(CoordSpace::Grid, 3.0, 7.0, 4.0, 2.0);
        let original = config.clone();

        config.set_coord_space(CoordSpace::Pixels, grid);
        config.set_coord_space(CoordSpace::Grid, grid);

        assert_eq!(config.x, original.x);
        assert_eq!(config.y, original.y);
        assert_eq!(config.width, original.width);
        assert_eq!(config.height, original.height);
    }
}
