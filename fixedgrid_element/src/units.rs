// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate spaces and the layout grid they are measured against.

use crate::scalar;

/// Minimum rendered element size, in pixels, on either axis.
///
/// Minimum sizes in other units are derived from this floor and rounded up,
/// so an element can never render smaller than this regardless of the grid.
pub const MIN_ELEMENT_SIZE_PX: f64 = 10.0;

/// Pixel size of one layout grid cell, per axis.
///
/// A grid size is view-scoped: every element of one fixed-position view is
/// measured against the same instance, and it changes only when the user
/// edits the view's grid settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSize {
    /// Pixels per cell along the x axis.
    pub x: f64,
    /// Pixels per cell along the y axis.
    pub y: f64,
}

impl GridSize {
    /// The degenerate one-pixel cell used when an element is pixel-based.
    pub const PIXEL: Self = Self::new(1.0, 1.0);

    /// Creates a grid size from per-axis pixel extents.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a square grid size.
    #[must_use]
    pub const fn square(extent: f64) -> Self {
        Self::new(extent, extent)
    }
}

/// The coordinate space an element's stored fields are expressed in.
///
/// This tag is the single source of truth for how `x`, `y`, `width`,
/// `height`, and the optional second endpoint of an element are to be read.
/// All of them are always in the *same* space; conversion between spaces is
/// a single atomic step on [`ElementConfig`](crate::ElementConfig), so a
/// half-converted element is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordSpace {
    /// Coordinates are raw pixels.
    Pixels,
    /// Coordinates are whole grid cells.
    Grid,
}

impl CoordSpace {
    /// Returns the pixel size of one coordinate unit in this space.
    ///
    /// Pixel-based elements treat one pixel as one unit, so this returns
    /// [`GridSize::PIXEL`] for [`CoordSpace::Pixels`] and the live grid size
    /// for [`CoordSpace::Grid`]. This indirection lets minimum-size and
    /// conversion math be written once, unit-agnostic.
    #[must_use]
    pub fn cell_size(self, grid: GridSize) -> GridSize {
        match self {
            Self::Pixels => GridSize::PIXEL,
            Self::Grid => grid,
        }
    }
}

/// Minimum element width in units of `cell`, rounded up to whole units.
#[must_use]
pub fn min_width_for(cell: GridSize) -> f64 {
    scalar::ceil(MIN_ELEMENT_SIZE_PX / cell.x)
}

/// Minimum element height in units of `cell`, rounded up to whole units.
#[must_use]
pub fn min_height_for(cell: GridSize) -> f64 {
    scalar::ceil(MIN_ELEMENT_SIZE_PX / cell.y)
}

#[cfg(test)]
mod tests {
    use super::{CoordSpace, GridSize, min_height_for, min_width_for};

    #[test]
    fn pixel_space_ignores_the_grid() {
        let grid = GridSize::new(10.0, 12.0);
        assert_eq!(CoordSpace::Pixels.cell_size(grid), GridSize::PIXEL);
        assert_eq!(CoordSpace::Grid.cell_size(grid), grid);
    }

    #[test]
    fn minimums_round_up_to_whole_units() {
        // 10 px floor over 10/12 px cells: one cell wide, one cell tall.
        let cell = GridSize::new(10.0, 12.0);
        assert_eq!(min_width_for(cell), 1.0);
        assert_eq!(min_height_for(cell), 1.0);

        // 3 px cells: 10 / 3 = 3.33 rounds up to 4 cells.
        let cell = GridSize::square(3.0);
        assert_eq!(min_width_for(cell), 4.0);
        assert_eq!(min_height_for(cell), 4.0);

        // Pixel cells: the floor itself.
        assert_eq!(min_width_for(GridSize::PIXEL), 10.0);
        assert_eq!(min_height_for(GridSize::PIXEL), 10.0);
    }
}
