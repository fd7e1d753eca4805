// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element proxy: a short-lived editing view over one stack entry.

use kurbo::{Rect, Vec2};
use peniko::Color;

use crate::binding;
use crate::config::ElementConfig;
use crate::handle::{HandleAnchor, ResizeHandle};
use crate::stack::{ElementHandle, ElementStack, OrderDirection};
use crate::units::{CoordSpace, GridSize, min_height_for, min_width_for};

/// A transient view over one element of an [`ElementStack`].
///
/// A proxy bundles the stack, one validated handle, and the view's current
/// grid size, and exposes the full editing surface for that element: typed
/// position/size/style accessors, stacking-order moves, removal, resize
/// handles, and coordinate-space switching.
///
/// Proxies are deliberately cheap and short-lived: a containing view
/// constructs one per interaction (or render pass) and discards it
/// afterward, re-deriving fresh handles after any structural change. Nothing
/// is cached across a proxy's lifetime that could outlive a sequence
/// mutation; minimum sizes, cell sizes, and resize handles are recomputed on
/// every query.
///
/// While a proxy is alive it borrows the stack exclusively, so its handle
/// cannot go stale underneath it. Staleness is handled at the borders: a
/// stale index or handle at construction yields `None`, and a containing
/// view that keeps raw [`ElementHandle`]s across mutations goes through the
/// stack's guarded operations, which no-op on stale handles.
#[derive(Debug)]
pub struct ElementProxy<'a> {
    stack: &'a mut ElementStack,
    handle: ElementHandle,
    grid: GridSize,
}

impl<'a> ElementProxy<'a> {
    /// Creates a proxy for the element at `index`, or `None` if there is no
    /// such entry.
    #[must_use]
    pub fn new(stack: &'a mut ElementStack, index: usize, grid: GridSize) -> Option<Self> {
        let handle = stack.handle_at(index)?;
        Some(Self {
            stack,
            handle,
            grid,
        })
    }

    /// Creates a proxy from a previously recorded handle, or `None` if the
    /// handle has gone stale.
    #[must_use]
    pub fn from_handle(
        stack: &'a mut ElementStack,
        handle: ElementHandle,
        grid: GridSize,
    ) -> Option<Self> {
        if !stack.is_current(handle) {
            return None;
        }
        Some(Self {
            stack,
            handle,
            grid,
        })
    }

    fn config(&self) -> &ElementConfig {
        self.stack.config_at(self.handle.index())
    }

    fn config_mut(&mut self) -> &mut ElementConfig {
        self.stack.config_at_mut(self.handle.index())
    }

    /// The element's current index in the stacking order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.handle.index()
    }

    /// The element's handle, suitable for recording across render passes.
    #[must_use]
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    /// The x position, in the element's current space.
    #[must_use]
    pub fn x(&self) -> f64 {
        binding::X.get(self.config())
    }

    /// Sets the x position, clamped non-negative; returns the stored value.
    pub fn set_x(&mut self, x: f64) -> f64 {
        binding::X.set(self.config_mut(), x)
    }

    /// The y position, in the element's current space.
    #[must_use]
    pub fn y(&self) -> f64 {
        binding::Y.get(self.config())
    }

    /// Sets the y position, clamped non-negative; returns the stored value.
    pub fn set_y(&mut self, y: f64) -> f64 {
        binding::Y.set(self.config_mut(), y)
    }

    /// The width, in the element's current space.
    #[must_use]
    pub fn width(&self) -> f64 {
        binding::WIDTH.get(self.config())
    }

    /// Sets the width; returns the stored value.
    pub fn set_width(&mut self, width: f64) -> f64 {
        binding::WIDTH.set(self.config_mut(), width)
    }

    /// The height, in the element's current space.
    #[must_use]
    pub fn height(&self) -> f64 {
        binding::HEIGHT.get(self.config())
    }

    /// Sets the height; returns the stored value.
    pub fn set_height(&mut self, height: f64) -> f64 {
        binding::HEIGHT.set(self.config_mut(), height)
    }

    /// The stroke color, if styled.
    #[must_use]
    pub fn stroke(&self) -> Option<Color> {
        binding::STROKE.get(self.config())
    }

    /// Sets the stroke color; returns the stored value.
    pub fn set_stroke(&mut self, stroke: Option<Color>) -> Option<Color> {
        binding::STROKE.set(self.config_mut(), stroke)
    }

    /// The element's bounding frame in its current space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.config().frame()
    }

    /// Returns `true` if this element is line-shaped.
    #[must_use]
    pub fn is_line(&self) -> bool {
        self.config().is_line()
    }

    /// Moves this element in the stacking order.
    ///
    /// Delegates to [`ElementStack::reorder`]: the element is spliced to the
    /// clamped target index, everyone else keeps their relative order, and a
    /// move that would change nothing returns `None`. On success the proxy
    /// tracks its new index and returns it.
    pub fn order(&mut self, direction: OrderDirection) -> Option<usize> {
        let index = self.stack.reorder(self.handle, direction)?;
        self.handle = ElementHandle::new(index, self.handle.id());
        Some(index)
    }

    /// Removes this element from the view, consuming the proxy.
    pub fn remove(self) -> ElementConfig {
        self.stack.remove_at(self.handle.index())
    }

    /// Returns the resize handles for this element, one per corner.
    ///
    /// Handles are rebuilt on every call from the current minimum sizes and
    /// cell size, so they are always consistent with the element's
    /// coordinate space and the live grid.
    #[must_use]
    pub fn handles(&self) -> [ResizeHandle; 4] {
        let min_width = self.min_width();
        let min_height = self.min_height();
        let cell = self.cell_size();
        HandleAnchor::ALL.map(|anchor| ResizeHandle::new(anchor, min_width, min_height, cell))
    }

    /// Resizes this element by dragging the given corner by `delta` pixels.
    ///
    /// Convenience over [`ResizeHandle::drag_by`] that writes the clamped
    /// frame back into the configuration.
    pub fn drag_resize(&mut self, anchor: HandleAnchor, delta: Vec2) {
        let min_width = self.min_width();
        let min_height = self.min_height();
        let cell = self.cell_size();
        let handle = ResizeHandle::new(anchor, min_width, min_height, cell);
        let frame = handle.drag_by(self.config(), delta);
        self.config_mut().set_frame(frame);
    }

    /// Switches the element's coordinate space, converting its stored
    /// fields.
    ///
    /// Requesting the space the element is already in is a no-op, so the
    /// operation is idempotent and never converts twice. See
    /// [`ElementConfig::set_coord_space`] for the conversion rules.
    pub fn set_units(&mut self, target: CoordSpace) {
        let grid = self.grid;
        self.config_mut().set_coord_space(target, grid);
    }

    /// The coordinate space the element is currently expressed in.
    #[must_use]
    pub fn coord_space(&self) -> CoordSpace {
        self.config().coord_space()
    }

    /// Pixel size of one coordinate unit in the element's current space:
    /// the live grid size for grid-based elements, `[1, 1]` for pixel-based
    /// ones.
    #[must_use]
    pub fn cell_size(&self) -> GridSize {
        self.config().coord_space().cell_size(self.grid)
    }

    /// The view's grid size this proxy measures against.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    /// Replaces the grid size, used when the view's grid settings change
    /// live.
    pub fn set_grid_size(&mut self, grid: GridSize) {
        self.grid = grid;
    }

    /// Minimum element width in the element's current space, rounded up so
    /// the rendered minimum never drops below the absolute pixel floor.
    #[must_use]
    pub fn min_width(&self) -> f64 {
        min_width_for(self.cell_size())
    }

    /// Minimum element height in the element's current space, rounded up so
    /// the rendered minimum never drops below the absolute pixel floor.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        min_height_for(self.cell_size())
    }
}
