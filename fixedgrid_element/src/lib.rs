// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixedgrid Element: the element model of a fixed-position layout editor.
//!
//! This crate is the headless core of a canvas editor that places boxes,
//! lines, text, and images on a snapping grid. It models:
//! - The persisted per-element configuration ([`ElementConfig`]) and the two
//!   coordinate spaces its numbers can be expressed in ([`CoordSpace`]):
//!   raw pixels or whole grid cells, with non-destructive conversion
//!   between them.
//! - Minimum-size enforcement: elements never shrink below a 10×10 px
//!   rendered floor, re-expressed in whatever unit they currently use.
//! - The ordered sibling sequence ([`ElementStack`]) with guarded,
//!   splice-based z-order moves and removal.
//! - The editing surface ([`ElementProxy`]): typed accessors backed by
//!   property bindings, resize handles, and unit switching.
//!
//! It does **not** render, hit-test, or capture drag gestures, and it owns
//! no persistence. Callers are expected to:
//! - Keep the [`ElementStack`] inside whatever view object they persist,
//!   and persist after any mutating proxy or stack call.
//! - Construct proxies fresh per render pass or interaction; they are
//!   cheap, short-lived views, and recorded [`ElementHandle`]s go stale
//!   across structural changes (guarded operations then no-op).
//! - Feed pointer input in, and draw from, the stored configurations.
//!
//! ## Minimal example
//!
//! ```rust
//! use fixedgrid_element::{
//!     CoordSpace, ElementConfig, ElementProxy, ElementStack, GridSize, OrderDirection,
//! };
//!
//! let mut stack = ElementStack::new();
//! stack.push(ElementConfig::new(CoordSpace::Pixels, 0.0, 0.0, 30.0, 30.0));
//! stack.push(ElementConfig::new(CoordSpace::Pixels, 25.0, 35.0, 47.0, 12.0));
//!
//! // Edit the front element through a proxy on a 10x10 px grid.
//! let grid = GridSize::square(10.0);
//! let mut proxy = ElementProxy::new(&mut stack, 1, grid).unwrap();
//!
//! // Snap it to the grid: positions round to the nearest cell, sizes are
//! // clamped to the minimum (one cell here).
//! proxy.set_units(CoordSpace::Grid);
//! assert_eq!((proxy.x(), proxy.y()), (3.0, 4.0));
//! assert_eq!((proxy.width(), proxy.height()), (5.0, 1.0));
//!
//! // Send it to the back; the other element keeps its position.
//! assert_eq!(proxy.order(OrderDirection::Bottom), Some(0));
//! assert_eq!(stack.get(1).unwrap().width, 30.0);
//! ```
//!
//! ## Staleness discipline
//!
//! The stack is shared mutable state for however many handles a view has
//! recorded. There is no locking; mutation is single-threaded and guarded
//! optimistically. Every guarded operation re-checks that the handle's id
//! still sits at the handle's index and silently declines otherwise:
//!
//! ```rust
//! use fixedgrid_element::{CoordSpace, ElementConfig, ElementStack, OrderDirection};
//!
//! let mut stack = ElementStack::new();
//! let a = stack.push(ElementConfig::new(CoordSpace::Pixels, 0.0, 0.0, 20.0, 20.0));
//! let b = stack.push(ElementConfig::new(CoordSpace::Pixels, 5.0, 5.0, 20.0, 20.0));
//!
//! // Removing `a` shifts `b`'s true index; the recorded handle is stale.
//! assert!(stack.remove(a).is_some());
//! assert_eq!(stack.reorder(b, OrderDirection::Top), None);
//! assert_eq!(stack.len(), 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod binding;
mod config;
mod handle;
mod proxy;
mod scalar;
mod stack;
mod units;

pub use binding::Binding;
pub use config::ElementConfig;
pub use handle::{HandleAnchor, ResizeHandle};
pub use proxy::ElementProxy;
pub use stack::{ElementHandle, ElementId, ElementStack, OrderDirection};
pub use units::{CoordSpace, GridSize, MIN_ELEMENT_SIZE_PX, min_height_for, min_width_for};

/// The provided property bindings, one per editable field.
pub mod bindings {
    pub use crate::binding::{HEIGHT, STROKE, WIDTH, X, Y};
}
