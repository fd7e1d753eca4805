// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed property bindings over [`ElementConfig`] fields.
//!
//! A [`Binding`] is a read/write capability for exactly one field of an
//! element's stored configuration, with an optional normalizer applied on
//! write. It is the write path used by
//! [`ElementProxy`](crate::ElementProxy) accessors, so constraints such as
//! "positions never go negative" live in one place instead of at every
//! call site.

use core::fmt;

use peniko::Color;

use crate::config::ElementConfig;

/// A get/set cell bound to one field of an [`ElementConfig`].
///
/// Reads return the current field value. Writes run the normalizer (if any)
/// first, store the result, and return the stored value, so callers always
/// learn what actually landed in the configuration. There is no validation
/// beyond the normalizer and no change notification; triggering persistence
/// is the caller's concern.
pub struct Binding<T> {
    read: fn(&ElementConfig) -> T,
    write: fn(&mut ElementConfig, T),
    normalize: Option<fn(T) -> T>,
}

impl<T: Copy> Binding<T> {
    /// Creates a passthrough binding with no normalizer.
    #[must_use]
    pub const fn new(read: fn(&ElementConfig) -> T, write: fn(&mut ElementConfig, T)) -> Self {
        Self {
            read,
            write,
            normalize: None,
        }
    }

    /// Creates a binding that normalizes every written value before storing.
    #[must_use]
    pub const fn normalized(
        read: fn(&ElementConfig) -> T,
        write: fn(&mut ElementConfig, T),
        normalize: fn(T) -> T,
    ) -> Self {
        Self {
            read,
            write,
            normalize: Some(normalize),
        }
    }

    /// Reads the bound field.
    #[must_use]
    pub fn get(&self, config: &ElementConfig) -> T {
        (self.read)(config)
    }

    /// Writes the bound field, returning the stored (post-normalization)
    /// value.
    pub fn set(&self, config: &mut ElementConfig, value: T) -> T {
        let value = match self.normalize {
            Some(normalize) => normalize(value),
            None => value,
        };
        (self.write)(config, value);
        value
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Binding<T> {}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("normalized", &self.normalize.is_some())
            .finish()
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    value.max(0.0)
}

/// The x position. Writes clamp to non-negative.
pub const X: Binding<f64> = Binding::normalized(|c| c.x, |c, v| c.x = v, clamp_non_negative);

/// The y position. Writes clamp to non-negative.
pub const Y: Binding<f64> = Binding::normalized(|c| c.y, |c, v| c.y = v, clamp_non_negative);

/// The width. Unclamped passthrough.
pub const WIDTH: Binding<f64> = Binding::new(|c| c.width, |c, v| c.width = v);

/// The height. Unclamped passthrough.
pub const HEIGHT: Binding<f64> = Binding::new(|c| c.height, |c, v| c.height = v);

/// The stroke color. Unclamped passthrough.
pub const STROKE: Binding<Option<Color>> = Binding::new(|c| c.stroke, |c, v| c.stroke = v);
