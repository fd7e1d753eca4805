// Copyright 2026 the Fixedgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding helpers usable without `std` float intrinsics.
//!
//! Coordinates in this crate are finite and small (screen-scale values), so
//! cast-based truncation is sufficient and keeps the crate free of a `libm`
//! requirement for its own math.

/// Largest integer less than or equal to `v`.
pub(crate) fn floor(v: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "coordinates are screen-scale values, far inside i64 range"
    )]
    let t = v as i64 as f64;
    if v < t { t - 1.0 } else { t }
}

/// Smallest integer greater than or equal to `v`.
pub(crate) fn ceil(v: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "coordinates are screen-scale values, far inside i64 range"
    )]
    let t = v as i64 as f64;
    if v > t { t + 1.0 } else { t }
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// This matches the rounding convention of the layout editor this model was
/// built for: `2.5` rounds to `3.0`, `3.5` rounds to `4.0`.
pub(crate) fn round_half_up(v: f64) -> f64 {
    floor(v + 0.5)
}
