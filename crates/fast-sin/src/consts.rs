// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angle constants shared by the reducer and the quadrant folder.
//!
//! Every constant is derived from [`PI`] with the same arithmetic the
//! coefficient fits were measured against: `TAU == 2.0 * PI` and
//! `FRAC_3PI_2 == PI * 3.0 / 2.0` hold bit-for-bit.

/// π at `f64` precision.
pub const PI: f64 = core::f64::consts::PI;

/// π/2, the upper edge of the first quadrant.
pub const FRAC_PI_2: f64 = PI / 2.0;

/// 3π/2, the boundary between the third and fourth quadrants.
pub const FRAC_3PI_2: f64 = PI * 3.0 / 2.0;

/// 2π, one full cycle.
pub const TAU: f64 = 2.0 * PI;

/// 4π, the widest reduced angle the fast path can correct with one cycle bump.
pub const TAU_2: f64 = 4.0 * PI;
