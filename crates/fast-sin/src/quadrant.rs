// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Quadrant folding: maps a reduced angle onto the first quadrant.

use crate::consts::{FRAC_3PI_2, FRAC_PI_2, PI, TAU};

/// A first-quadrant argument and the sign to apply to `sin(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Folded {
    /// Argument in `[0, π/2]` for reduced angles in `[0, 2π]`.
    pub x: f64,
    /// `1.0` or `-1.0`.
    pub sign: f64,
}

/// Reflects `angle_short` into the first quadrant.
///
/// Guards are checked in order:
///
/// | reduced angle        | `x`           | `sign` |
/// |----------------------|---------------|--------|
/// | `a ≤ π/2`            | `a`           | `+1`   |
/// | `π/2 < a ≤ π`        | `π − a`       | `+1`   |
/// | `π < a ≤ 3π/2`       | `a − π`       | `−1`   |
/// | `3π/2 < a ≤ 2π`      | `2π − a`      | `−1`   |
///
/// The first row has no lower bound, so slightly negative values pass
/// through unchanged (the polynomial is odd). Values above `2π` match no row
/// and are returned unchanged with `sign = +1`; the reducer never produces
/// them.
#[inline]
pub fn fold(angle_short: f64) -> Folded {
    let a = angle_short;
    if a > FRAC_PI_2 && a <= PI {
        Folded { x: PI - a, sign: 1.0 }
    } else if a > PI && a <= FRAC_3PI_2 {
        Folded { x: a - PI, sign: -1.0 }
    } else if a > FRAC_3PI_2 && a <= TAU {
        Folded { x: TAU - a, sign: -1.0 }
    } else {
        Folded { x: a, sign: 1.0 }
    }
}
