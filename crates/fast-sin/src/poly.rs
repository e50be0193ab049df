// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Odd minimax polynomials for `sin(x)` on `[0, π/2]`.
//!
//! `sin(x) ≈ x · P(x²)` where `P` is evaluated by Horner's scheme:
//!
//! - degree 7: `P(u) = a0 + u(a1 + u(a2 + a3·u))`
//! - degree 9: `P(u) = a0 + u(a1 + u(a2 + u(a3 + a4·u)))`
//!
//! Coefficients come from a minimax fit on the first quadrant. Measured over
//! the dense sweep `i / 1e7`, `|i| ≤ 3.61e9`, the maximum absolute errors are
//! about `9.39101e-7` (degree 7) and `5.31399e-9` (degree 9). Both maxima
//! sit at `x = π/2` and are slightly above those rounded figures, so
//! [`max_abs_error`] reports them rounded up.

use crate::precision::SinOutput;

/// Degree-7 coefficients `[a0, a1, a2, a3]`.
pub const DEGREE_7_COEFFICIENTS: [f64; 4] = [
    0.999999060898976,
    -0.166655540927576,
    0.00831189980138987,
    -0.000184881402886071,
];

/// Degree-9 coefficients `[a0, a1, a2, a3, a4]`.
pub const DEGREE_9_COEFFICIENTS: [f64; 5] = [
    0.999999994686007,
    -0.166666566840071,
    0.00833302513896936,
    -0.000198074187274269,
    2.601903067651460e-6,
];

/// Polynomial degrees accepted by the evaluator.
pub const SUPPORTED_DEGREES: [u32; 2] = [7, 9];

/// Maximum absolute error of the `f64` evaluator on `[0, π/2]`, or `None`
/// for an unsupported degree.
pub const fn max_abs_error(degree: u32) -> Option<f64> {
    match degree {
        7 => Some(9.39102e-7),
        9 => Some(5.31400e-9),
        _ => None,
    }
}

/// Compile-time check that `DEGREE` names a fitted polynomial.
#[inline]
pub(crate) const fn assert_supported_degree<const DEGREE: u32>() {
    const { assert!(DEGREE == 7 || DEGREE == 9, "polynomial DEGREE must be 7 or 9") };
}

/// Evaluates `x · P(x²)` with coefficients rounded to `T`.
///
/// Arithmetic stays in `f64`. For degree 7 the innermost product `a3·x²` is
/// itself rounded to `T` before it is accumulated.
///
/// `DEGREE` must be 7 or 9; anything else fails to compile.
#[inline]
pub fn minimax<T: SinOutput, const DEGREE: u32>(x: f64) -> f64 {
    assert_supported_degree::<DEGREE>();

    let u = x * x;
    if DEGREE == 7 {
        let [a0, a1, a2, a3] = DEGREE_7_COEFFICIENTS;
        x * (T::narrow_coefficient(a0)
            + u * (T::narrow_coefficient(a1)
                + u * (T::narrow_coefficient(a2) + T::narrow_coefficient(a3 * u))))
    } else {
        let [a0, a1, a2, a3, a4] = DEGREE_9_COEFFICIENTS;
        x * (T::narrow_coefficient(a0)
            + u * (T::narrow_coefficient(a1)
                + u * (T::narrow_coefficient(a2)
                    + u * (T::narrow_coefficient(a3) + T::narrow_coefficient(a4) * u))))
    }
}
