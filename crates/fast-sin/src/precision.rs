// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Result precision for the sine evaluator.
//!
//! Reduction and polynomial arithmetic always run in `f64`. The result type
//! only decides how the fitted coefficients are rounded before use and how the
//! final product is narrowed. `f32` and `f64` evaluators therefore return
//! different values, each within its own error budget.

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point types a [`FastSin`](crate::FastSin) can return.
///
/// Sealed: only `f32` and `f64` implement it.
pub trait SinOutput: sealed::Sealed + Copy + core::fmt::Debug + PartialOrd + Send + Sync {
    /// Human-readable name used in diagnostics.
    const NAME: &'static str;

    /// Rounds a fitted coefficient to this precision, returned widened to `f64`.
    fn narrow_coefficient(coefficient: f64) -> f64;

    /// Narrows an `f64` result to this precision.
    fn from_f64(value: f64) -> Self;

    /// Widens a result back to `f64`.
    fn to_f64(self) -> f64;
}

impl SinOutput for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn narrow_coefficient(coefficient: f64) -> f64 {
        coefficient
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl SinOutput for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn narrow_coefficient(coefficient: f64) -> f64 {
        f64::from(coefficient as f32)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}
