// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The stateful sine evaluator and its stateless counterpart.

use core::marker::PhantomData;

use crate::poly::{self, minimax};
use crate::precision::SinOutput;
use crate::quadrant::fold;
use crate::reduce::{RangeReducer, ReducePath};

/// Fast `sin` for angles that move in small steps.
///
/// - `T`: result precision, `f32` or `f64` (default `f64`).
/// - `DEGREE`: odd polynomial degree, 7 or 9 (default 7). Other values fail
///   to compile when the evaluator is constructed.
///
/// Each instance caches the cycle count of its previous angle, so calls take
/// `&mut self`. Use one evaluator per angular trajectory; an evaluator shared
/// between threads needs external synchronization.
///
/// ```
/// use fast_sin::FastSin;
///
/// let mut rotation: FastSin = FastSin::new();
/// let s = rotation.sin(0.268);
/// assert!((s - 0.268_f64.sin()).abs() < 1e-6);
///
/// let mut fine: FastSin<f64, 9> = FastSin::new();
/// assert!((fine.sin(2.2351) - 2.2351_f64.sin()).abs() < 1e-8);
/// ```
///
/// Boundary note: an angle whose reduction lands exactly on `2π` folds to
/// `x = 0` with a negative sign and returns `-0.0`. Depending on the cache,
/// the same input can also come back as `+0.0` or a value within the error
/// budget of zero. A cycle bump that still rounds above `2π` is bumped again,
/// so the folder never sees a reduced angle past `2π`.
#[derive(Debug, Clone)]
pub struct FastSin<T: SinOutput = f64, const DEGREE: u32 = 7> {
    reducer: RangeReducer,
    _output: PhantomData<fn() -> T>,
}

impl<T: SinOutput, const DEGREE: u32> FastSin<T, DEGREE> {
    /// Polynomial degree of this evaluator.
    pub const DEGREE: u32 = DEGREE;

    /// Creates an evaluator with an empty cache.
    pub const fn new() -> Self {
        poly::assert_supported_degree::<DEGREE>();
        Self {
            reducer: RangeReducer::new(),
            _output: PhantomData,
        }
    }

    /// Approximates `sin(angle)` (radians).
    #[inline]
    pub fn sin(&mut self, angle: f64) -> T {
        self.sin_traced(angle).0
    }

    /// Like [`sin`](Self::sin), also reporting which reduction path was taken.
    #[inline]
    pub fn sin_traced(&mut self, angle: f64) -> (T, ReducePath) {
        let reduction = self.reducer.reduce(angle);
        (evaluate_reduced::<T, DEGREE>(reduction.angle_short), reduction.path)
    }

    /// Drops the cached reduction.
    pub fn reset(&mut self) {
        self.reducer.reset();
    }

    /// Whether the next call may skip the division by `2π`.
    pub fn is_cached(&self) -> bool {
        self.reducer.is_cached()
    }

    /// The range reducer backing this evaluator.
    pub fn reducer(&self) -> &RangeReducer {
        &self.reducer
    }

    /// Documented maximum absolute error of the `f64` evaluator of this degree.
    pub fn max_abs_error() -> f64 {
        poly::assert_supported_degree::<DEGREE>();
        poly::max_abs_error(DEGREE).unwrap_or(f64::NAN)
    }
}

impl<T: SinOutput, const DEGREE: u32> Default for FastSin<T, DEGREE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless `sin`: every call reduces by division.
///
/// Same polynomial and folding as [`FastSin`], without the cycle cache. Use it
/// for scattered angles where no locality exists.
///
/// ```
/// let s: f32 = fast_sin::sin::<f32, 7>(1.85111);
/// assert!((s - 1.85111_f32.sin()).abs() < 2e-6);
/// ```
#[inline]
pub fn sin<T: SinOutput, const DEGREE: u32>(angle: f64) -> T {
    let reduction = RangeReducer::new().reduce(angle);
    evaluate_reduced::<T, DEGREE>(reduction.angle_short)
}

#[inline]
fn evaluate_reduced<T: SinOutput, const DEGREE: u32>(angle_short: f64) -> T {
    let folded = fold(angle_short);
    T::from_f64(folded.sign * minimax::<T, DEGREE>(folded.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TAU;

    #[test]
    fn degree_constant_is_exposed() {
        assert_eq!(FastSin::<f64, 7>::DEGREE, 7);
        assert_eq!(FastSin::<f32, 9>::DEGREE, 9);
    }

    #[test]
    fn max_abs_error_per_degree() {
        assert!((FastSin::<f64, 7>::max_abs_error() - 9.39102e-7).abs() < 1e-18);
        assert!((FastSin::<f32, 9>::max_abs_error() - 5.314e-9).abs() < 1e-20);
    }

    #[test]
    fn stateless_matches_fresh_evaluator() {
        for i in -200..=200 {
            let angle = f64::from(i) * 0.731;
            let fresh = FastSin::<f64, 9>::new().sin(angle);
            assert_eq!(sin::<f64, 9>(angle).to_bits(), fresh.to_bits(), "angle={angle}");
        }
    }

    #[test]
    fn cache_survives_a_revolution() {
        let mut s: FastSin = FastSin::new();
        assert!(!s.is_cached());
        for i in 0..=64 {
            let angle = TAU * f64::from(i) / 64.0;
            let (v, path) = s.sin_traced(angle);
            assert!((v - angle.sin()).abs() <= FastSin::<f64, 7>::max_abs_error());
            if i > 0 {
                assert_eq!(path, ReducePath::Cached, "angle={angle}");
            }
        }
        assert!(s.is_cached());
        assert_eq!(s.reducer().full_cycles(), Some(0));
        s.reset();
        assert!(!s.is_cached());
    }

    #[test]
    fn whole_cycle_step_off_a_divided_edge_stays_near_zero() {
        let mut s: FastSin = FastSin::new();
        s.sin(-81.681_408_993_334_63);
        let (v, path) = s.sin_traced(-75.398_223_686_155_03);
        assert_eq!(path, ReducePath::CycleUp);
        assert!(v.abs() <= FastSin::<f64, 7>::max_abs_error(), "v={v}");
    }

    #[test]
    fn default_is_uncached() {
        let s = FastSin::<f32, 9>::default();
        assert!(!s.is_cached());
    }
}
