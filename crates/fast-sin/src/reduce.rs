// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Incremental range reduction into `[0, 2π]`.
//!
//! A [`RangeReducer`] remembers how many full cycles it subtracted from the
//! previous angle. When the next angle is within about one cycle of the
//! previous one, the count is corrected by at most ±1 and the reduction costs
//! a single subtraction. Larger jumps fall back to a division by `2π`.
//!
//! Invariants while a reduction is cached:
//! - `full_cycles_angle == full_cycles as f64 * TAU` (one rounding)
//! - `previous_angle - full_cycles_angle` lies in `[0, 2π]`; it may dip a
//!   few ulps below zero but never exceeds `2π`

use tracing::trace;

use crate::consts::{TAU, TAU_2};

/// Which branch produced a reduced angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReducePath {
    /// The cached cycle count was reused unchanged.
    Cached,
    /// The cached cycle count was incremented by one.
    CycleUp,
    /// The cached cycle count was decremented by one.
    CycleDown,
    /// No usable cache: reduced by dividing by `2π`.
    Divided,
}

impl ReducePath {
    /// Returns `true` for every path that avoided the division.
    pub const fn is_incremental(self) -> bool {
        !matches!(self, Self::Divided)
    }
}

/// Result of [`RangeReducer::reduce`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Angle congruent to the input modulo `2π`, nominally in `[0, 2π]`.
    pub angle_short: f64,
    /// Branch taken to compute it.
    pub path: ReducePath,
}

/// Stateful reducer caching the cycle count of the previous angle.
#[derive(Debug, Clone, Default)]
pub struct RangeReducer {
    has_previous: bool,
    previous_angle: f64,
    full_cycles: i64,
    full_cycles_angle: f64,
}

impl RangeReducer {
    /// Creates a reducer with no cached reduction.
    pub const fn new() -> Self {
        Self {
            has_previous: false,
            previous_angle: 0.0,
            full_cycles: 0,
            full_cycles_angle: 0.0,
        }
    }

    /// Drops the cached reduction; the next call divides.
    pub fn reset(&mut self) {
        self.has_previous = false;
    }

    /// Whether the next call may take the incremental path.
    pub fn is_cached(&self) -> bool {
        self.has_previous
    }

    /// Full cycles subtracted from the previous angle, if cached.
    pub fn full_cycles(&self) -> Option<i64> {
        self.has_previous.then_some(self.full_cycles)
    }

    /// Reduces `angle` modulo `2π` and updates the cache.
    ///
    /// Non-finite angles produce a non-finite result and leave the cache
    /// invalid.
    #[inline]
    pub fn reduce(&mut self, angle: f64) -> Reduction {
        let reduction = match self.reduce_incremental(angle) {
            Some(reduction) => reduction,
            None => Reduction {
                angle_short: self.reduce_by_division(angle),
                path: ReducePath::Divided,
            },
        };
        self.previous_angle = angle;
        self.has_previous = angle.is_finite();
        reduction
    }

    fn reduce_incremental(&mut self, angle: f64) -> Option<Reduction> {
        if !self.has_previous {
            return None;
        }

        let diff = angle - self.previous_angle;
        let angle_short = angle - self.full_cycles_angle;
        // The branch keys on the direction of travel, the correction on where
        // `angle_short` landed.
        if diff > 0.0 {
            if angle_short <= TAU {
                return Some(Reduction { angle_short, path: ReducePath::Cached });
            }
            if angle_short <= TAU_2 {
                let mut shifted = self.shift_cycles(angle, 1);
                // `angle` a hair past a cycle boundary can still round above
                // `2π` after one bump.
                if shifted > TAU {
                    shifted = self.shift_cycles(angle, 1);
                }
                return Some(Reduction {
                    angle_short: shifted,
                    path: ReducePath::CycleUp,
                });
            }
        } else {
            if (0.0..=TAU).contains(&angle_short) {
                return Some(Reduction { angle_short, path: ReducePath::Cached });
            }
            if (-TAU..0.0).contains(&angle_short) {
                return Some(Reduction {
                    angle_short: self.shift_cycles(angle, -1),
                    path: ReducePath::CycleDown,
                });
            }
        }

        trace!(
            angle,
            previous_angle = self.previous_angle,
            full_cycles = self.full_cycles,
            "angle jumped more than one cycle; dropping cached reduction"
        );
        self.has_previous = false;
        None
    }

    #[allow(clippy::cast_precision_loss)]
    fn shift_cycles(&mut self, angle: f64, delta: i64) -> f64 {
        self.full_cycles = self.full_cycles.wrapping_add(delta);
        self.full_cycles_angle = self.full_cycles as f64 * TAU;
        angle - self.full_cycles_angle
    }

    // Floor, not truncation: negative angles also land in `[0, 2π]`.
    #[allow(clippy::cast_possible_truncation)]
    fn reduce_by_division(&mut self, angle: f64) -> f64 {
        let div = angle / TAU;
        let cycles = div.floor();
        // Saturating cast; beyond `i64` range the reduction has no precision left.
        self.full_cycles = cycles as i64;
        self.full_cycles_angle = cycles * TAU;
        (div - cycles) * TAU
    }
}
