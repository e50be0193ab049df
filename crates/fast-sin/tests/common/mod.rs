// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use fast_sin::SinOutput;

// =============================================================================
// ERROR BUDGETS
// =============================================================================
//
// Published maxima are 9.39101e-7 (degree 7) and 5.31399e-9 (degree 9),
// printed to six digits. The true maxima at π/2 are 9.3910102e-7 and
// 5.313994e-9, so the budgets carry a little slack above the printed figures
// to absorb that rounding plus `2π` reduction error up to |angle| ≈ 1e4.

/// Degree 7, `f64` results.
pub const BUDGET_F64_DEG7: f64 = 9.392e-7;
/// Degree 9, `f64` results.
pub const BUDGET_F64_DEG9: f64 = 5.4e-9;
/// Degree 7, `f32` results (coefficient and output rounding included).
pub const BUDGET_F32_DEG7: f64 = 1.1e-6;
/// Degree 9, `f32` results.
pub const BUDGET_F32_DEG9: f64 = 6.0e-8;

/// Returns the absolute-error budget for an evaluator `FastSin<T, DEGREE>`.
pub fn budget<T: SinOutput, const DEGREE: u32>() -> f64 {
    match (T::NAME, DEGREE) {
        ("f64", 7) => BUDGET_F64_DEG7,
        ("f64", 9) => BUDGET_F64_DEG9,
        ("f32", 7) => BUDGET_F32_DEG7,
        ("f32", 9) => BUDGET_F32_DEG9,
        _ => unreachable!("no budget for {}/{}", T::NAME, DEGREE),
    }
}

/// Deterministic oracle: pure-Rust `libm`, independent of the host libm.
pub fn oracle_sin(angle: f64) -> f64 {
    libm::sin(angle)
}

/// Absolute error of `have` against the oracle at `angle`.
pub fn abs_err<T: SinOutput>(have: T, angle: f64) -> f64 {
    (have.to_f64() - oracle_sin(angle)).abs()
}

/// Whether `FAST_SIN_AUDIT_PRINT` asks tests to print their error audits.
pub fn audit_print_enabled() -> bool {
    std::env::var("FAST_SIN_AUDIT_PRINT").is_ok()
}

/// Tiny deterministic RNG (xorshift64*) so tests don't need `rand`.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new PRNG with the given seed.
    ///
    /// Zero seeds are replaced with 1 (xorshift would stay at zero).
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// Returns the next pseudo-random `u64`.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Returns a value uniformly spread over `[lo, hi)`.
    pub fn gen_range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        // 53 random mantissa bits -> [0, 1).
        let unit = (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64;
        lo + unit * (hi - lo)
    }

    /// Returns a pseudo-random value in `[0, upper)`.
    pub fn gen_range_usize(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        (self.next_u64() as usize) % upper
    }
}

/// Fisher–Yates shuffle (deterministic).
pub fn shuffle<T>(rng: &mut XorShift64, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range_usize(i + 1);
        items.swap(i, j);
    }
}
