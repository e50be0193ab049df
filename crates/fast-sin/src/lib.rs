// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fast-sin: stateful minimax sine for angle trajectories.
//!
//! Rotations, phase sweeps and animated angles call `sin` with inputs that
//! move a little at a time. [`FastSin`] exploits that: it caches how many
//! full `2π` cycles it removed from the previous angle and corrects the count
//! by at most one per call, so most reductions cost one subtraction. The
//! reduced angle is folded onto `[0, π/2]` and fed to an odd minimax
//! polynomial of degree 7 or 9.
//!
//! | Degree | max abs error (`f64`) |
//! |--------|-----------------------|
//! | 7      | ≈ 9.39101e-7          |
//! | 9      | ≈ 5.31399e-9          |
//!
//! Accuracy does not depend on call history; the cache only affects speed.
//! Very large magnitudes lose precision in the `2π` reduction, and non-finite
//! inputs are outside the contract.
//!
//! ```
//! use fast_sin::FastSin;
//!
//! let mut phase: FastSin<f32, 9> = FastSin::new();
//! let mut theta = 0.0_f64;
//! for _ in 0..1_000 {
//!     theta += 0.01;
//!     let s = phase.sin(theta);
//!     assert!((f64::from(s) - theta.sin()).abs() < 1e-7);
//! }
//! ```
//!
//! Degrees other than 7 and 9 are refused at compile time:
//!
//! ```compile_fail
//! let _ = fast_sin::FastSin::<f64, 8>::new();
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::module_name_repetitions
)]

/// Angle constants (π, π/2, 3π/2, 2π, 4π).
pub mod consts;
mod config;
mod error;
mod evaluator;
/// Minimax coefficient sets and their error bounds.
pub mod poly;
mod precision;
/// Quadrant folding onto `[0, π/2]`.
pub mod quadrant;
/// Incremental `2π` range reduction.
pub mod reduce;

pub use config::{Degree, DynFastSin, FastSinConfig, Precision};
pub use error::FastSinError;
pub use evaluator::{sin, FastSin};
pub use precision::SinOutput;
pub use reduce::{RangeReducer, ReducePath, Reduction};
