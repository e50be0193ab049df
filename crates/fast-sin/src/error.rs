// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised while selecting an evaluator at runtime.
//!
//! Evaluation itself never fails; these only surface at the configuration
//! boundary.

use thiserror::Error;

/// Error type for runtime evaluator selection.
#[derive(Debug, Error)]
pub enum FastSinError {
    /// Degree outside the fitted set {7, 9}.
    #[error("unsupported polynomial degree {0} (supported: 7, 9)")]
    UnsupportedDegree(u32),
    /// Malformed configuration document.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
