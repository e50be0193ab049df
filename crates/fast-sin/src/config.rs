// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Runtime selection of precision and degree.
//!
//! [`FastSin`] fixes both parameters at compile time. Hosts that read them
//! from settings build a [`DynFastSin`] from a [`FastSinConfig`] instead;
//! unsupported degrees are rejected while the configuration is parsed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FastSinError;
use crate::evaluator::FastSin;
use crate::poly;
use crate::precision::SinOutput;

/// Result precision of a runtime-selected evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// `f32` results.
    Single,
    /// `f64` results.
    #[default]
    Double,
}

/// Polynomial degree of a runtime-selected evaluator.
///
/// Serialized as the bare integer (`7` or `9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Degree {
    /// Degree 7, max abs error ≈ 9.39e-7.
    #[default]
    Seven,
    /// Degree 9, max abs error ≈ 5.31e-9.
    Nine,
}

impl Degree {
    /// The polynomial degree as an integer.
    pub const fn get(self) -> u32 {
        match self {
            Self::Seven => 7,
            Self::Nine => 9,
        }
    }

    /// Documented maximum absolute error of the `f64` evaluator.
    pub fn max_abs_error(self) -> f64 {
        poly::max_abs_error(self.get()).unwrap_or(f64::NAN)
    }
}

impl TryFrom<u32> for Degree {
    type Error = FastSinError;

    fn try_from(degree: u32) -> Result<Self, Self::Error> {
        match degree {
            7 => Ok(Self::Seven),
            9 => Ok(Self::Nine),
            other => Err(FastSinError::UnsupportedDegree(other)),
        }
    }
}

impl From<Degree> for u32 {
    fn from(degree: Degree) -> Self {
        degree.get()
    }
}

/// Settings for a [`DynFastSin`]. Missing fields take their defaults
/// (`double`, degree 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FastSinConfig {
    /// Result precision.
    pub precision: Precision,
    /// Polynomial degree.
    pub degree: Degree,
}

impl FastSinConfig {
    /// Builds a config, validating `degree`.
    pub fn new(precision: Precision, degree: u32) -> Result<Self, FastSinError> {
        Ok(Self {
            precision,
            degree: Degree::try_from(degree)?,
        })
    }

    /// Parses a JSON document such as `{"precision": "single", "degree": 9}`.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, FastSinError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serializes this config as pretty JSON.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, FastSinError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// A [`FastSin`] whose precision and degree were chosen at runtime.
#[derive(Debug, Clone)]
pub enum DynFastSin {
    /// `FastSin<f32, 7>`
    SingleSeven(FastSin<f32, 7>),
    /// `FastSin<f32, 9>`
    SingleNine(FastSin<f32, 9>),
    /// `FastSin<f64, 7>`
    DoubleSeven(FastSin<f64, 7>),
    /// `FastSin<f64, 9>`
    DoubleNine(FastSin<f64, 9>),
}

impl DynFastSin {
    /// Builds the evaluator named by `config`.
    pub fn from_config(config: &FastSinConfig) -> Self {
        debug!(
            precision = ?config.precision,
            degree = config.degree.get(),
            "building runtime-selected sine evaluator"
        );
        match (config.precision, config.degree) {
            (Precision::Single, Degree::Seven) => Self::SingleSeven(FastSin::new()),
            (Precision::Single, Degree::Nine) => Self::SingleNine(FastSin::new()),
            (Precision::Double, Degree::Seven) => Self::DoubleSeven(FastSin::new()),
            (Precision::Double, Degree::Nine) => Self::DoubleNine(FastSin::new()),
        }
    }

    /// Approximates `sin(angle)`, widened to `f64`.
    #[inline]
    pub fn sin(&mut self, angle: f64) -> f64 {
        match self {
            Self::SingleSeven(s) => s.sin(angle).to_f64(),
            Self::SingleNine(s) => s.sin(angle).to_f64(),
            Self::DoubleSeven(s) => s.sin(angle),
            Self::DoubleNine(s) => s.sin(angle),
        }
    }

    /// Drops the cached reduction.
    pub fn reset(&mut self) {
        match self {
            Self::SingleSeven(s) => s.reset(),
            Self::SingleNine(s) => s.reset(),
            Self::DoubleSeven(s) => s.reset(),
            Self::DoubleNine(s) => s.reset(),
        }
    }

    /// Whether the next call may skip the division by `2π`.
    pub fn is_cached(&self) -> bool {
        match self {
            Self::SingleSeven(s) => s.is_cached(),
            Self::SingleNine(s) => s.is_cached(),
            Self::DoubleSeven(s) => s.is_cached(),
            Self::DoubleNine(s) => s.is_cached(),
        }
    }

    /// Result precision.
    pub const fn precision(&self) -> Precision {
        match self {
            Self::SingleSeven(_) | Self::SingleNine(_) => Precision::Single,
            Self::DoubleSeven(_) | Self::DoubleNine(_) => Precision::Double,
        }
    }

    /// Polynomial degree.
    pub const fn degree(&self) -> Degree {
        match self {
            Self::SingleSeven(_) | Self::DoubleSeven(_) => Degree::Seven,
            Self::SingleNine(_) | Self::DoubleNine(_) => Degree::Nine,
        }
    }

    /// The config this evaluator was built from.
    pub const fn config(&self) -> FastSinConfig {
        FastSinConfig {
            precision: self.precision(),
            degree: self.degree(),
        }
    }

    /// Documented maximum absolute error of the `f64` evaluator of this degree.
    pub fn max_abs_error(&self) -> f64 {
        self.degree().max_abs_error()
    }
}

impl From<&FastSinConfig> for DynFastSin {
    fn from(config: &FastSinConfig) -> Self {
        Self::from_config(config)
    }
}

impl Default for DynFastSin {
    fn default() -> Self {
        Self::from_config(&FastSinConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_rejects_unfitted_values() {
        for degree in [0, 5, 8, 11] {
            let err = Degree::try_from(degree).err();
            assert!(
                matches!(err, Some(FastSinError::UnsupportedDegree(d)) if d == degree),
                "degree={degree}"
            );
        }
        assert_eq!(Degree::try_from(9).ok(), Some(Degree::Nine));
    }

    #[test]
    fn config_new_validates_degree() {
        assert!(FastSinConfig::new(Precision::Single, 8).is_err());
        let cfg = FastSinConfig::new(Precision::Single, 9).ok();
        assert_eq!(
            cfg,
            Some(FastSinConfig {
                precision: Precision::Single,
                degree: Degree::Nine
            })
        );
    }

    #[test]
    fn dyn_evaluator_reports_its_config() {
        for precision in [Precision::Single, Precision::Double] {
            for degree in [Degree::Seven, Degree::Nine] {
                let cfg = FastSinConfig { precision, degree };
                let s = DynFastSin::from_config(&cfg);
                assert_eq!(s.config(), cfg);
                assert!(!s.is_cached());
            }
        }
    }

    #[test]
    fn default_is_double_degree_seven() {
        let s = DynFastSin::default();
        assert_eq!(s.precision(), Precision::Double);
        assert_eq!(s.degree(), Degree::Seven);
        assert!((s.max_abs_error() - 9.39102e-7).abs() < 1e-18);
    }
}
