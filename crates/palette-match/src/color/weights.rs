//! Per-channel weight vector
//!
//! Which channel a weight slot scales is decided by the metric, not by the
//! memory order of [`ColorSample`](crate::ColorSample). See
//! [`ColorSpace::weight_labels()`](crate::ColorSpace::weight_labels).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recommended range for user-facing weight controls.
///
/// The metrics accept any non-negative weight; clamping into this range is
/// the configuration layer's job.
pub const WEIGHT_RANGE: (f32, f32) = (0.0, 2.0);

/// Three non-negative scaling factors, one per weight slot.
///
/// A weight of `0.0` removes that slot's channel from the distance, `1.0`
/// leaves it unchanged and values above `1.0` amplify it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct WeightVector {
    w: [f32; 3],
}

impl WeightVector {
    /// All three slots set to `1.0`.
    pub const UNIT: Self = Self { w: [1.0, 1.0, 1.0] };

    #[inline]
    pub fn new(w0: f32, w1: f32, w2: f32) -> Self {
        Self { w: [w0, w1, w2] }
    }

    /// Weight in slot `i` (0..=2).
    #[inline]
    pub fn slot(&self, i: usize) -> f32 {
        self.w[i]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        self.w
    }

    /// Clamp every slot into [`WEIGHT_RANGE`]. NaN becomes the lower bound.
    pub fn clamped(self) -> Self {
        let (lo, hi) = WEIGHT_RANGE;
        let clamp = |v: f32| if v.is_nan() { lo } else { v.clamp(lo, hi) };
        Self {
            w: [clamp(self.w[0]), clamp(self.w[1]), clamp(self.w[2])],
        }
    }

    /// Whether every slot already lies within [`WEIGHT_RANGE`].
    pub fn is_in_range(&self) -> bool {
        let (lo, hi) = WEIGHT_RANGE;
        self.w.iter().all(|&v| (lo..=hi).contains(&v))
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<[f32; 3]> for WeightVector {
    fn from(w: [f32; 3]) -> Self {
        Self { w }
    }
}

impl From<WeightVector> for [f32; 3] {
    fn from(w: WeightVector) -> Self {
        w.w
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.w[0], self.w[1], self.w[2])
    }
}

/// Error for parsing a `"w0,w1,w2"` weight string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseWeightsError {
    #[error("expected 3 comma-separated weights, got {0}")]
    WrongCount(usize),

    #[error("invalid weight {0:?}")]
    InvalidNumber(String),
}

impl FromStr for WeightVector {
    type Err = ParseWeightsError;

    /// Parse three comma-separated numbers, e.g. `"1,0.5,2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseWeightsError::WrongCount(parts.len()));
        }

        let mut w = [0.0f32; 3];
        for (slot, part) in w.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f32>()
                .map_err(|_| ParseWeightsError::InvalidNumber(part.to_string()))?;
        }
        Ok(Self { w })
    }
}
