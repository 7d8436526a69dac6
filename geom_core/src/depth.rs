//! # Depth Reduction
//!
//! Every cross-section formula works on a single representative depth `y`
//! for the link. It is the mean of the two junction depths, clamped into the
//! physically valid range of the shape:
//!
//! ```text
//!   h_up ┐                         ┌ h_dn
//!        │~~~~~~~~~~~~~~~~~~~~~~~~~│        y = clamp((h_up + h_dn) / 2, 0, y_max)
//!   ─────┴─────────────────────────┴─────   invert
//! ```
//!
//! Depths are in meters above the channel invert. Junction depths may be
//! transiently negative while the outer solver iterates; they reduce to an
//! empty section rather than an error.

use serde::{Deserialize, Serialize};

/// Depth substituted for an empty parabolic channel before its perimeter is
/// evaluated. The perimeter formula carries a `1/x` term with `x ∝ y`.
pub const PARABOLIC_MIN_DEPTH_M: f64 = f64::EPSILON;

/// Upstream and downstream junction depths bounding one link.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DepthPair {
    /// Depth at the upstream junction (m)
    pub upstream_m: f64,
    /// Depth at the downstream junction (m)
    pub downstream_m: f64,
}

impl DepthPair {
    pub const fn new(upstream_m: f64, downstream_m: f64) -> Self {
        Self {
            upstream_m,
            downstream_m,
        }
    }

    /// Same depth at both junctions.
    pub const fn uniform(depth_m: f64) -> Self {
        Self::new(depth_m, depth_m)
    }

    /// Arithmetic mean of the two junction depths, unclamped.
    #[inline]
    pub fn mean_m(&self) -> f64 {
        mean_depth(self.upstream_m, self.downstream_m)
    }

    /// Reduced depth for a shape whose full depth is `y_max_m`.
    #[inline]
    pub fn reduce(&self, y_max_m: f64) -> f64 {
        reduce_depth(self.upstream_m, self.downstream_m, y_max_m)
    }
}

impl From<(f64, f64)> for DepthPair {
    fn from((upstream_m, downstream_m): (f64, f64)) -> Self {
        Self::new(upstream_m, downstream_m)
    }
}

/// Arithmetic mean of two junction depths.
#[inline]
pub fn mean_depth(h_upstream_m: f64, h_downstream_m: f64) -> f64 {
    (h_upstream_m + h_downstream_m) / 2.0
}

/// Clamp a depth into `[0, y_max_m]`.
///
/// A NaN depth clamps to zero: `f64::max` returns the non-NaN operand.
#[inline]
pub fn clamp_depth(y_m: f64, y_max_m: f64) -> f64 {
    y_m.max(0.0).min(y_max_m)
}

/// Representative link depth: mean of the junction depths, clamped to
/// `[0, y_max_m]`.
///
/// # Example
/// ```rust
/// use geom_core::depth::reduce_depth;
///
/// assert_eq!(reduce_depth(0.4, 0.6, 1.0), 0.5);
/// assert_eq!(reduce_depth(-0.3, -0.1, 1.0), 0.0);
/// assert_eq!(reduce_depth(1.8, 2.4, 1.0), 1.0);
/// ```
#[inline]
pub fn reduce_depth(h_upstream_m: f64, h_downstream_m: f64, y_max_m: f64) -> f64 {
    clamp_depth(mean_depth(h_upstream_m, h_downstream_m), y_max_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_then_clamp() {
        assert!((reduce_depth(0.2, 0.4, 2.0) - 0.3).abs() < 1e-12);
        assert_eq!(reduce_depth(3.0, 5.0, 2.0), 2.0);
        assert_eq!(reduce_depth(-1.0, 0.5, 2.0), 0.0);
    }

    #[test]
    fn test_mean_is_clamped_not_the_junctions() {
        // One junction above full depth, the other dry: mean is inside the range
        assert!((reduce_depth(1.5, 0.0, 1.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_nan_reduces_to_empty() {
        assert_eq!(reduce_depth(f64::NAN, 0.5, 1.0), 0.0);
    }

    #[test]
    fn test_depth_pair() {
        let pair = DepthPair::from((0.25, 0.75));
        assert_eq!(pair.mean_m(), 0.5);
        assert_eq!(pair.reduce(0.4), 0.4);
        assert_eq!(DepthPair::uniform(0.3).reduce(1.0), 0.3);
    }

    #[test]
    fn test_parabolic_epsilon_is_positive() {
        assert!(PARABOLIC_MIN_DEPTH_M > 0.0);
        assert!(PARABOLIC_MIN_DEPTH_M < 1e-12);
    }
}
