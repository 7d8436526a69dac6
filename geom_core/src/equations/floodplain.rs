//! # Two-Stage Floodplain Channel Formulas
//!
//! A trapezoidal low-flow channel of depth `y_mid` set into the floor of a
//! wider trapezoidal floodplain channel:
//!
//! ```text
//!    \                                      /      upper channel,
//!     \                                    /       bed b_u, slope m_u
//!      \~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~/  ← y
//!       \________       b_u      ________/   ← y_mid
//!       bench    \~~~~~~~~~~~~~~/    bench
//!                 \            /             lower channel,
//!                  \__________/              bed b_l, slope m_l
//!                       b_l
//! ```
//!
//! The depth is split at the transition:
//!
//! - `y_lower = min(y, y_mid)`
//! - `y_upper = max(y − y_mid, 0)`
//!
//! The upper channel's bed `b_u` spans the lower channel's top opening
//! `b_mid = b_l + 2·m_l·y_mid`, so only the benches `b_u − b_mid` add wetted
//! perimeter once the water leaves the low-flow channel. With `b_u = b_mid`
//! (no benches) area, perimeter and top width are all continuous at `y_mid`.

use super::trapezoidal::{side_slope_factor, trapezoidal_area};

/// Split a depth into its lower- and upper-channel parts, plus the indicator
/// `k` (1 once the floodplain is wetted).
#[inline]
pub fn floodplain_split(y_m: f64, mid_height_m: f64) -> (f64, f64, f64) {
    if y_m < mid_height_m {
        (y_m, 0.0, 0.0)
    } else {
        (mid_height_m, y_m - mid_height_m, 1.0)
    }
}

/// Top width of the low-flow channel at the transition depth:
/// b_mid = b_l + 2·m_l·y_mid
#[inline]
pub fn floodplain_transition_width(mid_height_m: f64, lower_width_m: f64, lower_slope: f64) -> f64 {
    lower_width_m + 2.0 * lower_slope * mid_height_m
}

/// Flow area of a floodplain section.
///
/// # Formula
/// A = y_l(b_l + m_l·y_l) + y_u(b_u + m_u·y_u)
///
/// # Example
/// ```rust
/// use geom_core::equations::floodplain::floodplain_area;
///
/// // Rectangular 2 m channel, 1 m deep, under a 6 m rectangular floodplain
/// let area = floodplain_area(1.5, 1.0, 2.0, 6.0, 0.0, 0.0);
/// assert!((area - (2.0 + 3.0)).abs() < 1e-12);
/// ```
#[inline]
pub fn floodplain_area(
    y_m: f64,
    mid_height_m: f64,
    lower_width_m: f64,
    upper_width_m: f64,
    lower_slope: f64,
    upper_slope: f64,
) -> f64 {
    let (y_lower, y_upper, _) = floodplain_split(y_m, mid_height_m);
    trapezoidal_area(y_lower, lower_width_m, lower_slope) + trapezoidal_area(y_upper, upper_width_m, upper_slope)
}

/// Wetted perimeter of a floodplain section.
///
/// # Formula
/// Pe = b_l + 2y_l√(1 + m_l²) + k·(b_u − b_mid) + 2y_u√(1 + m_u²)
///
/// `k` is 1 for `y ≥ y_mid` and 0 below.
#[inline]
pub fn floodplain_perimeter(
    y_m: f64,
    mid_height_m: f64,
    lower_width_m: f64,
    upper_width_m: f64,
    lower_slope: f64,
    upper_slope: f64,
) -> f64 {
    let (y_lower, y_upper, k) = floodplain_split(y_m, mid_height_m);
    let b_mid = floodplain_transition_width(mid_height_m, lower_width_m, lower_slope);
    let lower = lower_width_m + 2.0 * y_lower * side_slope_factor(lower_slope);
    let upper = k * (upper_width_m - b_mid) + 2.0 * y_upper * side_slope_factor(upper_slope);
    lower + upper
}

/// Top width of a floodplain section.
///
/// # Formula
/// B = b_l + 2m_l·y        (y < y_mid)
/// B = b_u + 2m_u·y_u      (y ≥ y_mid)
#[inline]
pub fn floodplain_top_width(
    y_m: f64,
    mid_height_m: f64,
    lower_width_m: f64,
    upper_width_m: f64,
    lower_slope: f64,
    upper_slope: f64,
) -> f64 {
    if y_m < mid_height_m {
        lower_width_m + 2.0 * lower_slope * y_m
    } else {
        upper_width_m + 2.0 * upper_slope * (y_m - mid_height_m)
    }
}
