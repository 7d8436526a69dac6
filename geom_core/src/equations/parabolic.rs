//! # Parabolic Channel Formulas
//!
//! ```text
//!   \                       /   ← B = b at y = h
//!    \                     /
//!     `.~~~~~~~~~~~~~~~~~.'     ← B = b·√(y/h)
//!       `-.           .-'
//!          `--.___.--'
//! ```
//!
//! The bank-full top width is `b` at the channel height `h`. The perimeter is
//! the arc length of the parabola:
//!
//! Pe = (b/2)·[√(1 + x²) + ln(x + √(1 + x²)) / x],   x = 4y/b
//!
//! `ln(x + √(1 + x²))` is `asinh(x)`, and `asinh(x)/x → 1` as `x → 0`, but the
//! quotient is undefined at exactly zero. An empty channel is evaluated at
//! [`PARABOLIC_MIN_DEPTH_M`] instead.

use crate::depth::PARABOLIC_MIN_DEPTH_M;

/// Flow area: A = 2by/3
#[inline]
pub fn parabolic_area(y_m: f64, width_m: f64) -> f64 {
    2.0 * width_m * y_m / 3.0
}

/// Wetted perimeter of a parabolic channel.
///
/// Depths at or below zero are replaced by [`PARABOLIC_MIN_DEPTH_M`], so the
/// result tends to `b` for an empty channel and is never NaN or infinite for
/// a positive width.
///
/// # Example
/// ```rust
/// use geom_core::equations::parabolic::parabolic_perimeter;
///
/// let pe = parabolic_perimeter(0.0, 2.0);
/// assert!(pe.is_finite() && pe > 0.0);
/// ```
#[inline]
pub fn parabolic_perimeter(y_m: f64, width_m: f64) -> f64 {
    let y = if y_m <= 0.0 { PARABOLIC_MIN_DEPTH_M } else { y_m };
    let x = 4.0 * y / width_m;
    (width_m / 2.0) * ((1.0 + x * x).sqrt() + x.asinh() / x)
}

/// Top width: B = b·√(y/h)
#[inline]
pub fn parabolic_top_width(y_m: f64, height_m: f64, width_m: f64) -> f64 {
    if y_m <= 0.0 {
        return 0.0;
    }
    width_m * (y_m / height_m).sqrt()
}
