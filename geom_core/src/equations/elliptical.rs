//! # Elliptical Conduit Formulas
//!
//! Ellipse of full height `h` and full width `w`, semi-axes `a = w/2`
//! (horizontal) and `b = h/2` (vertical). Depth is located by the parametric
//! angle θ′ measured from the horizontal axis:
//!
//! ```text
//!            .-~~~~~-.
//!         .'           '.
//!        |       o-------|  a       sin θ′ = (y − b)/b
//!        |~~~~~~/~~~~~~~~|  ← y
//!         '.   /θ′     .'
//!            '-._____.-'
//! ```
//!
//! There is no closed form for the wetted perimeter (it is an incomplete
//! elliptic integral of the second kind). [`elliptical_perimeter`] integrates
//! the exact arc length with fixed-order composite Simpson quadrature.

use std::f64::consts::FRAC_PI_2;

/// Simpson panels used for the wetted arc length. Even.
pub const ELLIPSE_ARC_PANELS: usize = 64;

/// Parametric angle θ′ = arcsin((y − b)/b), with the argument clamped to
/// `[-1, 1]`.
#[inline]
pub fn elliptical_theta(y_m: f64, height_m: f64) -> f64 {
    let b = height_m / 2.0;
    ((y_m - b) / b).max(-1.0).min(1.0).asin()
}

/// Flow area of a part-full ellipse.
///
/// # Formula
/// A = ab(π/2 + θ′) + ab·cos θ′·sin θ′
///
/// # Example
/// ```rust
/// use geom_core::equations::elliptical::elliptical_area;
///
/// // Half-full ellipse, w = 2, h = 1: A = πab/2 = π/4
/// let area = elliptical_area(0.5, 1.0, 2.0);
/// assert!((area - std::f64::consts::PI / 4.0).abs() < 1e-12);
/// ```
#[inline]
pub fn elliptical_area(y_m: f64, height_m: f64, width_m: f64) -> f64 {
    let a = width_m / 2.0;
    let b = height_m / 2.0;
    let theta = elliptical_theta(y_m, height_m);
    let area = a * b * (FRAC_PI_2 + theta) + a * b * theta.cos() * theta.sin();
    area.max(0.0)
}

/// Wetted perimeter of a part-full ellipse: the arc length of the boundary
/// below the free surface, both sides.
///
/// # Formula
/// Pe = 2∫ √(a² sin² t + b² cos² t) dt,  t ∈ [−π/2, θ′]
#[inline]
pub fn elliptical_perimeter(y_m: f64, height_m: f64, width_m: f64) -> f64 {
    let a = width_m / 2.0;
    let b = height_m / 2.0;
    let upper = elliptical_theta(y_m, height_m);
    let span = upper + FRAC_PI_2;
    if !(span > 0.0) {
        return 0.0;
    }

    let speed = |t: f64| {
        let (s, c) = t.sin_cos();
        (a * a * s * s + b * b * c * c).sqrt()
    };

    let step = span / ELLIPSE_ARC_PANELS as f64;
    let mut sum = speed(-FRAC_PI_2) + speed(upper);
    for i in 1..ELLIPSE_ARC_PANELS {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * speed(-FRAC_PI_2 + i as f64 * step);
    }
    2.0 * sum * step / 3.0
}

/// Top width of a part-full ellipse.
///
/// # Formula
/// B = 2·cos θ′·√(a² cos² θ′ + b² sin² θ′)
#[inline]
pub fn elliptical_top_width(y_m: f64, height_m: f64, width_m: f64) -> f64 {
    let a = width_m / 2.0;
    let b = height_m / 2.0;
    let (s, c) = elliptical_theta(y_m, height_m).sin_cos();
    (2.0 * c * (a * a * c * c + b * b * s * s).sqrt()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn ramanujan_circumference(a: f64, b: f64) -> f64 {
        let h = ((a - b) / (a + b)).powi(2);
        PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    #[test]
    fn test_area_limits() {
        assert_eq!(elliptical_area(0.0, 1.0, 2.0), 0.0);
        let full = elliptical_area(1.0, 1.0, 2.0);
        assert!((full - PI * 1.0 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_perimeter_full_matches_ramanujan() {
        let pe = elliptical_perimeter(1.0, 1.0, 2.0);
        let reference = ramanujan_circumference(1.0, 0.5);
        assert!((pe - reference).abs() / reference < 1e-6, "{} vs {}", pe, reference);
    }

    #[test]
    fn test_perimeter_circle() {
        // w = h: the ellipse is a circle and Pe = 2rθ with θ measured from the invert
        let d = 1.2;
        assert!((elliptical_perimeter(d, d, d) - PI * d).abs() < 1e-9);
        assert!((elliptical_perimeter(d / 2.0, d, d) - PI * d / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_perimeter_empty_and_positive() {
        assert_eq!(elliptical_perimeter(0.0, 1.0, 2.0), 0.0);
        assert!(elliptical_perimeter(1e-6, 1.0, 2.0) > 0.0);
    }

    #[test]
    fn test_top_width_at_axis() {
        // At half height the top width is the full width
        assert!((elliptical_top_width(0.5, 1.0, 2.0) - 2.0).abs() < 1e-12);
        assert!(elliptical_top_width(0.0, 1.0, 2.0) < 1e-12);
        assert!(elliptical_top_width(1.0, 1.0, 2.0) >= 0.0);
    }
}
