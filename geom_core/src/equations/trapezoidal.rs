//! # Trapezoidal and Triangular Channel Formulas
//!
//! ```text
//!   \                 /
//!    \~~~~~~~~~~~~~~~/   ← B = b + 2my
//!     \             /  y
//!      \___________/
//!      1     b     m     side slope m = run/rise
//! ```
//!
//! A triangular (V) channel is the trapezoid with `b = 0`. Top width is
//! capped at the bank-full value `y_max`.

/// Length of one sloped bank per unit depth: √(1 + m²)
#[inline]
pub fn side_slope_factor(side_slope: f64) -> f64 {
    (1.0 + side_slope * side_slope).sqrt()
}

/// Flow area of a trapezoidal channel.
///
/// # Formula
/// A = y(b + my)
///
/// # Arguments
/// * `y_m` - Reduced depth (m)
/// * `bottom_width_m` - Bed width b (m)
/// * `side_slope` - Inverse bank slope m (run/rise)
#[inline]
pub fn trapezoidal_area(y_m: f64, bottom_width_m: f64, side_slope: f64) -> f64 {
    y_m * (bottom_width_m + side_slope * y_m)
}

/// Wetted perimeter of a trapezoidal channel.
///
/// # Formula
/// Pe = b + 2y√(1 + m²)
#[inline]
pub fn trapezoidal_perimeter(y_m: f64, bottom_width_m: f64, side_slope: f64) -> f64 {
    bottom_width_m + 2.0 * y_m * side_slope_factor(side_slope)
}

/// Top width of a trapezoidal channel, held at the bank-full width above
/// `y_max_m`.
///
/// # Formula
/// B = b + 2m·min(y, y_max)
#[inline]
pub fn trapezoidal_top_width(y_m: f64, y_max_m: f64, bottom_width_m: f64, side_slope: f64) -> f64 {
    bottom_width_m + 2.0 * side_slope * y_m.min(y_max_m)
}

/// Flow area of a triangular channel: A = m·y²
///
/// # Example
/// ```rust
/// use geom_core::equations::trapezoidal::triangular_area;
///
/// assert_eq!(triangular_area(0.5, 2.0), 0.5);
/// ```
#[inline]
pub fn triangular_area(y_m: f64, side_slope: f64) -> f64 {
    side_slope * y_m * y_m
}

/// Wetted perimeter of a triangular channel: Pe = 2y√(1 + m²)
#[inline]
pub fn triangular_perimeter(y_m: f64, side_slope: f64) -> f64 {
    2.0 * y_m * side_slope_factor(side_slope)
}

/// Top width of a triangular channel: B = 2m·min(y, y_max)
#[inline]
pub fn triangular_top_width(y_m: f64, y_max_m: f64, side_slope: f64) -> f64 {
    2.0 * side_slope * y_m.min(y_max_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_reference_case() {
        // m = 2, y = 0.5
        assert_eq!(triangular_area(0.5, 2.0), 0.5);
        assert!((triangular_perimeter(0.5, 2.0) - 5.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(triangular_top_width(0.5, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_trapezoid_reduces_to_triangle() {
        let y = 0.8;
        let m = 1.5;
        assert!((trapezoidal_area(y, 0.0, m) - triangular_area(y, m)).abs() < 1e-12);
        assert!((trapezoidal_perimeter(y, 0.0, m) - triangular_perimeter(y, m)).abs() < 1e-12);
        assert!((trapezoidal_top_width(y, 2.0, 0.0, m) - triangular_top_width(y, 2.0, m)).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_reduces_to_rectangle() {
        assert_eq!(trapezoidal_area(1.0, 3.0, 0.0), 3.0);
        assert_eq!(trapezoidal_perimeter(1.0, 3.0, 0.0), 5.0);
    }

    #[test]
    fn test_top_width_capped_at_bank_full() {
        assert_eq!(trapezoidal_top_width(3.0, 2.0, 1.0, 1.0), 5.0);
        assert_eq!(triangular_top_width(3.0, 2.0, 1.0), 4.0);
    }
}
