//! # Circular Conduit Formulas
//!
//! Part-full circular pipe of diameter `d`, measured by the half-angle θ
//! subtended at the pipe center by the free surface:
//!
//! ```text
//!          .-~~~-.
//!        /         \
//!       |     o     |      r = d/2
//!       |~~~~/|\~~~~|  ←   free surface, top width B = 2r·sin θ
//!        \  / θ \  /
//!          '-___-'         y measured up from the invert
//! ```
//!
//! θ = arccos(1 − y/r). The normalized depth `y/r` is clamped into `[0, 2]`
//! so arccos never leaves its domain.
//!
//! Above full depth the top width is replaced by a Preissman slot of width
//! `p·d`, which lets a free-surface solver carry surcharged flow.

/// Half-angle θ (radians) of the free surface for depth `y_m`.
///
/// θ = 0 for an empty pipe, π/2 at half depth, π when full.
#[inline]
pub fn circular_theta(y_m: f64, diameter_m: f64) -> f64 {
    let r = diameter_m / 2.0;
    let phi = (y_m / r).max(0.0).min(2.0);
    (1.0 - phi).acos()
}

/// Flow area of a part-full circular pipe.
///
/// # Formula
/// A = r²(θ − sin θ cos θ)
///
/// # Example
/// ```rust
/// use geom_core::equations::circular::circular_area;
///
/// // Half-full 1 m pipe: A = π/8
/// let area = circular_area(0.5, 1.0);
/// assert!((area - std::f64::consts::PI / 8.0).abs() < 1e-12);
/// ```
#[inline]
pub fn circular_area(y_m: f64, diameter_m: f64) -> f64 {
    let r = diameter_m / 2.0;
    let theta = circular_theta(y_m, diameter_m);
    (r * r * (theta - theta.sin() * theta.cos())).max(0.0)
}

/// Wetted perimeter of a part-full circular pipe.
///
/// # Formula
/// Pe = 2rθ
#[inline]
pub fn circular_perimeter(y_m: f64, diameter_m: f64) -> f64 {
    diameter_m * circular_theta(y_m, diameter_m)
}

/// Top width of a circular pipe, switching to the Preissman slot at full
/// depth.
///
/// # Formula
/// B = 2r·sin θ   (y < d)
/// B = p·d        (y ≥ d)
///
/// # Arguments
/// * `y_m` - Reduced depth (m)
/// * `diameter_m` - Pipe diameter (m)
/// * `slot_ratio` - Preissman slot width as a fraction of the diameter
#[inline]
pub fn circular_top_width(y_m: f64, diameter_m: f64, slot_ratio: f64) -> f64 {
    if y_m < diameter_m {
        let theta = circular_theta(y_m, diameter_m);
        (diameter_m * theta.sin()).max(0.0)
    } else {
        slot_ratio * diameter_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_theta_range() {
        assert_eq!(circular_theta(0.0, 1.0), 0.0);
        assert!((circular_theta(0.5, 1.0) - PI / 2.0).abs() < 1e-12);
        assert!((circular_theta(1.0, 1.0) - PI).abs() < 1e-12);
        // Out-of-range ratios clamp instead of producing NaN
        assert!((circular_theta(1.3, 1.0) - PI).abs() < 1e-12);
        assert_eq!(circular_theta(-0.1, 1.0), 0.0);
    }

    #[test]
    fn test_half_full() {
        assert!((circular_area(0.5, 1.0) - 0.3927).abs() < 1e-4);
        assert!((circular_perimeter(0.5, 1.0) - PI / 2.0).abs() < 1e-12);
        assert!((circular_top_width(0.5, 1.0, 0.01) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_pipe() {
        let d = 0.6;
        let full_area = PI * (d / 2.0) * (d / 2.0);
        assert!((circular_area(d, d) - full_area).abs() < 1e-12);
        assert!((circular_perimeter(d, d) - PI * d).abs() < 1e-12);
        assert_eq!(circular_top_width(d, d, 0.02), 0.02 * d);
    }

    #[test]
    fn test_empty_pipe() {
        assert_eq!(circular_area(0.0, 1.0), 0.0);
        assert_eq!(circular_perimeter(0.0, 1.0), 0.0);
        assert_eq!(circular_top_width(0.0, 1.0, 0.01), 0.0);
    }

    #[test]
    fn test_symmetry_about_half_depth() {
        // Top width at 0.25d equals top width at 0.75d
        let low = circular_top_width(0.25, 1.0, 0.01);
        let high = circular_top_width(0.75, 1.0, 0.01);
        assert!((low - high).abs() < 1e-12);
    }
}
