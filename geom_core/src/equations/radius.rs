//! # Hydraulic Radius
//!
//! One rule shared by every shape.

/// Hydraulic radius `R = A / Pe`, or zero when the section has no wetted
/// perimeter.
///
/// # Formula
/// R = A / Pe   (Pe > 0)
/// R = 0        (Pe ≤ 0)
///
/// # Arguments
/// * `area_m2` - Flow area (m²)
/// * `perimeter_m` - Wetted perimeter (m)
///
/// # Example
/// ```rust
/// use geom_core::equations::hydraulic_radius;
///
/// assert!((hydraulic_radius(1.5, 3.5) - 0.428_571).abs() < 1e-6);
/// assert_eq!(hydraulic_radius(0.7, 0.0), 0.0);
/// ```
#[inline]
pub fn hydraulic_radius(area_m2: f64, perimeter_m: f64) -> f64 {
    if perimeter_m > 0.0 {
        area_m2 / perimeter_m
    } else {
        0.0
    }
}
