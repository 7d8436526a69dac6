//! # Rectangular Section Formulas
//!
//! Three rectangular variants share the same area:
//!
//! ```text
//!   closed box            open channel          wide channel
//!   ┌─────────┐           │         │
//!   │~~~~~~~~~│ y         │~~~~~~~~~│ y         ~~~~~~~~~~~~~~~~~~~ y
//!   └─────────┘           └─────────┘           ═══════════════════
//!        b                     b                         b
//! ```
//!
//! - **Closed**: box culvert; top width becomes a Preissman slot `p·b` at
//!   full height.
//! - **Open**: top width is always `b`.
//! - **Wide**: side walls are neglected; the wetted perimeter is the bed
//!   width alone.

/// Flow area of a rectangular section.
///
/// # Formula
/// A = y·b
///
/// # Example
/// ```rust
/// use geom_core::equations::rectangular::rectangular_area;
///
/// assert_eq!(rectangular_area(1.0, 1.5), 1.5);
/// ```
#[inline]
pub fn rectangular_area(y_m: f64, width_m: f64) -> f64 {
    y_m * width_m
}

/// Wetted perimeter of a rectangular section with both walls wetted.
///
/// # Formula
/// Pe = b + 2y
#[inline]
pub fn rectangular_perimeter(y_m: f64, width_m: f64) -> f64 {
    width_m + 2.0 * y_m
}

/// Top width of a closed rectangular conduit.
///
/// The slot applies from full height upwards; there is no intermediate value.
///
/// # Formula
/// B = b      (y < h)
/// B = p·b    (y ≥ h)
#[inline]
pub fn rect_closed_top_width(y_m: f64, height_m: f64, width_m: f64, slot_ratio: f64) -> f64 {
    if y_m < height_m {
        width_m
    } else {
        slot_ratio * width_m
    }
}

/// Top width of an open rectangular channel: B = b
#[inline]
pub fn rect_open_top_width(width_m: f64) -> f64 {
    width_m
}

/// Wetted perimeter of a wide channel: Pe = b (bed friction only).
#[inline]
pub fn wide_perimeter(width_m: f64) -> f64 {
    width_m
}
