//! # Force Main Formulas
//!
//! A force main is a pumped circular pipe that always runs full. Area and
//! perimeter are those of the full circle regardless of depth; the top width
//! is the Preissman slot.

use std::f64::consts::PI;

/// Full-pipe area: A = π(d/2)²
#[inline]
pub fn force_main_area(diameter_m: f64) -> f64 {
    let r = diameter_m / 2.0;
    PI * r * r
}

/// Full-pipe perimeter: Pe = πd
#[inline]
pub fn force_main_perimeter(diameter_m: f64) -> f64 {
    PI * diameter_m
}

/// Slot width: B = p·d
#[inline]
pub fn force_main_top_width(diameter_m: f64, slot_ratio: f64) -> f64 {
    slot_ratio * diameter_m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_main_constants() {
        assert!((force_main_area(2.0) - PI).abs() < 1e-12);
        assert!((force_main_perimeter(2.0) - 2.0 * PI).abs() < 1e-12);
        assert!((force_main_top_width(2.0, 0.001) - 0.002).abs() < 1e-15);
    }
}
