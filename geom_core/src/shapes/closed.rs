//! Closed conduits: circular, closed rectangular, elliptical and force main.
//!
//! Circular, closed rectangular and force-main sections carry a Preissman
//! slot: at full depth the top width becomes `slot_ratio × (diameter or
//! width)`, so the outer free-surface solver can represent surcharged flow.

use serde::{Deserialize, Serialize};

use super::{require_positive, CrossSection};
use crate::errors::GeomResult;
use crate::equations::{
    circular_area, circular_perimeter, circular_top_width, elliptical_area, elliptical_perimeter,
    elliptical_top_width, force_main_area, force_main_perimeter, force_main_top_width,
    rect_closed_top_width, rectangular_area, rectangular_perimeter,
};

/// Part-full circular pipe.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Circular", "diameter_m": 0.9, "slot_ratio": 0.001 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularSection {
    /// Internal diameter (m)
    pub diameter_m: f64,
    /// Preissman slot width as a fraction of the diameter
    pub slot_ratio: f64,
}

impl CircularSection {
    pub fn new(diameter_m: f64, slot_ratio: f64) -> Self {
        Self { diameter_m, slot_ratio }
    }
}

impl CrossSection for CircularSection {
    fn max_depth_m(&self) -> f64 {
        self.diameter_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        circular_area(y_m, self.diameter_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        circular_perimeter(y_m, self.diameter_m)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        circular_top_width(y_m, self.diameter_m, self.slot_ratio)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("slot_ratio", self.slot_ratio)
    }
}

/// Closed rectangular box culvert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectClosedSection {
    /// Internal height (m)
    pub height_m: f64,
    /// Internal width (m)
    pub width_m: f64,
    /// Preissman slot width as a fraction of the width
    pub slot_ratio: f64,
}

impl RectClosedSection {
    pub fn new(height_m: f64, width_m: f64, slot_ratio: f64) -> Self {
        Self {
            height_m,
            width_m,
            slot_ratio,
        }
    }
}

impl CrossSection for RectClosedSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        rectangular_area(y_m, self.width_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        rectangular_perimeter(y_m, self.width_m)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        rect_closed_top_width(y_m, self.height_m, self.width_m, self.slot_ratio)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("slot_ratio", self.slot_ratio)
    }
}

/// Elliptical conduit with vertical axis `height_m` and horizontal axis
/// `width_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalSection {
    /// Full internal height (m)
    pub height_m: f64,
    /// Full internal width (m)
    pub width_m: f64,
}

impl EllipticalSection {
    pub fn new(height_m: f64, width_m: f64) -> Self {
        Self { height_m, width_m }
    }
}

impl CrossSection for EllipticalSection {
    fn max_depth_m(&self) -> f64 {
        self.height_m
    }

    fn area_m2(&self, y_m: f64) -> f64 {
        elliptical_area(y_m, self.height_m, self.width_m)
    }

    fn wetted_perimeter_m(&self, y_m: f64) -> f64 {
        elliptical_perimeter(y_m, self.height_m, self.width_m)
    }

    fn top_width_m(&self, y_m: f64) -> f64 {
        elliptical_top_width(y_m, self.height_m, self.width_m)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("width_m", self.width_m)
    }
}

/// Pumped circular pipe that always runs full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceMainSection {
    /// Internal diameter (m)
    pub diameter_m: f64,
    /// Preissman slot width as a fraction of the diameter
    pub slot_ratio: f64,
}

impl ForceMainSection {
    pub fn new(diameter_m: f64, slot_ratio: f64) -> Self {
        Self { diameter_m, slot_ratio }
    }
}

impl CrossSection for ForceMainSection {
    fn max_depth_m(&self) -> f64 {
        self.diameter_m
    }

    // Depth-independent: the pipe is always pressurized.
    fn area_m2(&self, _y_m: f64) -> f64 {
        force_main_area(self.diameter_m)
    }

    fn wetted_perimeter_m(&self, _y_m: f64) -> f64 {
        force_main_perimeter(self.diameter_m)
    }

    fn top_width_m(&self, _y_m: f64) -> f64 {
        force_main_top_width(self.diameter_m, self.slot_ratio)
    }

    fn validate(&self) -> GeomResult<()> {
        require_positive("diameter_m", self.diameter_m)?;
        require_positive("slot_ratio", self.slot_ratio)
    }
}
